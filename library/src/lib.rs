pub mod device;
pub mod error;
pub mod pair;
pub mod size;
pub mod snapshot;

pub use error::ParseError;
