pub mod backend;
pub mod cli;
pub mod config;
pub mod constant;
pub mod device;
pub mod error;
pub mod estimate;
pub mod exit;
pub mod logging;
pub mod plan;
pub mod progress;
pub mod prompt;
pub mod render;
pub mod table;
