use std::sync::LazyLock;

use regex::Regex;

/// chrono format of the label given to a newly created snapshot.
pub const SNAPSHOT_LABEL_FORMAT: &str = "%Y%m%d.%H%M";

pub static BLOCK_DEVICE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.:+-]*$").expect("Failed to compile block device regex")
});
