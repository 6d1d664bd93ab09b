use std::fmt;

use crate::ParseError;

/// The physical disk backing a pool, when it could be determined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockDevice(Option<String>);

impl BlockDevice {
    pub const UNKNOWN: &'static str = "??";

    pub fn known(name: impl Into<String>) -> Self {
        BlockDevice(Some(name.into()))
    }

    pub fn unknown() -> Self {
        BlockDevice(None)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_unknown(&self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Display for BlockDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or(Self::UNKNOWN))
    }
}

/// Extract the only device of a pool from `zpool list -v -H -o name -L <pool>`.
///
/// The first line names the pool itself and each further line is a vdev. Only
/// a pool backed by exactly one device yields a name; anything else is
/// ambiguous.
pub fn parse_pool_device(output: &str) -> Result<String, ParseError> {
    let lines = output.trim().lines().collect::<Vec<&str>>();

    if lines.len() != 2 {
        return Err(ParseError::LineCount {
            expected: 2,
            found: lines.len(),
        });
    }

    lines[1]
        .split(['\t', ' '])
        .find(|token| !token.is_empty())
        .map(str::to_string)
        .ok_or(ParseError::MissingField { line: 2, field: 1 })
}

/// Extract the parent device name from `lsblk -no pkname /dev/<device>`.
///
/// Whole disks have no parent and produce blank output.
pub fn parse_parent_device(output: &str) -> Option<String> {
    output
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
