use std::{fmt, str::FromStr};

use crate::ParseError;

/// A snapshot addressed as `<dataset>@<label>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedSnapshot {
    pub dataset: String,
    pub label: String,
}

impl QualifiedSnapshot {
    pub fn new(dataset: &str, label: &str) -> Self {
        QualifiedSnapshot {
            dataset: dataset.to_string(),
            label: label.to_string(),
        }
    }
}

impl FromStr for QualifiedSnapshot {
    type Err = ParseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let label = snapshot_label(name)?;
        let dataset = &name[..name.len() - label.len() - 1];

        Ok(QualifiedSnapshot::new(dataset, label))
    }
}

impl fmt::Display for QualifiedSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.dataset, self.label)
    }
}

/// Get the label of a snapshot without the leading dataset.
///
/// `data@snapshot123` => `snapshot123`
pub fn snapshot_label(name: &str) -> Result<&str, ParseError> {
    name.split_once('@')
        .map(|(_, label)| label)
        .ok_or_else(|| ParseError::MissingSeparator(name.to_string()))
}

/// Get the name of the pool from a dataset or snapshot.
///
/// ```text
/// data/system@snapshot123 => data
/// data123                 => data123
/// data1/test              => data1
/// ```
pub fn pool_name(dataset: &str) -> &str {
    dataset.split(['/', '@']).next().unwrap_or(dataset)
}

/// Parse the output of `zfs list -H -t snapshot -o name`, one snapshot per line,
/// oldest first. Blank output is an empty listing.
pub fn parse_snapshot_listing(output: &str) -> Result<Vec<QualifiedSnapshot>, ParseError> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(QualifiedSnapshot::from_str)
        .collect()
}
