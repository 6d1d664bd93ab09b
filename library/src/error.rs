use thiserror::Error;

/// Ways the output of an external command can fail to parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("'{0}' is not a qualified snapshot name (missing '@')")]
    MissingSeparator(String),

    #[error("expected {expected} lines of output, found {found}")]
    LineCount { expected: usize, found: usize },

    #[error("line {line} has no field {field}")]
    MissingField { line: usize, field: usize },

    #[error("'{0}' is not a non-negative integer")]
    NotNumeric(String),
}
