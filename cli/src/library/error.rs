use std::io;

use thiserror::Error;
use zsnap_library::ParseError;

/// An external command that could not be run or exited unsuccessfully.
#[derive(Error, Debug)]
#[error("Executing `{command}` failed with: {message}")]
pub struct CommandError {
    pub command: String,
    pub message: String,
}

impl CommandError {
    pub fn new(command: impl Into<String>, message: impl Into<String>) -> Self {
        CommandError {
            command: command.into(),
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum CollaboratorError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("Unexpected command output: {0}")]
    Output(#[from] ParseError),
}

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Error determining uid: {0}")]
    Environment(String),

    #[error("This program must be run as root! (sudo)")]
    NotRoot,

    #[error("Listing snapshots of '{dataset}' failed: {source}")]
    Listing {
        dataset: String,
        source: CollaboratorError,
    },

    #[error("No snapshots found in dataset '{0}'")]
    NoSnapshots(String),

    #[error("No snapshot pair found")]
    NoPair,

    #[error("Creating snapshot '{snapshot}' failed: {source}")]
    SnapshotCreation {
        snapshot: String,
        source: CommandError,
    },

    #[error("No new snapshot found, '{0}' is already the latest")]
    NothingNew(String),

    #[error("Estimating transfer size failed: {0}")]
    Estimation(#[source] CollaboratorError),

    #[error("Reading key press failed: {0}")]
    Prompt(#[source] io::Error),

    #[error("Writing output failed: {0}")]
    Output(#[from] io::Error),
}
