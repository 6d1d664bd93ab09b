//! Process exit codes, one per kind of failure.

use crate::library::error::PlanError;

pub mod codes {
    pub const SUCCESS: u8 = 0;
    pub const ENVIRONMENT: u8 = 1;
    /// clap reports usage errors with this code.
    pub const USAGE: u8 = 2;
    pub const LISTING: u8 = 3;
    pub const NO_SNAPSHOTS: u8 = 4;
    pub const NO_PAIR: u8 = 5;
    pub const SNAPSHOT_CREATION: u8 = 6;
    pub const NOTHING_NEW: u8 = 7;
    pub const ESTIMATION: u8 = 8;
    pub const IO: u8 = 9;
}

pub fn exit_code(error: &PlanError) -> u8 {
    match error {
        PlanError::Environment(_) | PlanError::NotRoot => codes::ENVIRONMENT,
        PlanError::Listing { .. } => codes::LISTING,
        PlanError::NoSnapshots(_) => codes::NO_SNAPSHOTS,
        PlanError::NoPair => codes::NO_PAIR,
        PlanError::SnapshotCreation { .. } => codes::SNAPSHOT_CREATION,
        PlanError::NothingNew(_) => codes::NOTHING_NEW,
        PlanError::Estimation(_) => codes::ESTIMATION,
        PlanError::Prompt(_) | PlanError::Output(_) => codes::IO,
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::library::error::{CollaboratorError, CommandError};

    #[test]
    fn test_exit_code_environment() {
        assert_eq!(exit_code(&PlanError::NotRoot), codes::ENVIRONMENT);
        assert_eq!(
            exit_code(&PlanError::Environment("id: not found".to_string())),
            codes::ENVIRONMENT
        );
    }

    #[test]
    fn test_exit_code_collaborators() {
        let listing = PlanError::Listing {
            dataset: "tank".to_string(),
            source: CollaboratorError::Command(CommandError::new("zfs list", "boom")),
        };
        let creation = PlanError::SnapshotCreation {
            snapshot: "tank@x".to_string(),
            source: CommandError::new("zfs snapshot tank@x", "boom"),
        };
        let estimation =
            PlanError::Estimation(CommandError::new("zfs send -nP", "boom").into());

        assert_eq!(exit_code(&listing), codes::LISTING);
        assert_eq!(exit_code(&creation), codes::SNAPSHOT_CREATION);
        assert_eq!(exit_code(&estimation), codes::ESTIMATION);
    }

    #[test]
    fn test_exit_code_logical_state() {
        assert_eq!(
            exit_code(&PlanError::NoSnapshots("tank".to_string())),
            codes::NO_SNAPSHOTS
        );
        assert_eq!(exit_code(&PlanError::NoPair), codes::NO_PAIR);
        assert_eq!(
            exit_code(&PlanError::NothingNew("B".to_string())),
            codes::NOTHING_NEW
        );
    }

    #[test]
    fn test_exit_code_io() {
        let prompt = PlanError::Prompt(io::Error::other("not a terminal"));
        let output = PlanError::Output(io::Error::other("broken pipe"));

        assert_eq!(exit_code(&prompt), codes::IO);
        assert_eq!(exit_code(&output), codes::IO);
    }

    #[test]
    fn test_failures_are_non_zero() {
        for code in [
            codes::ENVIRONMENT,
            codes::USAGE,
            codes::LISTING,
            codes::NO_SNAPSHOTS,
            codes::NO_PAIR,
            codes::SNAPSHOT_CREATION,
            codes::NOTHING_NEW,
            codes::ESTIMATION,
            codes::IO,
        ] {
            assert_ne!(code, codes::SUCCESS);
        }
    }
}
