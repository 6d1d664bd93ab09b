use zsnap_library::pair::PairingScope;

use crate::library::{cli::Cli, constant::SNAPSHOT_LABEL_FORMAT};

/// Whether a new snapshot of the data dataset is taken before planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotMode {
    Create,
    Skip,
    Ask,
}

#[derive(Debug, Clone)]
pub struct PlanConfig {
    pub data_dataset: String,
    pub backup_dataset: String,
    pub snapshot_mode: SnapshotMode,
    pub pairing_scope: PairingScope,
    pub label: Option<String>,
}

impl PlanConfig {
    pub fn new(data_dataset: &str, backup_dataset: &str) -> Self {
        PlanConfig {
            data_dataset: data_dataset.to_string(),
            backup_dataset: backup_dataset.to_string(),
            snapshot_mode: SnapshotMode::Ask,
            pairing_scope: PairingScope::All,
            label: None,
        }
    }

    pub fn new_snapshot_label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| chrono::Local::now().format(SNAPSHOT_LABEL_FORMAT).to_string())
    }
}

impl From<&Cli> for PlanConfig {
    fn from(args: &Cli) -> Self {
        let snapshot_mode = match (args.snapshot, args.no_snapshot) {
            (true, _) => SnapshotMode::Create,
            (false, true) => SnapshotMode::Skip,
            (false, false) => SnapshotMode::Ask,
        };

        let pairing_scope = match args.exclude_oldest {
            true => PairingScope::ExcludeOldest,
            false => PairingScope::All,
        };

        PlanConfig {
            data_dataset: args.data.clone(),
            backup_dataset: args.backup.clone(),
            snapshot_mode,
            pairing_scope,
            label: args.label.clone(),
        }
    }
}
