#![allow(dead_code)]

use std::{
    collections::HashMap,
    io,
    sync::Mutex,
};

use zsnap::library::{backend::SnapshotBackend, error::CommandError, prompt::Confirm};
use zsnap_library::snapshot::QualifiedSnapshot;

/// In-memory stand-in for `zfs`, `zpool`, `lsblk` and `id`.
pub struct FakeBackend {
    pub uid: Result<String, String>,
    pub snapshots: Mutex<HashMap<String, Vec<String>>>,
    pub failing_listings: Vec<String>,
    pub fail_creation: bool,
    pub estimate: Result<String, String>,
    pub pool_devices: Result<String, String>,
    pub parent: Result<String, String>,
    pub created: Mutex<Vec<String>>,
    pub estimated: Mutex<Vec<(String, String)>>,
}

impl FakeBackend {
    pub fn new(data: &str, data_labels: &[&str], backup: &str, backup_labels: &[&str]) -> Self {
        FakeBackend {
            uid: Ok("0\n".to_string()),
            snapshots: Mutex::new(HashMap::from([
                qualify(data, data_labels),
                qualify(backup, backup_labels),
            ])),
            failing_listings: vec![],
            fail_creation: false,
            estimate: Ok(send_estimate(1572864)),
            pool_devices: Ok("bk\n\tsdb1\t928G\t512G\n".to_string()),
            parent: Ok("sdb\n".to_string()),
            created: Mutex::new(vec![]),
            estimated: Mutex::new(vec![]),
        }
    }

    pub fn created(&self) -> Vec<String> {
        self.created.lock().unwrap().clone()
    }

    pub fn estimated(&self) -> Vec<(String, String)> {
        self.estimated.lock().unwrap().clone()
    }
}

fn qualify(dataset: &str, labels: &[&str]) -> (String, Vec<String>) {
    let names = labels
        .iter()
        .map(|label| format!("{}@{}", dataset, label))
        .collect();

    (dataset.to_string(), names)
}

pub fn send_estimate(bytes: u64) -> String {
    format!("incremental\tB\tpool@D\t{}\nsize\t{}\n", bytes, bytes)
}

fn failure(command: &str, message: &str) -> CommandError {
    CommandError::new(command, message)
}

impl SnapshotBackend for FakeBackend {
    async fn current_uid(&self) -> Result<String, CommandError> {
        self.uid.clone().map_err(|e| failure("id -u", &e))
    }

    async fn list_snapshots(&self, dataset: &str) -> Result<String, CommandError> {
        let command = format!("zfs list -H -t snapshot -o name -s creation {}", dataset);

        if self.failing_listings.iter().any(|d| d == dataset) {
            return Err(failure(
                &command,
                &format!("cannot open '{}': dataset does not exist", dataset),
            ));
        }

        let snapshots = self.snapshots.lock().unwrap();

        Ok(snapshots
            .get(dataset)
            .map(|names| names.iter().map(|n| format!("{}\n", n)).collect())
            .unwrap_or_default())
    }

    async fn create_snapshot(&self, snapshot: &QualifiedSnapshot) -> Result<(), CommandError> {
        if self.fail_creation {
            return Err(failure(
                &format!("zfs snapshot {}", snapshot),
                "dataset already exists",
            ));
        }

        self.created.lock().unwrap().push(snapshot.to_string());
        self.snapshots
            .lock()
            .unwrap()
            .entry(snapshot.dataset.clone())
            .or_default()
            .push(snapshot.to_string());

        Ok(())
    }

    async fn estimate_send(
        &self,
        old: &QualifiedSnapshot,
        new: &QualifiedSnapshot,
    ) -> Result<String, CommandError> {
        self.estimated
            .lock()
            .unwrap()
            .push((old.to_string(), new.to_string()));

        self.estimate
            .clone()
            .map_err(|e| failure(&format!("zfs send -nP -i {} {}", old, new), &e))
    }

    async fn list_pool_devices(&self, pool: &str) -> Result<String, CommandError> {
        self.pool_devices
            .clone()
            .map_err(|e| failure(&format!("zpool list -v -H -o name -L {}", pool), &e))
    }

    async fn parent_device(&self, device: &str) -> Result<String, CommandError> {
        self.parent
            .clone()
            .map_err(|e| failure(&format!("lsblk -no pkname /dev/{}", device), &e))
    }
}

/// Always gives the same answer without touching the terminal.
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&self, _prompt: &str) -> io::Result<bool> {
        Ok(self.0)
    }
}

/// A terminal that cannot be read from.
pub struct NoTerminal;

impl Confirm for NoTerminal {
    fn confirm(&self, _prompt: &str) -> io::Result<bool> {
        Err(io::Error::other("not a terminal"))
    }
}
