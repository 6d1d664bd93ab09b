use std::path::PathBuf;

use indicatif::ProgressBar;
use itertools::Itertools;
use tokio::process::Command;
use tracing::debug;
use zsnap_library::snapshot::QualifiedSnapshot;

use crate::library::{error::CommandError, progress::create_command_spinner};

/// The external commands a backup plan depends on.
///
/// Every method returns the raw standard output of its command; parsing is
/// left to the caller.
#[allow(async_fn_in_trait)]
pub trait SnapshotBackend {
    /// `id -u`
    async fn current_uid(&self) -> Result<String, CommandError>;

    /// Snapshots of one dataset, oldest first.
    async fn list_snapshots(&self, dataset: &str) -> Result<String, CommandError>;

    async fn create_snapshot(&self, snapshot: &QualifiedSnapshot) -> Result<(), CommandError>;

    /// Machine parsable dry run of an incremental send.
    async fn estimate_send(
        &self,
        old: &QualifiedSnapshot,
        new: &QualifiedSnapshot,
    ) -> Result<String, CommandError>;

    /// Virtual device tree of a pool.
    async fn list_pool_devices(&self, pool: &str) -> Result<String, CommandError>;

    /// Parent kernel device of a block device (`sdb1` => `sdb`).
    async fn parent_device(&self, device: &str) -> Result<String, CommandError>;
}

/// Runs the real `zfs`, `zpool` and `lsblk` binaries.
///
/// Programs are looked up on `PATH` unless a directory is given.
#[derive(Debug, Clone, Default)]
pub struct ShellBackend {
    bin_dir: Option<PathBuf>,
}

impl ShellBackend {
    pub fn new() -> Self {
        ShellBackend::default()
    }

    pub fn with_bin_dir(bin_dir: impl Into<PathBuf>) -> Self {
        ShellBackend {
            bin_dir: Some(bin_dir.into()),
        }
    }

    fn program(&self, name: &str) -> PathBuf {
        match &self.bin_dir {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }

    async fn run(&self, program: &str, args: &[&str]) -> Result<String, CommandError> {
        let command = std::iter::once(program).chain(args.iter().copied()).join(" ");

        debug!(%command, "executing");

        let spinner = create_command_spinner(&command).unwrap_or_else(|_| ProgressBar::hidden());
        let output = Command::new(self.program(program)).args(args).output().await;
        spinner.finish_and_clear();

        let output = output.map_err(|e| CommandError::new(&command, e.to_string()))?;

        debug!(%command, status = %output.status, "finished");

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

            let message = match stderr.is_empty() {
                true => format!("{} {}", output.status, stdout.trim()),
                false => stderr,
            };

            return Err(CommandError::new(command, message.trim()));
        }

        Ok(stdout)
    }
}

impl SnapshotBackend for ShellBackend {
    async fn current_uid(&self) -> Result<String, CommandError> {
        self.run("id", &["-u"]).await
    }

    async fn list_snapshots(&self, dataset: &str) -> Result<String, CommandError> {
        self.run(
            "zfs",
            &["list", "-H", "-t", "snapshot", "-o", "name", "-s", "creation", dataset],
        )
        .await
    }

    async fn create_snapshot(&self, snapshot: &QualifiedSnapshot) -> Result<(), CommandError> {
        self.run("zfs", &["snapshot", &snapshot.to_string()])
            .await
            .map(|_| ())
    }

    async fn estimate_send(
        &self,
        old: &QualifiedSnapshot,
        new: &QualifiedSnapshot,
    ) -> Result<String, CommandError> {
        self.run(
            "zfs",
            &["send", "-nP", "-i", &old.to_string(), &new.to_string()],
        )
        .await
    }

    async fn list_pool_devices(&self, pool: &str) -> Result<String, CommandError> {
        self.run("zpool", &["list", "-v", "-H", "-o", "name", "-L", pool])
            .await
    }

    async fn parent_device(&self, device: &str) -> Result<String, CommandError> {
        self.run("lsblk", &["-no", "pkname", &format!("/dev/{}", device)])
            .await
    }
}
