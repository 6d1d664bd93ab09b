use std::io::Write;

use tracing::info;
use zsnap_library::{
    device::BlockDevice,
    pair::find_latest_pair,
    snapshot::{QualifiedSnapshot, parse_snapshot_listing, pool_name},
};

use crate::library::{
    backend::SnapshotBackend,
    config::{PlanConfig, SnapshotMode},
    device::resolve_backup_device,
    error::{CollaboratorError, PlanError},
    estimate::estimate_transfer_size,
    prompt::Confirm,
    render::render_plan,
    table::snapshot_table,
};

/// Everything the operator needs to run an incremental backup by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub data_dataset: String,
    pub backup_dataset: String,
    pub old_label: String,
    pub new_label: String,
    pub transfer_size: u64,
    pub backup_pool: String,
    pub device: BlockDevice,
}

/// Walks one invocation from the privilege check to the rendered plan,
/// writing progress to `out` as it goes.
pub struct Planner<'a, B, C, W> {
    backend: &'a B,
    confirm: &'a C,
    config: &'a PlanConfig,
    out: W,
}

impl<'a, B, C, W> Planner<'a, B, C, W>
where
    B: SnapshotBackend,
    C: Confirm,
    W: Write,
{
    pub fn new(backend: &'a B, confirm: &'a C, config: &'a PlanConfig, out: W) -> Self {
        Planner {
            backend,
            confirm,
            config,
            out,
        }
    }

    pub async fn run(&mut self) -> Result<Plan, PlanError> {
        let config = self.config;

        self.check_privileges().await?;

        let (data, backup) = self.list_datasets().await?;

        writeln!(self.out)?;
        writeln!(self.out, "- Determining snapshot pair for incremental backup...")?;

        let old_label = find_latest_pair(&data, &backup, config.pairing_scope)
            .ok_or(PlanError::NoPair)?
            .to_string();

        info!(label = %old_label, "found snapshot pair");

        let data = match self.should_create_snapshot()? {
            true => {
                self.create_snapshot().await?;
                self.list_snapshots(&config.data_dataset).await?
            }
            false => {
                writeln!(self.out, "- Skipping snapshot creation")?;
                data
            }
        };

        let new = data
            .last()
            .cloned()
            .ok_or_else(|| PlanError::NoSnapshots(config.data_dataset.clone()))?;

        if new.label == old_label {
            return Err(PlanError::NothingNew(old_label));
        }

        let old = QualifiedSnapshot::new(&config.data_dataset, &old_label);

        writeln!(self.out, "- Estimating transfer size...")?;

        let transfer_size = estimate_transfer_size(self.backend, &old, &new)
            .await
            .map_err(PlanError::Estimation)?;

        let resolution = resolve_backup_device(self.backend, &config.backup_dataset).await;

        if let Some(diagnostic) = &resolution.diagnostic {
            match resolution.device.is_unknown() {
                true => writeln!(self.out, "- Error determining block device:\n{}", diagnostic)?,
                false => writeln!(self.out, "- {}", diagnostic)?,
            }
        }

        let plan = Plan {
            data_dataset: config.data_dataset.clone(),
            backup_dataset: config.backup_dataset.clone(),
            old_label,
            new_label: new.label,
            transfer_size,
            backup_pool: pool_name(&config.backup_dataset).to_string(),
            device: resolution.device,
        };

        write!(self.out, "{}", render_plan(&plan))?;

        Ok(plan)
    }

    async fn check_privileges(&self) -> Result<(), PlanError> {
        let output = self
            .backend
            .current_uid()
            .await
            .map_err(|err| PlanError::Environment(err.to_string()))?;

        let uid = output.trim().parse::<u32>().map_err(|err| {
            PlanError::Environment(format!("cannot parse '{}': {}", output.trim(), err))
        })?;

        if uid != 0 {
            return Err(PlanError::NotRoot);
        }

        Ok(())
    }

    /// Lists both datasets and prints whatever was listed before reporting
    /// the first failure.
    async fn list_datasets(
        &mut self,
    ) -> Result<(Vec<QualifiedSnapshot>, Vec<QualifiedSnapshot>), PlanError> {
        let config = self.config;

        let data = self.list_snapshots(&config.data_dataset).await;
        let backup = self.list_snapshots(&config.backup_dataset).await;

        writeln!(self.out, "- Snapshots:")?;
        writeln!(
            self.out,
            "{}",
            snapshot_table(
                data.as_deref().unwrap_or_default(),
                backup.as_deref().unwrap_or_default()
            )
        )?;

        Ok((data?, backup?))
    }

    async fn list_snapshots(&mut self, dataset: &str) -> Result<Vec<QualifiedSnapshot>, PlanError> {
        writeln!(self.out, "- Getting snapshots from dataset '{}'...", dataset)?;

        let listing_error = |source: CollaboratorError| PlanError::Listing {
            dataset: dataset.to_string(),
            source,
        };

        let output = self
            .backend
            .list_snapshots(dataset)
            .await
            .map_err(|err| listing_error(err.into()))?;

        let snapshots =
            parse_snapshot_listing(&output).map_err(|err| listing_error(err.into()))?;

        info!(dataset, count = snapshots.len(), "listed snapshots");

        if snapshots.is_empty() {
            return Err(PlanError::NoSnapshots(dataset.to_string()));
        }

        Ok(snapshots)
    }

    fn should_create_snapshot(&mut self) -> Result<bool, PlanError> {
        match self.config.snapshot_mode {
            SnapshotMode::Create => Ok(true),
            SnapshotMode::Skip => Ok(false),
            SnapshotMode::Ask => {
                self.out.flush()?;

                self.confirm
                    .confirm("- Create new snapshot of data volume? (y/n)")
                    .map_err(PlanError::Prompt)
            }
        }
    }

    async fn create_snapshot(&mut self) -> Result<(), PlanError> {
        let snapshot =
            QualifiedSnapshot::new(&self.config.data_dataset, &self.config.new_snapshot_label());

        writeln!(self.out, "    Creating new snapshot {}...", snapshot)?;

        self.backend
            .create_snapshot(&snapshot)
            .await
            .map_err(|source| PlanError::SnapshotCreation {
                snapshot: snapshot.to_string(),
                source,
            })?;

        info!(%snapshot, "created snapshot");
        writeln!(self.out, "    Done")?;

        Ok(())
    }
}
