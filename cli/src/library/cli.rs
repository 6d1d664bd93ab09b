use clap::{ArgAction, Parser};

/// Plan an incremental zfs send from a data dataset to a backup dataset.
///
/// Nothing is transferred: the commands to run are printed instead.
#[derive(Parser, Debug)]
#[command(name = "zsnap", version)]
#[command(about = "ZFS Incremental Backup Planner", long_about = None)]
pub struct Cli {
    /// Name of the data dataset.
    #[arg(long, value_name = "DATASET")]
    pub data: String,

    /// Name of the backup dataset.
    #[arg(long, value_name = "DATASET")]
    pub backup: String,

    /// Create a new snapshot of the data dataset without asking.
    #[arg(long, conflicts_with = "no_snapshot")]
    pub snapshot: bool,

    /// Do not create a new snapshot and do not ask.
    #[arg(long)]
    pub no_snapshot: bool,

    /// Label for the new snapshot (defaults to the local time as YYYYMMDD.HHMM).
    #[arg(long, value_name = "LABEL")]
    pub label: Option<String>,

    /// Never pair on the oldest snapshot of either dataset.
    #[arg(long, default_value_t = false)]
    pub exclude_oldest: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
