use crate::snapshot::QualifiedSnapshot;

/// Which snapshots of each sequence may take part in pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairingScope {
    /// Every snapshot is a candidate.
    #[default]
    All,
    /// The oldest snapshot of each sequence is never considered.
    ExcludeOldest,
}

impl PairingScope {
    fn skipped(self) -> usize {
        match self {
            PairingScope::All => 0,
            PairingScope::ExcludeOldest => 1,
        }
    }
}

/// Find the label of the most recent snapshot present in both sequences.
///
/// Both sequences are ordered oldest to newest. Labels are compared without
/// their dataset prefix, so `tank/data@x` pairs with `backup/data@x`. The data
/// sequence is scanned newest first and the first label that also appears
/// anywhere in the backup sequence wins.
///
/// `None` is the normal answer for a first-ever backup.
pub fn find_latest_pair<'a>(
    data: &'a [QualifiedSnapshot],
    backup: &[QualifiedSnapshot],
    scope: PairingScope,
) -> Option<&'a str> {
    let skipped = scope.skipped();

    data.iter()
        .skip(skipped)
        .rev()
        .find(|candidate| {
            backup
                .iter()
                .skip(skipped)
                .rev()
                .any(|snapshot| snapshot.label == candidate.label)
        })
        .map(|snapshot| snapshot.label.as_str())
}
