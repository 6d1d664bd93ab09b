use zsnap_library::{size::parse_send_estimate, snapshot::QualifiedSnapshot};

use crate::library::{backend::SnapshotBackend, error::CollaboratorError};

/// Size in bytes of the incremental stream from `old` to `new`.
pub async fn estimate_transfer_size<B: SnapshotBackend>(
    backend: &B,
    old: &QualifiedSnapshot,
    new: &QualifiedSnapshot,
) -> Result<u64, CollaboratorError> {
    let output = backend.estimate_send(old, new).await?;

    Ok(parse_send_estimate(&output)?)
}
