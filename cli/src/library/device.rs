use tracing::info;
use zsnap_library::{
    device::{BlockDevice, parse_parent_device, parse_pool_device},
    snapshot::pool_name,
};

use crate::library::{backend::SnapshotBackend, constant::BLOCK_DEVICE_REGEX};

/// Outcome of looking up the disk behind the backup pool.
///
/// `diagnostic` carries the raw output or error of a failed lookup step, for
/// the operator to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceResolution {
    pub device: BlockDevice,
    pub diagnostic: Option<String>,
}

impl DeviceResolution {
    fn unresolved(diagnostic: String) -> Self {
        DeviceResolution {
            device: BlockDevice::unknown(),
            diagnostic: Some(diagnostic),
        }
    }
}

pub fn is_block_device_name(name: &str) -> bool {
    BLOCK_DEVICE_REGEX.is_match(name)
}

/// Find the physical disk backing the pool of `dataset`.
///
/// Never fails: a pool that is not backed by exactly one device, or any failed
/// lookup, yields the unknown device. When only the parent lookup fails the
/// pool's own device is used.
pub async fn resolve_backup_device<B: SnapshotBackend>(
    backend: &B,
    dataset: &str,
) -> DeviceResolution {
    let pool = pool_name(dataset);

    let listing = match backend.list_pool_devices(pool).await {
        Ok(listing) => listing,
        Err(err) => {
            info!(pool, %err, "cannot list pool devices");
            return DeviceResolution::unresolved(err.to_string());
        }
    };

    let device = match parse_pool_device(&listing) {
        Ok(device) if is_block_device_name(&device) => device,
        Ok(device) => {
            info!(pool, %device, "not a block device name");
            return DeviceResolution::unresolved(listing);
        }
        Err(err) => {
            info!(pool, %err, "pool is not backed by exactly one device");
            return DeviceResolution::unresolved(listing);
        }
    };

    match backend.parent_device(&device).await {
        Ok(output) => {
            let device = parse_parent_device(&output)
                .filter(|parent| is_block_device_name(parent))
                .unwrap_or(device);

            DeviceResolution {
                device: BlockDevice::known(device),
                diagnostic: None,
            }
        }
        Err(err) => {
            info!(%device, %err, "cannot determine parent device");

            DeviceResolution {
                device: BlockDevice::known(device),
                diagnostic: Some(err.to_string()),
            }
        }
    }
}
