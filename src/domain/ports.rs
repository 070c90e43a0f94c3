use std::path::Path;

use async_trait::async_trait;

use super::errors::IntegrationError;

/// A notebook host that can attach external storage to the local filesystem.
///
/// Implementations report `HostCapability` when the primitive does not exist
/// in the current runtime, and `Mount` when it exists but fails.
#[async_trait]
pub trait MountHost: Send + Sync {
    /// Short identifier used in logs
    fn host_id(&self) -> &str;

    /// Attach storage at `mount_point`, re-running the handshake when
    /// `force_remount` is set.
    async fn mount(&self, mount_point: &Path, force_remount: bool) -> Result<(), IntegrationError>;
}
