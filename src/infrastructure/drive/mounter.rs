use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, instrument};

use super::colab::ColabHost;
use crate::domain::errors::{IntegrationError, IntegrationResult};
use crate::domain::models::DriveConfig;
use crate::domain::ports::MountHost;

/// Mounts external storage at a fixed path through a host primitive.
#[derive(Clone)]
pub struct DriveMounter {
    host: Arc<dyn MountHost>,
    mount_point: PathBuf,
}

impl DriveMounter {
    /// Use an explicit host and mount point.
    pub fn new(host: Arc<dyn MountHost>, mount_point: impl Into<PathBuf>) -> Self {
        Self {
            host,
            mount_point: mount_point.into(),
        }
    }

    /// Pick the host for the current runtime.
    ///
    /// `COLAB_RELEASE_TAG` is only a fast pre-check that fails with
    /// `HostCapability` outside a Colab session. The authoritative capability
    /// check happens in [`ColabHost`]'s mount: a missing interpreter or a
    /// failed `google.colab` import is also reported as `HostCapability`, even
    /// when the marker is set.
    pub fn detect(config: &DriveConfig) -> IntegrationResult<Self> {
        if !ColabHost::is_colab_runtime() {
            return Err(IntegrationError::HostCapability(
                "drive mounting requires a Google Colab runtime".to_string(),
            ));
        }
        Ok(Self::new(
            Arc::new(ColabHost::new(config.interpreter.clone())),
            config.mount_point.clone(),
        ))
    }

    pub fn mount_point(&self) -> &std::path::Path {
        &self.mount_point
    }

    /// Mount the drive and return the mount path.
    ///
    /// Idempotent unless `force_remount` is set, in which case the host
    /// re-runs its authorization handshake. Host failures are returned as-is.
    #[instrument(skip(self), fields(host = self.host.host_id()))]
    pub async fn mount(&self, force_remount: bool) -> IntegrationResult<PathBuf> {
        self.host.mount(&self.mount_point, force_remount).await?;
        info!(mount_point = %self.mount_point.display(), "drive mounted");
        Ok(self.mount_point.clone())
    }
}

impl std::fmt::Debug for DriveMounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriveMounter")
            .field("host", &self.host.host_id())
            .field("mount_point", &self.mount_point)
            .finish()
    }
}
