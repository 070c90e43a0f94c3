//! Colab host bridge
//!
//! The drive primitive only exists inside the notebook's own interpreter, so
//! the bridge runs that interpreter with a one-line script and maps the
//! outcome onto the integration error taxonomy.

use std::io;
use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::domain::errors::IntegrationError;
use crate::domain::ports::MountHost;
use crate::infrastructure::logging::SecretScrubber;

/// Present in every Colab runtime
pub const COLAB_MARKER_VAR: &str = "COLAB_RELEASE_TAG";

// Arguments arrive through argv so the mount point is never spliced into code
const MOUNT_SCRIPT: &str = "import sys\n\
from google.colab import drive\n\
drive.mount(sys.argv[1], force_remount=(sys.argv[2] == '1'))\n";

/// Mount host backed by `google.colab.drive`
#[derive(Debug, Clone)]
pub struct ColabHost {
    interpreter: String,
}

impl ColabHost {
    pub fn new(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }

    /// True when the marker variable says this process runs inside Colab.
    pub fn is_colab_runtime() -> bool {
        std::env::var_os(COLAB_MARKER_VAR).is_some()
    }

    fn build_command(&self, mount_point: &Path, force_remount: bool) -> Command {
        let mut cmd = Command::new(&self.interpreter);
        cmd.arg("-c")
            .arg(MOUNT_SCRIPT)
            .arg(mount_point)
            .arg(if force_remount { "1" } else { "0" })
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }
}

impl Default for ColabHost {
    fn default() -> Self {
        Self::new("python3")
    }
}

#[async_trait]
impl MountHost for ColabHost {
    fn host_id(&self) -> &str {
        "colab"
    }

    async fn mount(&self, mount_point: &Path, force_remount: bool) -> Result<(), IntegrationError> {
        debug!(
            interpreter = %self.interpreter,
            mount_point = %mount_point.display(),
            force_remount,
            "invoking host mount primitive"
        );

        let output = self
            .build_command(mount_point, force_remount)
            .output()
            .await
            .map_err(|err| match err.kind() {
                io::ErrorKind::NotFound => IntegrationError::HostCapability(format!(
                    "host interpreter '{}' not found",
                    self.interpreter
                )),
                _ => IntegrationError::Mount(err.to_string()),
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        warn!(
            status = %output.status,
            "host mount primitive failed: {}",
            SecretScrubber::scrub(&stderr)
        );

        if is_import_failure(&stderr) {
            Err(IntegrationError::HostCapability(format!(
                "google.colab is not available: {stderr}"
            )))
        } else {
            Err(IntegrationError::Mount(stderr))
        }
    }
}

fn is_import_failure(stderr: &str) -> bool {
    stderr.contains("ModuleNotFoundError") || stderr.contains("ImportError")
}
