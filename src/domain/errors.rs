//! Error taxonomy shared by every integration.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the drive, identity and completion integrations.
#[derive(Debug, Error)]
pub enum IntegrationError {
    /// A required credential or setting is missing. Raised before any I/O.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The remote API answered with a non-success status
    #[error("Upstream error: HTTP {status}: {body}")]
    Upstream { status: StatusCode, body: String },

    /// The request never produced a response (connect, TLS, timeout)
    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote API answered with a body that could not be decoded
    #[error("Upstream response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    /// The notebook host does not provide the mount primitive
    #[error("Host capability unavailable: {0}")]
    HostCapability(String),

    /// The host primitive ran and reported a failure
    #[error("Mount failed: {0}")]
    Mount(String),
}

impl IntegrationError {
    /// Returns true if the caller can recover by supplying a credential or setting.
    pub fn is_configuration(&self) -> bool {
        matches!(self, IntegrationError::Configuration(_))
    }

    /// Returns true for every failure that originated at a remote service.
    ///
    /// ```
    /// use notebook_link::domain::errors::IntegrationError;
    /// use reqwest::StatusCode;
    ///
    /// let error = IntegrationError::Upstream {
    ///     status: StatusCode::UNAUTHORIZED,
    ///     body: "Bad credentials".to_string(),
    /// };
    /// assert!(error.is_upstream());
    /// assert!(!IntegrationError::Configuration("missing".to_string()).is_upstream());
    /// ```
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            IntegrationError::Upstream { .. }
                | IntegrationError::Transport(_)
                | IntegrationError::Decode(_)
        )
    }

    /// HTTP status attached to the failure, if the remote answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            IntegrationError::Upstream { status, .. } => Some(*status),
            IntegrationError::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// Build an upstream error from a status code and the raw response body.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        IntegrationError::Upstream { status, body }
    }
}

pub type IntegrationResult<T> = Result<T, IntegrationError>;
