pub mod completion;
pub mod config;
pub mod credential;

pub use completion::{CompletionRequest, DEFAULT_MODEL};
pub use config::{Config, DriveConfig, GithubConfig, LoggingConfig, OpenAiConfig};
pub use credential::{Credential, CredentialResolution};

use serde::Serialize;

/// Authenticated user payload, passed through without schema validation
pub type UserProfile = serde_json::Map<String, serde_json::Value>;

/// Post-update presence of the two named secrets. Values are never exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SecretPresence {
    pub completion_key_present: bool,
    pub hosting_token_present: bool,
}
