//! Notebook runtime facade
//!
//! Bundles configuration, the shared secret store and the three integration
//! clients behind the five operations a notebook calls.

use std::path::PathBuf;

use tracing::info;

use crate::domain::errors::IntegrationResult;
use crate::domain::models::{CompletionRequest, Config, SecretPresence, UserProfile};
use crate::infrastructure::credentials::SecretStore;
use crate::infrastructure::drive::DriveMounter;
use crate::infrastructure::github::IdentityClient;
use crate::infrastructure::openai::CompletionClient;

/// Entry point for notebook code.
pub struct NotebookRuntime {
    config: Config,
    secrets: SecretStore,
    identity: IdentityClient,
    completion: CompletionClient,
}

impl NotebookRuntime {
    /// Build a runtime sharing the process-wide secret store.
    pub fn new(config: Config) -> IntegrationResult<Self> {
        Self::with_secrets(config, SecretStore::global().clone())
    }

    /// Build a runtime over an explicit secret store.
    pub fn with_secrets(config: Config, secrets: SecretStore) -> IntegrationResult<Self> {
        let identity = IdentityClient::new(&config.github, secrets.clone())?;
        let completion = CompletionClient::new(&config.openai, secrets.clone())?;
        info!(
            github_api = %config.github.api_base,
            openai_api = %config.openai.api_base,
            "notebook runtime ready"
        );
        Ok(Self {
            config,
            secrets,
            identity,
            completion,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn secrets(&self) -> &SecretStore {
        &self.secrets
    }

    /// Mount the drive through the detected host.
    pub async fn mount_drive(&self, force_remount: bool) -> IntegrationResult<PathBuf> {
        DriveMounter::detect(&self.config.drive)?
            .mount(force_remount)
            .await
    }

    /// Fetch the authenticated hosting-API user.
    pub async fn get_user(&self, token: Option<&str>) -> IntegrationResult<UserProfile> {
        self.identity.get_user(token).await
    }

    /// Send one prompt using the configured default model.
    pub async fn complete(&self, prompt: impl Into<String>) -> IntegrationResult<String> {
        self.completion.complete(self.completion.request(prompt)).await
    }

    /// Send a fully specified completion request.
    pub async fn complete_with(&self, request: CompletionRequest) -> IntegrationResult<String> {
        self.completion.complete(request).await
    }

    pub fn set_secrets(
        &self,
        completion_key: Option<&str>,
        hosting_token: Option<&str>,
    ) -> SecretPresence {
        self.secrets.set_secrets(completion_key, hosting_token)
    }

    pub fn ready(&self, require_completion: bool, require_hosting: bool) -> bool {
        self.secrets.ready(require_completion, require_hosting)
    }
}
