//! notebook-link - integration helpers for ephemeral notebook runtimes
//!
//! Connects a Colab-style notebook session to three services:
//!
//! - a cloud drive mounted at `/content/drive` through the notebook host
//! - the GitHub REST API (`GET /user`)
//! - the OpenAI Chat Completions API
//!
//! Credentials live in an in-memory [`SecretStore`] seeded from
//! `OPENAI_API_KEY`, `GITHUB_TOKEN` and `GH_TOKEN`; explicit arguments always
//! take precedence.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): errors, credentials, request models, ports
//! - **Application Layer** (`application`): the [`NotebookRuntime`] facade
//! - **Infrastructure Layer** (`infrastructure`): HTTP clients, host bridge,
//!   configuration and logging
//!
//! # Example
//!
//! ```no_run
//! use notebook_link::{ConfigLoader, NotebookRuntime};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let runtime = NotebookRuntime::new(ConfigLoader::load()?)?;
//! runtime.set_secrets(Some("sk-..."), None);
//! if runtime.ready(true, false) {
//!     println!("{}", runtime.complete("Say hello").await?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::NotebookRuntime;
pub use domain::errors::{IntegrationError, IntegrationResult};
pub use domain::models::{
    CompletionRequest, Config, Credential, CredentialResolution, SecretPresence, UserProfile,
};
pub use domain::ports::MountHost;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::credentials::SecretStore;
pub use infrastructure::drive::{ColabHost, DriveMounter};
pub use infrastructure::github::IdentityClient;
pub use infrastructure::logging::{LogConfig, LoggerImpl};
pub use infrastructure::openai::CompletionClient;
