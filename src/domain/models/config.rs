use serde::{Deserialize, Serialize};

/// Main configuration structure for notebook-link
///
/// Holds endpoints, timeouts and host settings. Secrets are never part of it;
/// they live in the secret store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Source-control hosting API settings
    #[serde(default)]
    pub github: GithubConfig,

    /// Completion API settings
    #[serde(default)]
    pub openai: OpenAiConfig,

    /// Drive mount settings
    #[serde(default)]
    pub drive: DriveConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// GitHub REST API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GithubConfig {
    /// Base URL of the REST API
    #[serde(default = "default_github_api_base")]
    pub api_base: String,

    /// Value sent in `X-GitHub-Api-Version`
    #[serde(default = "default_github_api_version")]
    pub api_version: String,

    /// Value sent in `User-Agent`
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds, 10 unless overridden
    ///
    /// The identity call is meant to run with the 10 second default. The
    /// override exists so test suites can shorten it against local servers.
    #[serde(default = "default_github_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_github_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_github_api_version() -> String {
    "2022-11-28".to_string()
}

fn default_user_agent() -> String {
    concat!("notebook-link/", env!("CARGO_PKG_VERSION")).to_string()
}

const fn default_github_timeout_secs() -> u64 {
    10
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: default_github_api_base(),
            api_version: default_github_api_version(),
            user_agent: default_user_agent(),
            timeout_secs: default_github_timeout_secs(),
        }
    }
}

/// OpenAI Chat Completions configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OpenAiConfig {
    /// Base URL, including the `/v1` prefix
    #[serde(default = "default_openai_api_base")]
    pub api_base: String,

    /// Model used when a request does not name one
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Request timeout in seconds
    #[serde(default = "default_openai_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_openai_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    super::completion::DEFAULT_MODEL.to_string()
}

const fn default_openai_timeout_secs() -> u64 {
    600
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_base: default_openai_api_base(),
            default_model: default_model(),
            timeout_secs: default_openai_timeout_secs(),
        }
    }
}

/// Drive mount configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DriveConfig {
    /// Absolute mount point
    #[serde(default = "default_mount_point")]
    pub mount_point: String,

    /// Interpreter that hosts the notebook's mount primitive
    #[serde(default = "default_interpreter")]
    pub interpreter: String,
}

fn default_mount_point() -> String {
    "/content/drive".to_string()
}

fn default_interpreter() -> String {
    "python3".to_string()
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            mount_point: default_mount_point(),
            interpreter: default_interpreter(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
