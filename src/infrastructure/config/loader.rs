use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use thiserror::Error;

use crate::domain::models::config::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid API base for {0}: {1}. Must be an http(s) URL")]
    InvalidApiBase(&'static str, String),

    #[error("Invalid timeout for {0}: must be at least 1 second")]
    InvalidTimeout(&'static str),

    #[error("Default model cannot be empty")]
    EmptyModel,

    #[error("GitHub API version cannot be empty")]
    EmptyApiVersion,

    #[error("Invalid mount point: {0}. Must be an absolute path")]
    InvalidMountPoint(String),

    #[error("Host interpreter cannot be empty")]
    EmptyInterpreter,

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .notebook-link/config.yaml
    /// 3. .notebook-link/local.yaml (optional overrides)
    /// 4. Environment variables (NOTEBOOK_LINK_* prefix, `__` for nesting)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".notebook-link/config.yaml"))
            .merge(Yaml::file(".notebook-link/local.yaml"))
            .merge(Env::prefixed("NOTEBOOK_LINK_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        validate_api_base("github", &config.github.api_base)?;
        validate_api_base("openai", &config.openai.api_base)?;

        if config.github.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout("github"));
        }
        if config.openai.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout("openai"));
        }

        if config.github.api_version.trim().is_empty() {
            return Err(ConfigError::EmptyApiVersion);
        }

        if config.openai.default_model.trim().is_empty() {
            return Err(ConfigError::EmptyModel);
        }

        if !config.drive.mount_point.starts_with('/') {
            return Err(ConfigError::InvalidMountPoint(
                config.drive.mount_point.clone(),
            ));
        }

        if config.drive.interpreter.trim().is_empty() {
            return Err(ConfigError::EmptyInterpreter);
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}

fn validate_api_base(service: &'static str, base: &str) -> Result<(), ConfigError> {
    if base.starts_with("https://") || base.starts_with("http://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidApiBase(service, base.to_string()))
    }
}
