//! Common test utilities for integration tests

use notebook_link::domain::models::{GithubConfig, OpenAiConfig};

/// GitHub settings pointing at a mock server
#[allow(dead_code)]
pub fn github_config(base_url: &str) -> GithubConfig {
    GithubConfig {
        api_base: base_url.to_string(),
        timeout_secs: 5,
        ..GithubConfig::default()
    }
}

/// OpenAI settings pointing at a mock server
#[allow(dead_code)]
pub fn openai_config(base_url: &str) -> OpenAiConfig {
    OpenAiConfig {
        api_base: format!("{base_url}/v1"),
        timeout_secs: 5,
        ..OpenAiConfig::default()
    }
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
#[allow(dead_code)]
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
