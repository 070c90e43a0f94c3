use regex::Regex;
use std::sync::LazyLock;

// OpenAI keys: sk-..., sk-proj-...
static OPENAI_KEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"sk-[A-Za-z0-9_-]{16,}").expect("OpenAI key pattern is valid")
});

// GitHub classic and fine-grained tokens
static GITHUB_TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:gh[pousr]_[A-Za-z0-9]{16,}|github_pat_[A-Za-z0-9_]{20,})")
        .expect("GitHub token pattern is valid")
});

static BEARER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Bearer\s+[A-Za-z0-9._~+/=-]+").expect("Bearer pattern is valid")
});

/// Redacts credentials from text before the crate logs it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecretScrubber;

impl SecretScrubber {
    /// Scrub a message of sensitive data
    pub fn scrub(message: &str) -> String {
        let scrubbed = BEARER_PATTERN.replace_all(message, "Bearer [TOKEN_REDACTED]");
        let scrubbed = OPENAI_KEY_PATTERN.replace_all(&scrubbed, "[API_KEY_REDACTED]");
        GITHUB_TOKEN_PATTERN
            .replace_all(&scrubbed, "[TOKEN_REDACTED]")
            .into_owned()
    }
}
