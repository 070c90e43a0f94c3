use serde_json::{Map, Value};

/// Model used when a request does not name one
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// A single-prompt completion request.
///
/// `extra_options` are forwarded to the completion API without validation;
/// malformed options surface as an upstream error.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Text sent as the only user message
    pub prompt: String,

    /// Model identifier
    pub model: String,

    /// Explicit API key; falls back to the secret store when `None`
    pub api_key: Option<String>,

    /// Additional request parameters (temperature, max_tokens, ...)
    pub extra_options: Map<String, Value>,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            extra_options: Map::new(),
        }
    }

    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Add one pass-through option
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra_options.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn extra_options(mut self, options: Map<String, Value>) -> Self {
        self.extra_options.extend(options);
        self
    }
}
