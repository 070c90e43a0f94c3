/// Request and response types for the Chat Completions API
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::errors::{IntegrationError, IntegrationResult};

/// Body fields owned by the single-message request
const RESERVED_KEYS: [&str; 2] = ["model", "messages"];

/// Body of `POST /chat/completions`
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    /// Model identifier (e.g., "gpt-4o-mini")
    pub model: String,

    /// Conversation; always a single user message here
    pub messages: Vec<ChatMessage>,

    /// Caller-supplied parameters, flattened into the body verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChatCompletionRequest {
    /// Build a single-message request.
    ///
    /// Fails with `Configuration` when `extra` names `model` or `messages`.
    pub fn single_user_message(
        model: String,
        prompt: String,
        extra: Map<String, Value>,
    ) -> IntegrationResult<Self> {
        if let Some(key) = RESERVED_KEYS.iter().find(|key| extra.contains_key(**key)) {
            return Err(IntegrationError::Configuration(format!(
                "extra option `{key}` conflicts with the request's own `{key}` field"
            )));
        }
        Ok(Self {
            model,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt,
            }],
            extra,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Response from the Chat Completions API; only the fields read here
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub index: u32,

    #[serde(default)]
    pub message: Option<ResponseMessage>,

    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub role: Option<String>,

    /// Null for refusals and tool-call-only responses
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of the first choice.
    ///
    /// `None` when there are no choices; `Some("")` when the first choice
    /// carries no text.
    pub fn first_text(self) -> Option<String> {
        let choice = self.choices.into_iter().next()?;
        Some(
            choice
                .message
                .and_then(|message| message.content)
                .unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_flattens_extra_options() {
        let mut extra = Map::new();
        extra.insert("temperature".to_string(), json!(0.1));

        let request =
            ChatCompletionRequest::single_user_message("gpt-4o-mini".into(), "hi".into(), extra)
                .unwrap();
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body,
            json!({
                "model": "gpt-4o-mini",
                "messages": [{"role": "user", "content": "hi"}],
                "temperature": 0.1
            })
        );
    }

    #[test]
    fn test_reserved_option_keys_are_rejected() {
        for key in ["model", "messages"] {
            let mut extra = Map::new();
            extra.insert("temperature".to_string(), json!(0.1));
            extra.insert(key.to_string(), json!("other"));

            let err =
                ChatCompletionRequest::single_user_message("gpt-4o-mini".into(), "hi".into(), extra)
                    .unwrap_err();
            assert!(err.is_configuration(), "{err:?}");
            assert!(err.to_string().contains(key), "{err}");
        }
    }

    #[test]
    fn test_first_text() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "model": "gpt-4o-mini",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "first"}, "finish_reason": "stop"},
                {"index": 1, "message": {"role": "assistant", "content": "second"}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 1, "completion_tokens": 1, "total_tokens": 2}
        }))
        .unwrap();

        assert_eq!(response.first_text().as_deref(), Some("first"));
    }

    #[test]
    fn test_null_content_is_empty() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [{"index": 0, "message": {"role": "assistant", "content": null}}]
        }))
        .unwrap();

        assert_eq!(response.first_text().as_deref(), Some(""));
    }

    #[test]
    fn test_no_choices_has_no_text() {
        let response: ChatCompletionResponse =
            serde_json::from_value(json!({"choices": []})).unwrap();
        assert_eq!(response.first_text(), None);
    }
}
