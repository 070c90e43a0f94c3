use std::time::Duration;

use reqwest::{Client as ReqwestClient, Response, header};
use tracing::{debug, info, instrument};

use super::types::{ChatCompletionRequest, ChatCompletionResponse};
use crate::domain::errors::{IntegrationError, IntegrationResult};
use crate::domain::models::{CompletionRequest, OpenAiConfig};
use crate::infrastructure::credentials::SecretStore;
use crate::infrastructure::logging::SecretScrubber;

/// Single-shot client for the Chat Completions API
///
/// Sends one user message per call and returns the first choice's text.
/// No retries, no streaming, no conversation state.
pub struct CompletionClient {
    http_client: ReqwestClient,
    api_base: String,
    default_model: String,
    secrets: SecretStore,
}

impl CompletionClient {
    /// Create a client that falls back to `secrets` when a request carries
    /// no API key.
    pub fn new(config: &OpenAiConfig, secrets: SecretStore) -> IntegrationResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| {
                IntegrationError::Configuration(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            http_client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            default_model: config.default_model.clone(),
            secrets,
        })
    }

    /// Start a request for `prompt` using the configured default model.
    pub fn request(&self, prompt: impl Into<String>) -> CompletionRequest {
        CompletionRequest::new(prompt).model(self.default_model.clone())
    }

    /// Run one completion and return the generated text.
    ///
    /// Returns an empty string when the first choice carries no text. A
    /// response without any choice is a `Decode` error.
    ///
    /// # Example
    /// ```no_run
    /// use notebook_link::domain::models::{CompletionRequest, OpenAiConfig};
    /// use notebook_link::infrastructure::credentials::SecretStore;
    /// use notebook_link::infrastructure::openai::CompletionClient;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = CompletionClient::new(&OpenAiConfig::default(), SecretStore::global().clone())?;
    /// let text = client
    ///     .complete(CompletionRequest::new("Write a haiku about Rust").option("temperature", 0.2))
    ///     .await?;
    /// println!("{text}");
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn complete(&self, request: CompletionRequest) -> IntegrationResult<String> {
        let CompletionRequest {
            prompt,
            model,
            api_key,
            extra_options,
        } = request;

        let credential = self
            .secrets
            .resolve_completion_key(api_key.as_deref())
            .ok_or_else(|| {
                IntegrationError::Configuration(
                    "Provide an OpenAI API key or set OPENAI_API_KEY.".to_string(),
                )
            })?;

        let body = ChatCompletionRequest::single_user_message(model, prompt, extra_options)?;
        let url = format!("{}/chat/completions", self.api_base);
        debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .header(header::AUTHORIZATION, credential.bearer())
            .json(&body)
            .send()
            .await?;

        let completion = self.handle_response(response).await?;
        info!(
            response_id = completion.id.as_deref().unwrap_or_default(),
            choices = completion.choices.len(),
            "completion received"
        );

        completion.first_text().ok_or_else(|| {
            IntegrationError::Decode(serde::de::Error::custom(
                "completion response contains no choices",
            ))
        })
    }

    async fn handle_response(&self, response: Response) -> IntegrationResult<ChatCompletionResponse> {
        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await?;
            debug!(
                "Completion API error ({}): {}",
                status,
                SecretScrubber::scrub(&body)
            );
            return Err(IntegrationError::from_status(status, body));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
