use std::time::Duration;

use reqwest::{Client as ReqwestClient, Response, header};
use tracing::{debug, instrument};

use crate::domain::errors::{IntegrationError, IntegrationResult};
use crate::domain::models::{GithubConfig, UserProfile};
use crate::infrastructure::credentials::SecretStore;
use crate::infrastructure::logging::SecretScrubber;

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";

/// Client for the hosting API's authenticated-user endpoint
///
/// One `GET /user` per call; no retries, no pagination.
pub struct IdentityClient {
    http_client: ReqwestClient,
    api_base: String,
    api_version: String,
    secrets: SecretStore,
}

impl IdentityClient {
    /// Create a client that falls back to `secrets` when no token is passed.
    ///
    /// # Example
    /// ```no_run
    /// use notebook_link::domain::models::GithubConfig;
    /// use notebook_link::infrastructure::credentials::SecretStore;
    /// use notebook_link::infrastructure::github::IdentityClient;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = IdentityClient::new(&GithubConfig::default(), SecretStore::global().clone())?;
    /// let user = client.get_user(None).await?;
    /// println!("{}", user["login"]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: &GithubConfig, secrets: SecretStore) -> IntegrationResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static(GITHUB_ACCEPT));

        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(|e| {
                IntegrationError::Configuration(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            http_client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_version: config.api_version.clone(),
            secrets,
        })
    }

    /// Fetch the profile of the user that owns the credential.
    ///
    /// The token is taken from `token`, else `GITHUB_TOKEN`, else `GH_TOKEN`.
    /// Fails with `Configuration` before any request when none is set.
    #[instrument(skip(self, token), fields(explicit_token = token.is_some()))]
    pub async fn get_user(&self, token: Option<&str>) -> IntegrationResult<UserProfile> {
        let credential = self
            .secrets
            .resolve_hosting_token(token)
            .ok_or_else(|| {
                IntegrationError::Configuration(
                    "Provide a GitHub token or set GITHUB_TOKEN/GH_TOKEN.".to_string(),
                )
            })?;

        let url = format!("{}/user", self.api_base);
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .header(header::AUTHORIZATION, credential.bearer())
            .header(API_VERSION_HEADER, &self.api_version)
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn handle_response(&self, response: Response) -> IntegrationResult<UserProfile> {
        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await?;
            debug!(
                "GitHub API error ({}): {}",
                status,
                SecretScrubber::scrub(&body)
            );
            return Err(IntegrationError::from_status(status, body));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
