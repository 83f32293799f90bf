/*
[INPUT]:  HTTP configuration (base URL, timeouts)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::http::{Result, TugasError};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use std::time::Duration;

/// Default base URL of the task API (local web app dev server)
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Overall request timeout; `None` waits for the server indefinitely
    pub timeout: Option<Duration>,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the task API
#[derive(Debug, Clone)]
pub struct TugasClient {
    http_client: Client,
    base_url: Url,
}

impl TugasClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().connect_timeout(config.connect_timeout);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(TugasError::Config(format!(
                "base URL cannot carry a path: {}",
                config.base_url
            )));
        }

        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// Base URL all endpoints are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL for an endpoint.
    ///
    /// Endpoints are absolute paths, so any path on the base URL is replaced.
    fn url(&self, endpoint: &str) -> std::result::Result<Url, url::ParseError> {
        self.base_url.join(endpoint)
    }

    /// Build request builder for an endpoint
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.url(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Send a request whose success body is not needed.
    ///
    /// Non-2xx responses are turned into [`TugasError::Api`] carrying the
    /// `message` of the JSON error body when the server provided one.
    pub(crate) async fn send_unit(&self, builder: RequestBuilder) -> Result<()> {
        let response = builder.send().await?;
        if response.status().is_success() {
            return Ok(());
        }
        Err(Self::error_from_response(response).await)
    }

    async fn error_from_response(response: Response) -> TugasError {
        let status = response.status();
        match response.bytes().await {
            Ok(body) => TugasError::from_error_body(status, &body),
            Err(err) => {
                tracing::debug!(status = status.as_u16(), error = %err, "failed to read error body");
                TugasError::api_error(status, None)
            }
        }
    }
}
