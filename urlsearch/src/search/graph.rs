//! Microsoft Graph search client.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use tracing::{debug, warn};

use super::config::GraphClientConfig;
use super::models::{SearchRequestBody, SearchResponse};
use super::protocols::SearchClient;
use crate::errors::TransportError;

/// Longest slice of an error body kept in a [`TransportError`].
const MAX_ERROR_BODY_CHARS: usize = 512;

/// [`SearchClient`] that posts to the Graph `/search/query` endpoint.
///
/// The access token is supplied by the host; this client never acquires or
/// refreshes tokens itself.
#[derive(Debug, Clone)]
pub struct GraphSearchClient {
    http: reqwest::Client,
    config: GraphClientConfig,
    access_token: String,
}

impl GraphSearchClient {
    /// Creates a client for `access_token` with the given configuration.
    pub fn new(
        access_token: impl Into<String>,
        config: GraphClientConfig,
    ) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        for (key, value) in &config.headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| TransportError::new(format!("invalid header name '{key}': {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| TransportError::new(format!("invalid value for header '{key}': {e}")))?;
            headers.insert(name, value);
        }
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| TransportError::new(format!("invalid user agent: {e}")))?;
        headers.insert(USER_AGENT, user_agent);

        let timeout = config.timeout()?;
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::new(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            config,
            access_token: access_token.into(),
        })
    }

    /// Creates a client with default configuration.
    pub fn with_token(access_token: impl Into<String>) -> Result<Self, TransportError> {
        Self::new(access_token, GraphClientConfig::default())
    }

    /// Gets the configuration.
    #[must_use]
    pub fn config(&self) -> &GraphClientConfig {
        &self.config
    }
}

#[async_trait]
impl SearchClient for GraphSearchClient {
    async fn query(&self, request: &SearchRequestBody) -> Result<SearchResponse, TransportError> {
        let url = self.config.search_url();
        debug!(url = %url, "Posting search request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                let err = TransportError::new(e.to_string());
                if e.is_timeout() || e.is_connect() {
                    err.retryable()
                } else {
                    err
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let excerpt: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
            warn!(status = status.as_u16(), "Search endpoint returned an error status");
            return Err(TransportError::from_status(status.as_u16(), excerpt));
        }

        response
            .json::<SearchResponse>()
            .await
            .map_err(|e| TransportError::new(format!("failed to decode search response: {e}")))
    }
}
