//! Validates input, builds the query, and runs the search.

use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::config::SearchConfig;
use super::models::{SearchRequest, SearchRequestBody, SearchResult};
use super::protocols::SearchClient;
use crate::errors::{UrlSearchError, ValidationError};
use crate::observability::SearchTimer;
use crate::query::{is_valid_url, QueryBuilder};

/// Runs URL mention searches against a [`SearchClient`].
///
/// The orchestrator holds no per-search state, so one instance may serve
/// any number of sessions.
#[derive(Debug, Clone)]
pub struct SearchOrchestrator<C> {
    client: C,
    config: SearchConfig,
    builder: QueryBuilder,
}

impl<C: SearchClient> SearchOrchestrator<C> {
    /// Creates an orchestrator with default configuration.
    pub fn new(client: C) -> Self {
        Self::with_config(client, SearchConfig::default())
    }

    /// Creates an orchestrator with the given configuration.
    pub fn with_config(client: C, config: SearchConfig) -> Self {
        let builder = QueryBuilder::from_config(&config);
        Self {
            client,
            config,
            builder,
        }
    }

    /// Gets the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Gets the underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Validates `url` and builds the request body for it.
    ///
    /// No network call is made; invalid or unparseable input is rejected here.
    pub fn build_request(&self, url: &str) -> Result<SearchRequestBody, UrlSearchError> {
        if !is_valid_url(url) {
            warn!(url = %url, "Rejected invalid URL");
            return Err(ValidationError::new(url).into());
        }

        let query_string = self.builder.query_string(url).map_err(|e| {
            warn!(url = %url, error = %e, "URL passed validation but failed to parse");
            UrlSearchError::from(e)
        })?;
        debug!(query = %query_string, "Built search query");

        Ok(SearchRequestBody::single(SearchRequest::from_config(
            query_string,
            &self.config,
        )))
    }

    /// Searches for pages whose content mentions `url`.
    ///
    /// Zero hits is an empty vector, not an error.
    pub async fn search(&self, url: &str) -> Result<Vec<SearchResult>, UrlSearchError> {
        let request = self.build_request(url)?;
        let search_id = Uuid::new_v4();
        let timer = SearchTimer::start();

        let response = self.client.query(&request).await.map_err(|e| {
            error!(
                search_id = %search_id,
                duration_ms = timer.elapsed_ms(),
                status = ?e.status,
                retryable = e.retryable,
                error = %e,
                "Search request failed"
            );
            UrlSearchError::from(e)
        })?;

        let results = response.into_results();
        info!(
            search_id = %search_id,
            hit_count = results.len(),
            duration_ms = timer.elapsed_ms(),
            "Search completed"
        );
        Ok(results)
    }
}
