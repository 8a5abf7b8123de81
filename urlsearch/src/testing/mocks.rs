//! Scripted search clients for testing.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;

use crate::errors::TransportError;
use crate::search::{SearchClient, SearchRequestBody, SearchResponse};

/// A search client that replays queued outcomes and records requests.
///
/// When the queue is empty the fallback outcome is returned, which defaults
/// to an empty response.
#[derive(Debug)]
pub struct StaticSearchClient {
    outcomes: Mutex<VecDeque<Result<SearchResponse, TransportError>>>,
    fallback: Mutex<Result<SearchResponse, TransportError>>,
    requests: Mutex<Vec<SearchRequestBody>>,
}

impl Default for StaticSearchClient {
    fn default() -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::new()),
            fallback: Mutex::new(Ok(SearchResponse::default())),
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl StaticSearchClient {
    /// Creates a client that always returns an empty response.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a client that always returns `response`.
    #[must_use]
    pub fn responding(response: SearchResponse) -> Self {
        let client = Self::new();
        *client.fallback.lock() = Ok(response);
        client
    }

    /// Creates a client that always fails with `error`.
    #[must_use]
    pub fn failing(error: TransportError) -> Self {
        let client = Self::new();
        *client.fallback.lock() = Err(error);
        client
    }

    /// Queues a response for the next call.
    pub fn push_response(&self, response: SearchResponse) {
        self.outcomes.lock().push_back(Ok(response));
    }

    /// Queues a failure for the next call.
    pub fn push_error(&self, error: TransportError) {
        self.outcomes.lock().push_back(Err(error));
    }

    /// Returns the number of times the client was called.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Returns every request received, in order.
    #[must_use]
    pub fn recorded_requests(&self) -> Vec<SearchRequestBody> {
        self.requests.lock().clone()
    }

    /// Returns the query string of the most recent request.
    #[must_use]
    pub fn last_query_string(&self) -> Option<String> {
        self.requests
            .lock()
            .last()
            .and_then(|r| r.query_string().map(String::from))
    }

    /// Resets call tracking.
    pub fn reset(&self) {
        self.requests.lock().clear();
    }
}

#[async_trait]
impl SearchClient for StaticSearchClient {
    async fn query(&self, request: &SearchRequestBody) -> Result<SearchResponse, TransportError> {
        self.requests.lock().push(request.clone());
        let queued = self.outcomes.lock().pop_front();
        queued.unwrap_or_else(|| self.fallback.lock().clone())
    }
}
