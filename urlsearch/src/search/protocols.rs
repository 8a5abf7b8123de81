//! Protocol traits for search backends.
//!
//! The orchestrator only talks to a [`SearchClient`], so tests and hosts can
//! plug in any transport.

use async_trait::async_trait;
use std::sync::Arc;

use super::models::{SearchRequestBody, SearchResponse};
use crate::errors::TransportError;

/// Protocol for submitting a search request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Submits `request` and returns the decoded response.
    async fn query(&self, request: &SearchRequestBody) -> Result<SearchResponse, TransportError>;
}

#[async_trait]
impl<C: SearchClient + ?Sized> SearchClient for Arc<C> {
    async fn query(&self, request: &SearchRequestBody) -> Result<SearchResponse, TransportError> {
        (**self).query(request).await
    }
}

#[async_trait]
impl<C: SearchClient + ?Sized> SearchClient for Box<C> {
    async fn query(&self, request: &SearchRequestBody) -> Result<SearchResponse, TransportError> {
        (**self).query(request).await
    }
}
