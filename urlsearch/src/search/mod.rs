//! Search requests, responses and orchestration.
//!
//! This module provides:
//! - Configuration for request building and the Graph client
//! - Wire models for the search request and response
//! - The [`SearchClient`] protocol trait
//! - A reqwest-based Graph client (feature `graph`)
//! - The [`SearchOrchestrator`] tying validation, query building and the
//!   client together

mod config;
#[cfg(feature = "graph")]
mod graph;
mod models;
mod orchestrator;
mod protocols;

pub use config::{GraphClientConfig, SearchConfig, MAX_PAGE_SIZE};
#[cfg(feature = "graph")]
pub use graph::GraphSearchClient;
pub use models::{
    HitFields, HitResource, HitsContainer, SearchHit, SearchQuery, SearchRequest,
    SearchRequestBody, SearchResponse, SearchResponseValue, SearchResult,
};
pub use orchestrator::SearchOrchestrator;
pub use protocols::SearchClient;
