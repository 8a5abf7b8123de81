//! # urlsearch
//!
//! Finds site pages whose rich-text content mentions a given URL.
//!
//! A pasted URL is split into tokens (host first, then path) and the tokens
//! are chained into a zero-distance proximity query:
//!
//! - **Validation**: a syntactic check that the input is an absolute
//!   http/https/ftp URL
//! - **Query building**: tokenization and left-nested `ONEAR(n=0)` composition
//! - **Search**: one bounded request through a pluggable [`search::SearchClient`]
//! - **Session state**: an immutable form state moved by discrete events
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use urlsearch::prelude::*;
//!
//! let client = GraphSearchClient::with_token(token)?;
//! let orchestrator = SearchOrchestrator::new(client);
//!
//! let mut session = SearchSession::new(&orchestrator);
//! session.set_url("https://contoso.sharepoint.com/sites/news");
//! session.submit().await?;
//!
//! for result in session.state().results() {
//!     println!("{:?}", result.title);
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod errors;
pub mod observability;
pub mod presentation;
pub mod query;
pub mod search;
pub mod session;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::errors::{ParseError, TransportError, UrlSearchError, ValidationError};
    pub use crate::presentation::{result_columns, ResultColumn, ResultColumnField};
    pub use crate::query::{build_onear_query, is_valid_url, split_by_all, QueryBuilder, Token};
    #[cfg(feature = "graph")]
    pub use crate::search::GraphSearchClient;
    pub use crate::search::{
        SearchClient, SearchConfig, SearchOrchestrator, SearchResponse, SearchResult,
    };
    pub use crate::session::{SearchEvent, SearchSession, UiState};
}
