//! Testing utilities for URL mention search.
//!
//! This module provides:
//! - A scripted search client
//! - Response fixtures in the backend wire shape
//! - Assertions for results and session state

mod assertions;
mod fixtures;
mod mocks;

pub use assertions::{assert_error, assert_no_error, assert_result_titles};
pub use fixtures::ResponseFixture;
pub use mocks::StaticSearchClient;
