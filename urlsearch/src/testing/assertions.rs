//! Test assertions for search results and session state.

use crate::search::SearchResult;
use crate::session::UiState;

/// Asserts that the results carry exactly these titles, in order.
pub fn assert_result_titles(results: &[SearchResult], expected: &[&str]) {
    let titles: Vec<Option<&str>> = results.iter().map(|r| r.title.as_deref()).collect();
    let expected: Vec<Option<&str>> = expected.iter().copied().map(Some).collect();
    assert_eq!(titles, expected, "Unexpected result titles");
}

/// Asserts that the state shows no error.
pub fn assert_no_error(state: &UiState) {
    assert!(
        !state.has_error(),
        "Expected no error, got: {:?}",
        state.error()
    );
}

/// Asserts that the state shows exactly this error.
pub fn assert_error(state: &UiState, expected: &str) {
    assert_eq!(state.error(), expected, "Unexpected error message");
}
