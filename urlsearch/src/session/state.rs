//! Immutable view state and the events that move it.

use serde::{Deserialize, Serialize};

use crate::search::SearchResult;

/// Something that happened to the search form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum SearchEvent {
    /// The user edited the URL field.
    UrlChanged(String),
    /// The input was rejected before any request was sent.
    ValidationFailed(String),
    /// A search completed.
    SearchSucceeded(Vec<SearchResult>),
    /// A search request failed.
    SearchFailed(String),
}

/// What the search form displays.
///
/// Transitions happen only through [`UiState::apply`], which returns a new
/// value and leaves the old one untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    url: String,
    results: Vec<SearchResult>,
    error: String,
}

impl UiState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current URL input.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Results of the last successful search.
    #[must_use]
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// The inline error message, empty when there is none.
    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Whether an error is displayed.
    #[must_use]
    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    /// Returns the state after `event`.
    ///
    /// Editing the URL clears the error. Failures set the error but keep the
    /// previously displayed results. Success replaces the results and clears
    /// the error.
    #[must_use]
    pub fn apply(self, event: SearchEvent) -> Self {
        match event {
            SearchEvent::UrlChanged(url) => Self {
                url,
                error: String::new(),
                ..self
            },
            SearchEvent::ValidationFailed(reason) | SearchEvent::SearchFailed(reason) => Self {
                error: reason,
                ..self
            },
            SearchEvent::SearchSucceeded(results) => Self {
                results,
                error: String::new(),
                ..self
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn result(title: &str) -> SearchResult {
        SearchResult::new().with_title(title)
    }

    #[test]
    fn test_initial_state() {
        let state = UiState::new();
        assert_eq!(state.url(), "");
        assert!(state.results().is_empty());
        assert!(!state.has_error());
    }

    #[test]
    fn test_url_changed_clears_error_and_keeps_results() {
        let state = UiState::new()
            .apply(SearchEvent::SearchSucceeded(vec![result("a")]))
            .apply(SearchEvent::ValidationFailed("bad".to_string()))
            .apply(SearchEvent::UrlChanged("https://x.com".to_string()));

        assert_eq!(state.url(), "https://x.com");
        assert_eq!(state.error(), "");
        assert_eq!(state.results(), &[result("a")]);
    }

    #[test]
    fn test_search_failed_keeps_previous_results() {
        let state = UiState::new()
            .apply(SearchEvent::SearchSucceeded(vec![result("a"), result("b")]))
            .apply(SearchEvent::SearchFailed("network down".to_string()));

        assert_eq!(state.results().len(), 2);
        assert_eq!(state.error(), "network down");
    }

    #[test]
    fn test_search_succeeded_replaces_results() {
        let state = UiState::new()
            .apply(SearchEvent::SearchSucceeded(vec![result("a")]))
            .apply(SearchEvent::SearchSucceeded(vec![]));

        assert!(state.results().is_empty());
        assert!(!state.has_error());
    }

    #[test]
    fn test_apply_does_not_touch_original() {
        let before = UiState::new().apply(SearchEvent::UrlChanged("u".to_string()));
        let after = before.clone().apply(SearchEvent::ValidationFailed("bad".to_string()));

        assert_eq!(before.error(), "");
        assert_eq!(after.error(), "bad");
        assert_eq!(after.url(), "u");
    }

    #[test]
    fn test_event_serialization() {
        let event = SearchEvent::UrlChanged("https://x.com".to_string());
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "type": "url_changed", "payload": "https://x.com" })
        );
    }
}
