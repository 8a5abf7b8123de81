//! A single interactive search session.

use tracing::debug;

use super::state::{SearchEvent, UiState};
use crate::errors::UrlSearchError;
use crate::search::{SearchClient, SearchOrchestrator};

/// Owns the form state for one user and drives searches through an
/// orchestrator.
///
/// `submit` borrows the session mutably, so a session never has two
/// searches in flight and results always belong to the latest submission.
#[derive(Debug)]
pub struct SearchSession<'a, C> {
    orchestrator: &'a SearchOrchestrator<C>,
    state: UiState,
}

impl<'a, C: SearchClient> SearchSession<'a, C> {
    /// Creates a session with an empty form.
    pub fn new(orchestrator: &'a SearchOrchestrator<C>) -> Self {
        Self {
            orchestrator,
            state: UiState::new(),
        }
    }

    /// The current state.
    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Consumes the session, returning its final state.
    pub fn into_state(self) -> UiState {
        self.state
    }

    /// Applies an event to the state.
    pub fn dispatch(&mut self, event: SearchEvent) {
        debug!(event = ?event, "Applying search event");
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(event);
    }

    /// Records an edit to the URL field.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.dispatch(SearchEvent::UrlChanged(url.into()));
    }

    /// Searches for the current URL and folds the outcome into the state.
    ///
    /// The outcome is also returned so callers can react to it directly.
    pub async fn submit(&mut self) -> Result<usize, UrlSearchError> {
        let outcome = self.orchestrator.search(self.state.url()).await;
        match outcome {
            Ok(results) => {
                let count = results.len();
                self.dispatch(SearchEvent::SearchSucceeded(results));
                Ok(count)
            }
            Err(err) => {
                let message = err.user_message();
                let event = if err.is_input_error() {
                    SearchEvent::ValidationFailed(message)
                } else {
                    SearchEvent::SearchFailed(message)
                };
                self.dispatch(event);
                Err(err)
            }
        }
    }
}
