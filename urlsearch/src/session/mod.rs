//! Interactive search session state.
//!
//! The form state is an immutable [`UiState`] value moved forward by
//! [`SearchEvent`]s; a [`SearchSession`] owns one and feeds it the outcome of
//! each search.

mod controller;
mod state;

pub use controller::SearchSession;
pub use state::{SearchEvent, UiState};
