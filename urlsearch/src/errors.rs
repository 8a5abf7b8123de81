//! Error types for URL mention search.
//!
//! Every failure is scoped to a single search attempt. Validation and parse
//! errors are shown next to the input field; transport errors are logged and
//! leave previously displayed results untouched.

use std::collections::HashMap;
use thiserror::Error;

/// User-facing message for input that is not a well-formed absolute URL.
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL.";

/// The main error type for urlsearch operations.
#[derive(Debug, Clone, Error)]
pub enum UrlSearchError {
    /// The input failed the syntactic URL check.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The input could not be decomposed into host and path.
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// The search call itself failed.
    #[error("{0}")]
    Transport(#[from] TransportError),
}

impl UrlSearchError {
    /// Whether the error is about the user's input rather than the backend.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Parse(_))
    }

    /// Whether retrying the same search might succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(err) => err.retryable,
            _ => false,
        }
    }

    /// Message suitable for display next to the URL field.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => err.message.clone(),
            Self::Parse(err) => format!("Could not read the URL: {}", err.reason),
            Self::Transport(_) => "Search failed. Please try again.".to_string(),
        }
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        match self {
            Self::Validation(err) => err.to_dict(),
            Self::Parse(err) => err.to_dict(),
            Self::Transport(err) => err.to_dict(),
        }
    }
}

/// Error raised when input is not a plausible absolute URL.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    /// The rejected input.
    pub input: String,
    /// The message shown to the user.
    pub message: String,
}

impl ValidationError {
    /// Creates a validation error with the default message.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            message: INVALID_URL_MESSAGE.to_string(),
        }
    }

    /// Overrides the user-facing message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();
        map.insert("type".to_string(), serde_json::json!("ValidationError"));
        map.insert("input".to_string(), serde_json::json!(self.input));
        map.insert("message".to_string(), serde_json::json!(self.message));
        map
    }
}

/// Error raised when a URL cannot be structurally decomposed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Failed to parse URL '{input}': {reason}")]
pub struct ParseError {
    /// The input that failed to parse.
    pub input: String,
    /// Why parsing failed.
    pub reason: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();
        map.insert("type".to_string(), serde_json::json!("ParseError"));
        map.insert("input".to_string(), serde_json::json!(self.input));
        map.insert("reason".to_string(), serde_json::json!(self.reason));
        map.insert("message".to_string(), serde_json::json!(self.to_string()));
        map
    }
}

/// Error raised when the search request fails in transit or at the backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Search request failed: {message}")]
pub struct TransportError {
    /// Description of the failure.
    pub message: String,
    /// HTTP status code, if a response was received.
    pub status: Option<u16>,
    /// Whether the failure is worth retrying.
    pub retryable: bool,
}

impl TransportError {
    /// Creates a new transport error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            retryable: false,
        }
    }

    /// Creates an error for a non-success HTTP status.
    ///
    /// 429 and 5xx responses are marked retryable.
    #[must_use]
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            message: format!("HTTP {status}: {}", body.into()),
            status: Some(status),
            retryable: status == 429 || (500..600).contains(&status),
        }
    }

    /// Marks the error as retryable.
    #[must_use]
    pub fn retryable(mut self) -> Self {
        self.retryable = true;
        self
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();
        map.insert("type".to_string(), serde_json::json!("TransportError"));
        map.insert("message".to_string(), serde_json::json!(self.message));
        if let Some(status) = self.status {
            map.insert("status".to_string(), serde_json::json!(status));
        }
        map.insert("retryable".to_string(), serde_json::json!(self.retryable));
        map
    }
}
