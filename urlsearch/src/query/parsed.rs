//! Structural URL decomposition.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::ParseError;

/// The host and path of a parsed URL.
///
/// Port, query and fragment are dropped; only host and path feed search terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedUrl {
    /// Lower-cased host name, empty when the URL has none.
    pub host: String,
    /// Percent-encoded path, starting with `/` for hierarchical URLs.
    pub path: String,
}

impl ParsedUrl {
    /// Parses `input` into host and path.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let url = Url::parse(input).map_err(|e| ParseError::new(input, e.to_string()))?;
        Ok(Self::from(&url))
    }
}

impl From<&Url> for ParsedUrl {
    fn from(url: &Url) -> Self {
        Self {
            host: url.host_str().unwrap_or_default().to_string(),
            path: url.path().to_string(),
        }
    }
}
