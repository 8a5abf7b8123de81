//! Configuration types for URL mention search.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use crate::errors::TransportError;
use crate::query::DEFAULT_DELIMITERS;

/// Largest page of hits a single request may ask for.
pub const MAX_PAGE_SIZE: u32 = 500;

/// Configuration for building search requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Entity types to search (site pages and files).
    ///
    /// The request shape names these `pageItemType` and `fileItemType`; the
    /// default is the Graph pair `driveItem` and `listItem`, which is what the
    /// Graph search endpoint accepts for site pages and files.
    #[serde(default = "default_entity_types")]
    pub entity_types: Vec<String>,
    /// Resource fields requested for each hit.
    #[serde(default = "default_fields")]
    pub fields: Vec<String>,
    /// Offset of the first hit.
    #[serde(default)]
    pub from: u32,
    /// Number of hits requested; capped at [`MAX_PAGE_SIZE`].
    #[serde(default = "default_size")]
    pub size: u32,
    /// File type the query is restricted to.
    #[serde(default = "default_file_type")]
    pub file_type: String,
    /// Managed property matched against the proximity expression.
    #[serde(default = "default_content_field")]
    pub content_field: String,
    /// Characters URL components are split on, applied in order.
    #[serde(default = "default_delimiters")]
    pub delimiters: Vec<char>,
    /// Whether the result table shows the site column.
    #[serde(default)]
    pub show_site_column: bool,
}

fn default_entity_types() -> Vec<String> {
    vec!["driveItem".to_string(), "listItem".to_string()]
}

fn default_fields() -> Vec<String> {
    vec!["title".to_string(), "path".to_string(), "sitePath".to_string()]
}

fn default_size() -> u32 {
    MAX_PAGE_SIZE
}

fn default_file_type() -> String {
    "aspx".to_string()
}

fn default_content_field() -> String {
    "CanvasContent1OWSHTML".to_string()
}

fn default_delimiters() -> Vec<char> {
    DEFAULT_DELIMITERS.to_vec()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            entity_types: default_entity_types(),
            fields: default_fields(),
            from: 0,
            size: default_size(),
            file_type: default_file_type(),
            content_field: default_content_field(),
            delimiters: default_delimiters(),
            show_site_column: false,
        }
    }
}

impl SearchConfig {
    /// Creates a new search configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the entity types.
    #[must_use]
    pub fn with_entity_types<I, S>(mut self, entity_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entity_types = entity_types.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the page size.
    #[must_use]
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Sets the file type restriction.
    #[must_use]
    pub fn with_file_type(mut self, file_type: impl Into<String>) -> Self {
        self.file_type = file_type.into();
        self
    }

    /// Sets the content field.
    #[must_use]
    pub fn with_content_field(mut self, field: impl Into<String>) -> Self {
        self.content_field = field.into();
        self
    }

    /// Sets the split delimiters.
    #[must_use]
    pub fn with_delimiters(mut self, delimiters: impl Into<Vec<char>>) -> Self {
        self.delimiters = delimiters.into();
        self
    }

    /// Shows the site column in the result table.
    #[must_use]
    pub fn with_site_column(mut self) -> Self {
        self.show_site_column = true;
        self
    }

    /// Page size actually sent, never above [`MAX_PAGE_SIZE`].
    #[must_use]
    pub fn effective_size(&self) -> u32 {
        self.size.min(MAX_PAGE_SIZE)
    }
}

/// Configuration for the Microsoft Graph search client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphClientConfig {
    /// Graph base URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// API version path segment.
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: f64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Additional headers to include.
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

fn default_endpoint() -> String {
    "https://graph.microsoft.com".to_string()
}

fn default_api_version() -> String {
    "v1.0".to_string()
}

fn default_timeout() -> f64 {
    30.0
}

fn default_user_agent() -> String {
    concat!("urlsearch/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for GraphClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_version: default_api_version(),
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
            headers: HashMap::new(),
        }
    }
}

impl GraphClientConfig {
    /// Creates a new client configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the timeout.
    #[must_use]
    pub fn with_timeout(mut self, seconds: f64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Adds a header.
    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Gets timeout as Duration.
    ///
    /// Fails for a timeout that is not a positive, finite number of seconds
    /// representable as a `Duration`.
    pub fn timeout(&self) -> Result<Duration, TransportError> {
        match Duration::try_from_secs_f64(self.timeout_seconds) {
            Ok(timeout) if !timeout.is_zero() => Ok(timeout),
            _ => Err(TransportError::new(format!(
                "invalid timeout: {} seconds",
                self.timeout_seconds
            ))),
        }
    }

    /// Full URL of the search query endpoint.
    #[must_use]
    pub fn search_url(&self) -> String {
        format!(
            "{}/{}/search/query",
            self.endpoint.trim_end_matches('/'),
            self.api_version.trim_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_config_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.entity_types, vec!["driveItem", "listItem"]);
        assert_eq!(config.fields, vec!["title", "path", "sitePath"]);
        assert_eq!(config.from, 0);
        assert_eq!(config.size, 500);
        assert_eq!(config.delimiters, vec!['.', '/', '-']);
        assert!(!config.show_site_column);
    }

    #[test]
    fn test_search_config_size_is_capped() {
        let config = SearchConfig::new().with_size(10_000);
        assert_eq!(config.effective_size(), MAX_PAGE_SIZE);

        let config = SearchConfig::new().with_size(25);
        assert_eq!(config.effective_size(), 25);
    }

    #[test]
    fn test_search_config_deserializes_partial() {
        let config: SearchConfig =
            serde_json::from_str(r#"{"file_type": "docx", "show_site_column": true}"#).unwrap();
        assert_eq!(config.file_type, "docx");
        assert!(config.show_site_column);
        assert_eq!(config.content_field, "CanvasContent1OWSHTML");
        assert_eq!(config.size, 500);
    }

    #[test]
    fn test_search_config_builder() {
        let config = SearchConfig::new()
            .with_entity_types(["listItem"])
            .with_file_type("docx")
            .with_content_field("Body")
            .with_delimiters(vec!['_'])
            .with_site_column();

        assert_eq!(config.entity_types, vec!["listItem"]);
        assert_eq!(config.file_type, "docx");
        assert_eq!(config.content_field, "Body");
        assert_eq!(config.delimiters, vec!['_']);
        assert!(config.show_site_column);
    }

    #[test]
    fn test_graph_client_config() {
        let config = GraphClientConfig::new()
            .with_endpoint("http://localhost:8080/")
            .with_timeout(5.0)
            .with_header("ConsistencyLevel", "eventual");

        assert_eq!(config.search_url(), "http://localhost:8080/v1.0/search/query");
        assert_eq!(config.timeout(), Ok(Duration::from_secs(5)));
        assert_eq!(config.headers.get("ConsistencyLevel"), Some(&"eventual".to_string()));
    }

    #[test]
    fn test_graph_client_config_rejects_bad_timeout() {
        for seconds in [-1.0, 0.0, f64::NAN, f64::INFINITY, f64::MAX] {
            let err = GraphClientConfig::new().with_timeout(seconds).timeout().unwrap_err();
            assert!(err.message.starts_with("invalid timeout"), "{seconds}: {}", err.message);
        }
    }

    #[test]
    fn test_graph_client_config_defaults() {
        let config = GraphClientConfig::default();
        assert_eq!(config.search_url(), "https://graph.microsoft.com/v1.0/search/query");
        assert!(config.user_agent.starts_with("urlsearch/"));
    }
}
