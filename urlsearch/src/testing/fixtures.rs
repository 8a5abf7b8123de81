//! Response fixtures for search tests.

use serde_json::{json, Value};

use crate::search::{SearchResponse, SearchResult};

/// Builds search responses in the backend's wire shape.
#[derive(Debug, Clone, Default)]
pub struct ResponseFixture {
    hits: Vec<Value>,
}

impl ResponseFixture {
    /// Creates a fixture with no hits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a hit carrying every field of `result`.
    #[must_use]
    pub fn with_result(mut self, result: &SearchResult) -> Self {
        self.hits.push(json!({
            "summary": result.summary,
            "resource": {
                "fields": {
                    "title": result.title,
                    "path": result.path,
                    "sitePath": result.site,
                }
            }
        }));
        self
    }

    /// Adds a page hit with title, path and site.
    #[must_use]
    pub fn with_page(self, title: &str, path: &str, site: &str) -> Self {
        self.with_result(
            &SearchResult::new()
                .with_title(title)
                .with_path(path)
                .with_site(site),
        )
    }

    /// Adds a raw hit object.
    #[must_use]
    pub fn with_raw_hit(mut self, hit: Value) -> Self {
        self.hits.push(hit);
        self
    }

    /// The response as JSON.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({ "value": [{ "hitsContainers": [{
            "hits": self.hits,
            "total": self.hits.len(),
            "moreResultsAvailable": false,
        }] }] })
    }

    /// The decoded response.
    ///
    /// # Panics
    ///
    /// Panics if a raw hit does not match the response shape.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn build(&self) -> SearchResponse {
        serde_json::from_value(self.to_json()).expect("fixture matches response shape")
    }
}
