//! Wire models for the search request and response, and the mapped result.
//!
//! The response side is deliberately lenient: every level is optional and
//! unknown fields are ignored, so a partial response maps to fewer results
//! instead of a decoding failure.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::config::SearchConfig;

/// Top-level body posted to the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequestBody {
    /// The requests in this batch; this crate always sends exactly one.
    pub requests: Vec<SearchRequest>,
}

impl SearchRequestBody {
    /// Wraps a single request.
    #[must_use]
    pub fn single(request: SearchRequest) -> Self {
        Self {
            requests: vec![request],
        }
    }

    /// The query string of the first request, if any.
    #[must_use]
    pub fn query_string(&self) -> Option<&str> {
        self.requests
            .first()
            .map(|r| r.query.query_string.as_str())
    }
}

/// A single search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Entity types to search.
    pub entity_types: Vec<String>,
    /// The query.
    pub query: SearchQuery,
    /// Resource fields to return.
    pub fields: Vec<String>,
    /// Offset of the first hit.
    pub from: u32,
    /// Page size.
    pub size: u32,
}

impl SearchRequest {
    /// Builds a request for `query_string` using `config`.
    #[must_use]
    pub fn from_config(query_string: impl Into<String>, config: &SearchConfig) -> Self {
        Self {
            entity_types: config.entity_types.clone(),
            query: SearchQuery {
                query_string: query_string.into(),
            },
            fields: config.fields.clone(),
            from: config.from,
            size: config.effective_size(),
        }
    }
}

/// The query portion of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Full-text query string.
    pub query_string: String,
}

/// Response returned by the search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// One entry per submitted request.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub value: Vec<SearchResponseValue>,
}

/// Response entry for one submitted request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponseValue {
    /// Hit containers for this request.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hits_containers: Vec<HitsContainer>,
}

/// A grouping of ranked matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HitsContainer {
    /// Matches in rank order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hits: Vec<SearchHit>,
    /// Total number of matches reported by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// Whether the backend has more results past this page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more_results_available: Option<bool>,
}

/// A single match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Hit summary with highlighted terms.
    #[serde(default)]
    pub summary: Option<String>,
    /// The matched resource.
    #[serde(default)]
    pub resource: Option<HitResource>,
}

/// The resource a hit refers to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitResource {
    /// Requested fields.
    #[serde(default)]
    pub fields: Option<HitFields>,
}

/// Requested resource fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HitFields {
    /// Resource title.
    #[serde(default)]
    pub title: Option<String>,
    /// Resource URL.
    #[serde(default)]
    pub path: Option<String>,
    /// URL of the containing site.
    #[serde(default)]
    pub site_path: Option<String>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl SearchResponse {
    /// Hits of the first container of the first response entry.
    ///
    /// Missing levels yield an empty slice.
    #[must_use]
    pub fn first_hits(&self) -> &[SearchHit] {
        self.value
            .first()
            .and_then(|v| v.hits_containers.first())
            .map(|c| c.hits.as_slice())
            .unwrap_or(&[])
    }

    /// Maps the first container's hits into display results.
    #[must_use]
    pub fn into_results(self) -> Vec<SearchResult> {
        self.value
            .into_iter()
            .next()
            .and_then(|v| v.hits_containers.into_iter().next())
            .map(|c| c.hits.into_iter().map(SearchResult::from).collect())
            .unwrap_or_default()
    }
}

/// A display-ready search result.
///
/// Fields are passed through as received; missing values stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Resource title.
    pub title: Option<String>,
    /// Resource URL.
    pub path: Option<String>,
    /// URL of the containing site.
    pub site: Option<String>,
    /// Hit summary.
    pub summary: Option<String>,
}

impl SearchResult {
    /// Creates an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the site.
    #[must_use]
    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        self.site = Some(site.into());
        self
    }

    /// Sets the summary.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Converts to dictionary, omitting absent fields.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut dict = HashMap::new();
        if let Some(ref v) = self.title {
            dict.insert("title".to_string(), serde_json::json!(v));
        }
        if let Some(ref v) = self.path {
            dict.insert("path".to_string(), serde_json::json!(v));
        }
        if let Some(ref v) = self.site {
            dict.insert("site".to_string(), serde_json::json!(v));
        }
        if let Some(ref v) = self.summary {
            dict.insert("summary".to_string(), serde_json::json!(v));
        }
        dict
    }
}

impl From<SearchHit> for SearchResult {
    fn from(hit: SearchHit) -> Self {
        let fields = hit.resource.and_then(|r| r.fields).unwrap_or_default();
        Self {
            title: fields.title,
            path: fields.path,
            site: fields.site_path,
            summary: hit.summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_request_serializes_camel_case() {
        let request = SearchRequest::from_config("((FileType:aspx) AND (X:y))", &SearchConfig::default());
        let body = serde_json::to_value(SearchRequestBody::single(request)).unwrap();

        assert_eq!(
            body,
            json!({
                "requests": [{
                    "entityTypes": ["driveItem", "listItem"],
                    "query": { "queryString": "((FileType:aspx) AND (X:y))" },
                    "fields": ["title", "path", "sitePath"],
                    "from": 0,
                    "size": 500
                }]
            })
        );
    }

    #[test]
    fn test_request_body_query_string() {
        let body = SearchRequestBody::single(SearchRequest::from_config("q", &SearchConfig::default()));
        assert_eq!(body.query_string(), Some("q"));
        assert_eq!(SearchRequestBody { requests: vec![] }.query_string(), None);
    }

    #[test]
    fn test_maps_hits_to_results() {
        let response: SearchResponse = serde_json::from_value(json!({
            "value": [{
                "hitsContainers": [{
                    "total": 2,
                    "moreResultsAvailable": false,
                    "hits": [
                        {
                            "hitId": "1",
                            "rank": 1,
                            "summary": "Links to <c0>abc</c0>",
                            "resource": {
                                "@odata.type": "#microsoft.graph.listItem",
                                "fields": {
                                    "title": "Home",
                                    "path": "https://abc.sharepoint.com/sites/x/SitePages/Home.aspx",
                                    "sitePath": "https://abc.sharepoint.com/sites/x"
                                }
                            }
                        },
                        { "summary": "no resource" }
                    ]
                }]
            }]
        }))
        .unwrap();

        assert_eq!(response.value[0].hits_containers[0].total, Some(2));

        let results = response.into_results();
        assert_eq!(
            results,
            vec![
                SearchResult::new()
                    .with_title("Home")
                    .with_path("https://abc.sharepoint.com/sites/x/SitePages/Home.aspx")
                    .with_site("https://abc.sharepoint.com/sites/x")
                    .with_summary("Links to <c0>abc</c0>"),
                SearchResult::new().with_summary("no resource"),
            ]
        );
    }

    #[test]
    fn test_missing_fields_stay_absent() {
        let response: SearchResponse = serde_json::from_value(json!({
            "value": [{ "hitsContainers": [{ "hits": [
                { "resource": { "fields": { "title": "Only title" } } },
                { "resource": { "fields": null }, "summary": null }
            ] }] }]
        }))
        .unwrap();

        let results = response.into_results();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title.as_deref(), Some("Only title"));
        assert_eq!(results[0].path, None);
        assert_eq!(results[0].site, None);
        assert_eq!(results[0].summary, None);
        assert_eq!(results[1], SearchResult::default());
    }

    #[test]
    fn test_empty_hits_yields_no_results() {
        let response: SearchResponse =
            serde_json::from_value(json!({ "value": [{ "hitsContainers": [{ "hits": [] }] }] })).unwrap();
        assert!(response.into_results().is_empty());
    }

    #[test]
    fn test_missing_levels_yield_no_results() {
        let cases = [
            json!({}),
            json!({ "value": null }),
            json!({ "value": [] }),
            json!({ "value": [{}] }),
            json!({ "value": [{ "hitsContainers": null }] }),
            json!({ "value": [{ "hitsContainers": [] }] }),
            json!({ "value": [{ "hitsContainers": [{}] }] }),
            json!({ "value": [{ "hitsContainers": [{ "hits": null }] }] }),
        ];
        for case in cases {
            let response: SearchResponse = serde_json::from_value(case.clone()).unwrap();
            assert!(response.into_results().is_empty(), "expected no results for {case}");
        }
    }

    #[test]
    fn test_only_first_container_is_used() {
        let response: SearchResponse = serde_json::from_value(json!({
            "value": [{ "hitsContainers": [
                { "hits": [{ "summary": "first" }] },
                { "hits": [{ "summary": "second" }] }
            ] }]
        }))
        .unwrap();

        let results = response.into_results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].summary.as_deref(), Some("first"));
    }

    #[test]
    fn test_search_result_to_dict() {
        let result = SearchResult::new().with_title("Home").with_summary("s");
        let dict = result.to_dict();
        assert_eq!(dict.get("title"), Some(&json!("Home")));
        assert_eq!(dict.get("summary"), Some(&json!("s")));
        assert!(!dict.contains_key("path"));
        assert!(!dict.contains_key("site"));
    }
}
