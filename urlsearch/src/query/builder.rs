//! Builds proximity queries from URLs.

use serde::{Deserialize, Serialize};

use super::parsed::ParsedUrl;
use super::tokenizer::{split_by_all, Token, DEFAULT_DELIMITERS};
use crate::errors::ParseError;
use crate::search::SearchConfig;

/// Zero-distance ordered proximity operator joining adjacent tokens.
pub const ONEAR_OPERATOR: &str = "ONEAR(n=0)";

/// Composes tokens into a left-nested proximity expression.
///
/// No tokens yield an empty string and a single token is returned as is.
/// Every further token wraps the expression built so far:
/// `[a, b, c]` becomes `((a ONEAR(n=0) b) ONEAR(n=0) c)`.
#[must_use]
pub fn compose_onear<T: AsRef<str>>(tokens: &[T]) -> String {
    tokens.iter().fold(String::new(), |acc, token| {
        if acc.is_empty() {
            token.as_ref().to_string()
        } else {
            format!("({acc} {ONEAR_OPERATOR} {})", token.as_ref())
        }
    })
}

/// Builds the proximity expression for `url` with the default delimiters.
///
/// ```
/// use urlsearch::query::build_onear_query;
///
/// let expr = build_onear_query("https://abc.sharepoint.com/sites").unwrap();
/// assert_eq!(expr, "(((abc ONEAR(n=0) sharepoint) ONEAR(n=0) com) ONEAR(n=0) sites)");
/// ```
pub fn build_onear_query(url: &str) -> Result<String, ParseError> {
    QueryBuilder::new().expression(url)
}

/// The full-text query a proximity expression is embedded in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryTemplate {
    /// File type restriction, e.g. `aspx` for site pages.
    pub file_type: String,
    /// Managed property holding the page's rich-text content.
    pub content_field: String,
}

impl Default for QueryTemplate {
    fn default() -> Self {
        Self {
            file_type: "aspx".to_string(),
            content_field: "CanvasContent1OWSHTML".to_string(),
        }
    }
}

impl QueryTemplate {
    /// Embeds `expression` unmodified into the query string.
    #[must_use]
    pub fn render(&self, expression: &str) -> String {
        format!(
            "((FileType:{}) AND ({}:{}))",
            self.file_type, self.content_field, expression
        )
    }
}

/// Turns URLs into search query strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBuilder {
    delimiters: Vec<char>,
    template: QueryTemplate,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self {
            delimiters: DEFAULT_DELIMITERS.to_vec(),
            template: QueryTemplate::default(),
        }
    }
}

impl QueryBuilder {
    /// Creates a builder with default delimiters and template.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from search configuration.
    #[must_use]
    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            delimiters: config.delimiters.clone(),
            template: QueryTemplate {
                file_type: config.file_type.clone(),
                content_field: config.content_field.clone(),
            },
        }
    }

    /// Sets the delimiters, applied in order.
    #[must_use]
    pub fn with_delimiters(mut self, delimiters: impl Into<Vec<char>>) -> Self {
        self.delimiters = delimiters.into();
        self
    }

    /// Sets the query template.
    #[must_use]
    pub fn with_template(mut self, template: QueryTemplate) -> Self {
        self.template = template;
        self
    }

    /// The configured delimiters.
    #[must_use]
    pub fn delimiters(&self) -> &[char] {
        &self.delimiters
    }

    /// The configured template.
    #[must_use]
    pub fn template(&self) -> &QueryTemplate {
        &self.template
    }

    /// Host tokens followed by path tokens.
    pub fn tokens(&self, url: &str) -> Result<Vec<Token>, ParseError> {
        let parsed = ParsedUrl::parse(url)?;
        Ok(self.tokens_for(&parsed))
    }

    /// Tokens for an already parsed URL.
    #[must_use]
    pub fn tokens_for(&self, parsed: &ParsedUrl) -> Vec<Token> {
        let mut tokens = split_by_all(&parsed.host, &self.delimiters);
        tokens.extend(split_by_all(&parsed.path, &self.delimiters));
        tokens
    }

    /// The proximity expression for `url`.
    pub fn expression(&self, url: &str) -> Result<String, ParseError> {
        Ok(compose_onear(&self.tokens(url)?))
    }

    /// The complete query string for `url`.
    pub fn query_string(&self, url: &str) -> Result<String, ParseError> {
        Ok(self.template.render(&self.expression(url)?))
    }
}
