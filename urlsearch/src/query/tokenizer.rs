//! Splits URL components into search tokens.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Delimiters applied when none are configured, in application order.
pub const DEFAULT_DELIMITERS: [char; 3] = ['.', '/', '-'];

/// A non-empty text fragment extracted from a URL component.
///
/// A token never contains whitespace introduced by splitting and is never
/// equal to one of the delimiters it was split on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Creates a token, returning `None` for an empty string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Returns the token text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the token, returning its text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Splits `value` on every delimiter in turn.
///
/// The first delimiter splits `value`; each following delimiter re-splits
/// every segment produced so far. Empty segments are dropped after every
/// pass, so runs like `a..b` collapse. With no delimiters the whole value is
/// a single token.
///
/// ```
/// use urlsearch::query::{split_by_all, DEFAULT_DELIMITERS};
///
/// let tokens = split_by_all("example.com/test-string", &DEFAULT_DELIMITERS);
/// let texts: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
/// assert_eq!(texts, ["example", "com", "test", "string"]);
/// ```
#[must_use]
pub fn split_by_all(value: &str, delimiters: &[char]) -> Vec<Token> {
    let mut segments: Vec<&str> = if value.is_empty() { Vec::new() } else { vec![value] };

    for &delimiter in delimiters {
        segments = segments
            .into_iter()
            .flat_map(|segment| segment.split(delimiter))
            .filter(|segment| !segment.is_empty())
            .collect();
    }

    segments
        .into_iter()
        .filter(|segment| !is_lone_delimiter(segment, delimiters))
        .filter_map(Token::new)
        .collect()
}

fn is_lone_delimiter(segment: &str, delimiters: &[char]) -> bool {
    let mut chars = segment.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => delimiters.contains(&c),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(Token::as_str).collect()
    }

    #[test]
    fn test_token_rejects_empty() {
        assert!(Token::new("").is_none());
        assert_eq!(Token::new("abc").unwrap(), "abc");
    }

    #[test]
    fn test_splits_host() {
        let tokens = split_by_all("abc.sharepoint.com", &DEFAULT_DELIMITERS);
        assert_eq!(texts(&tokens), vec!["abc", "sharepoint", "com"]);
    }

    #[test]
    fn test_splits_path_with_dashes() {
        let tokens = split_by_all("/sites/team-news/SitePages/Q3-update.aspx", &DEFAULT_DELIMITERS);
        assert_eq!(
            texts(&tokens),
            vec!["sites", "team", "news", "SitePages", "Q3", "update", "aspx"]
        );
    }

    #[test]
    fn test_collapses_adjacent_delimiters() {
        let tokens = split_by_all("a..b//c--d./-e", &DEFAULT_DELIMITERS);
        assert_eq!(texts(&tokens), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_only_delimiters_yields_nothing() {
        assert!(split_by_all("/", &DEFAULT_DELIMITERS).is_empty());
        assert!(split_by_all("./-.", &DEFAULT_DELIMITERS).is_empty());
        assert!(split_by_all("", &DEFAULT_DELIMITERS).is_empty());
    }

    #[test]
    fn test_no_delimiters_returns_whole_value() {
        assert_eq!(texts(&split_by_all("a.b/c", &[])), vec!["a.b/c"]);
        assert!(split_by_all("", &[]).is_empty());
    }

    #[test]
    fn test_delimiter_free_segment_is_unchanged() {
        let tokens = split_by_all("whatever", &DEFAULT_DELIMITERS);
        assert_eq!(texts(&tokens), vec!["whatever"]);

        let again = split_by_all(tokens[0].as_str(), &DEFAULT_DELIMITERS);
        assert_eq!(again, tokens);
    }

    #[test]
    fn test_custom_delimiter_order() {
        let tokens = split_by_all("a_b.c_d", &['_']);
        assert_eq!(texts(&tokens), vec!["a", "b.c", "d"]);

        let tokens = split_by_all("a_b.c_d", &['.', '_']);
        assert_eq!(texts(&tokens), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_output_never_contains_empty_or_delimiter() {
        let inputs = [
            "",
            "-",
            "a-",
            "-a-",
            "..a..",
            "/-/-/",
            "x.y-z/w",
            "ü.ñ-ø/€",
            "percent%20encoded/path",
        ];
        for input in inputs {
            for token in split_by_all(input, &DEFAULT_DELIMITERS) {
                assert!(!token.as_str().is_empty(), "empty token from {input:?}");
                for d in DEFAULT_DELIMITERS {
                    assert_ne!(token.as_str(), d.to_string(), "delimiter token from {input:?}");
                }
            }
        }
    }

    #[test]
    fn test_is_deterministic() {
        let first = split_by_all("abc.sharepoint.com/sites/x-y", &DEFAULT_DELIMITERS);
        let second = split_by_all("abc.sharepoint.com/sites/x-y", &DEFAULT_DELIMITERS);
        assert_eq!(first, second);
    }
}
