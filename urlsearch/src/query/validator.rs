//! Syntactic URL validation.

use regex::Regex;
use std::sync::OnceLock;

use crate::errors::ValidationError;

/// Scheme, then a host-start character that is not `/ $ . ? #`, then any
/// non-whitespace remainder.
const URL_PATTERN: &str = r"(?i)^(https?|ftp)://[^\s/$.?#]\S*$";

#[allow(clippy::expect_used)]
fn url_regex() -> &'static Regex {
    static URL_REGEX: OnceLock<Regex> = OnceLock::new();
    URL_REGEX.get_or_init(|| Regex::new(URL_PATTERN).expect("URL pattern is a valid regex"))
}

/// Returns true if `input` looks like an absolute http, https or ftp URL.
///
/// This is a shape check only. It does not resolve or reach the host.
///
/// ```
/// use urlsearch::query::is_valid_url;
///
/// assert!(is_valid_url("https://abc.sharepoint.com/sites/whatever"));
/// assert!(is_valid_url("ftp://x"));
/// assert!(!is_valid_url("http:// has space"));
/// ```
#[must_use]
pub fn is_valid_url(input: &str) -> bool {
    url_regex().is_match(input)
}

/// Like [`is_valid_url`], but returns a [`ValidationError`] for rejected input.
pub fn validate_url(input: &str) -> Result<(), ValidationError> {
    if is_valid_url(input) {
        Ok(())
    } else {
        Err(ValidationError::new(input))
    }
}
