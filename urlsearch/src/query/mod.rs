//! Query construction from page URLs.
//!
//! This module provides:
//! - Syntactic URL validation
//! - Structural URL decomposition into host and path
//! - Tokenization of URL components
//! - Composition of tokens into a nested proximity query

mod builder;
mod parsed;
mod tokenizer;
mod validator;

pub use builder::{build_onear_query, compose_onear, QueryBuilder, QueryTemplate, ONEAR_OPERATOR};
pub use parsed::ParsedUrl;
pub use tokenizer::{split_by_all, Token, DEFAULT_DELIMITERS};
pub use validator::{is_valid_url, validate_url};
