//! Error types for matcher construction and request preparation.
//!
//! Matching itself never fails: a non-match is a plain `false`. These errors
//! only surface while building a [`Matcher`](crate::Matcher) or a
//! [`PreparedRequest`](crate::PreparedRequest) from bad input.

use thiserror::Error;

/// Errors raised while building matchers or preparing requests
#[derive(Debug, Error)]
pub enum MatcherError {
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Request URL must be absolute (scheme and host): {0}")]
    RelativeRequestUrl(String),
    #[error("Invalid HTTP method: {0:?}")]
    InvalidMethod(String),
    #[error("Invalid URL regex: {0}")]
    InvalidRegex(#[from] regex::Error),
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },
}

impl MatcherError {
    pub(crate) fn invalid_url(url: &str, reason: impl ToString) -> Self {
        MatcherError::InvalidUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}
