//! Auxiliary request predicates.
//!
//! A matcher ANDs its method/URL verdict with an ordered list of extra
//! predicates. Anything that can look at a [`PreparedRequest`] and answer
//! yes or no qualifies, closures included.

use crate::error::MatcherError;
use crate::request::PreparedRequest;
use hyper::header::HeaderName;

/// A pure yes/no check on a request.
///
/// Implementations must not have side effects: a matcher may be consulted
/// any number of times, from any thread.
pub trait RequestPredicate: Send + Sync {
    fn matches(&self, request: &PreparedRequest) -> bool;
}

impl<F> RequestPredicate for F
where
    F: Fn(&PreparedRequest) -> bool + Send + Sync,
{
    fn matches(&self, request: &PreparedRequest) -> bool {
        self(request)
    }
}

/// Requires the request to carry every configured header.
///
/// Names compare case-insensitively, values exactly. Headers the request
/// has beyond the configured ones are ignored.
#[derive(Debug, Clone, Default)]
pub struct HeaderPredicate {
    expected: Vec<(HeaderName, String)>,
}

impl HeaderPredicate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from name/value pairs, rejecting invalid header names.
    pub fn compile<I, K, V>(headers: I) -> Result<Self, MatcherError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        headers
            .into_iter()
            .try_fold(Self::new(), |predicate, (name, value)| {
                predicate.with(name.as_ref(), value)
            })
    }

    /// Add one required header.
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Result<Self, MatcherError> {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| MatcherError::InvalidHeader {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        self.expected.push((header_name, value.into()));
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.expected.is_empty()
    }
}

impl RequestPredicate for HeaderPredicate {
    fn matches(&self, request: &PreparedRequest) -> bool {
        self.expected.iter().all(|(name, expected)| {
            request
                .headers()
                .get_all(name)
                .iter()
                .any(|actual| actual.to_str().is_ok_and(|v| v == expected))
        })
    }
}
