//! HTTP method matching.

use crate::error::MatcherError;
use hyper::Method;

/// Method half of a mock target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MethodMatcher {
    /// Match any request method
    #[default]
    Any,
    /// Case-insensitive method equality
    Exact(String),
}

impl MethodMatcher {
    /// Build an exact matcher, rejecting strings that are not HTTP tokens.
    pub fn exact(method: &str) -> Result<Self, MatcherError> {
        Method::from_bytes(method.as_bytes())
            .map_err(|_| MatcherError::InvalidMethod(method.to_string()))?;
        Ok(MethodMatcher::Exact(method.to_ascii_uppercase()))
    }

    /// Check a request method. Comparison ignores ASCII case.
    #[inline]
    pub fn matches(&self, method: &str) -> bool {
        match self {
            MethodMatcher::Any => true,
            MethodMatcher::Exact(expected) => expected.eq_ignore_ascii_case(method),
        }
    }
}

impl From<Method> for MethodMatcher {
    fn from(method: Method) -> Self {
        MethodMatcher::Exact(method.as_str().to_ascii_uppercase())
    }
}
