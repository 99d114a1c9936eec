//! Query-string matching for mock targets.
//!
//! Two modes, selected by `complete_qs`:
//! - subset (default): every target pair must be present in the request,
//!   extra request pairs are ignored
//! - complete: the request must carry exactly the target's pairs, no more
//!   and no fewer
//!
//! Pairs are compared as a multiset. A duplicated target pair such as
//! `a=1&a=1` needs two matching request pairs.

use crate::options::MatchOptions;

/// Compiled query-string matcher.
#[derive(Debug, Clone)]
pub struct QueryMatcher {
    /// Expected pairs (lowercased when matching case-insensitively)
    expected: Vec<(String, String)>,
    complete: bool,
    case_sensitive: bool,
}

impl QueryMatcher {
    pub fn compile(expected: &[(String, String)], options: &MatchOptions) -> Self {
        let expected = if options.case_sensitive {
            expected.to_vec()
        } else {
            expected
                .iter()
                .map(|(k, v)| (k.to_lowercase(), v.to_lowercase()))
                .collect()
        };

        QueryMatcher {
            expected,
            complete: options.complete_qs,
            case_sensitive: options.case_sensitive,
        }
    }

    /// Check the decoded query pairs of a request.
    pub fn matches(&self, actual: &[(String, String)]) -> bool {
        if self.complete && actual.len() != self.expected.len() {
            return false;
        }

        // Each request pair may satisfy at most one expected pair
        let mut consumed = vec![false; actual.len()];
        for (key, value) in &self.expected {
            let found = actual.iter().enumerate().position(|(i, (k, v))| {
                !consumed[i] && self.equals(key, k) && self.equals(value, v)
            });
            match found {
                Some(i) => consumed[i] = true,
                None => return false,
            }
        }
        true
    }

    /// True when the target constrains nothing (subset mode, no pairs).
    pub fn is_unconstrained(&self) -> bool {
        !self.complete && self.expected.is_empty()
    }

    #[inline]
    fn equals(&self, expected: &str, actual: &str) -> bool {
        if self.case_sensitive {
            expected == actual
        } else {
            actual.to_lowercase() == expected
        }
    }
}
