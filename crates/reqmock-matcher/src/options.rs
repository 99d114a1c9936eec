//! Options that modify how a mock target is compared to a request.

use serde::{Deserialize, Serialize};

/// Strictness knobs for URL comparison.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchOptions {
    /// Require the request query string to hold exactly the target's pairs
    /// (default: false, extra request pairs are ignored)
    #[serde(default, skip_serializing_if = "is_false")]
    pub complete_qs: bool,

    /// Compare path and query string case-sensitively (default: true)
    #[serde(default = "default_case_sensitive")]
    pub case_sensitive: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

fn default_case_sensitive() -> bool {
    true
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            complete_qs: false,
            case_sensitive: default_case_sensitive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_options_default() {
        let options = MatchOptions::default();
        assert!(!options.complete_qs);
        assert!(options.case_sensitive);
    }

    #[test]
    fn test_match_options_serde() {
        let options: MatchOptions = serde_json::from_str(r#"{"completeQs": true}"#).unwrap();
        assert!(options.complete_qs);
        assert!(options.case_sensitive);

        let options: MatchOptions = serde_json::from_str(r#"{"caseSensitive": false}"#).unwrap();
        assert!(!options.complete_qs);
        assert!(!options.case_sensitive);

        let json = serde_json::to_string(&MatchOptions::default()).unwrap();
        assert_eq!(json, r#"{"caseSensitive":true}"#);
    }
}
