//! Serializable mock target configuration.
//!
//! ```yaml
//! method: GET
//! url: //api.test.com/v1/items?page=1
//! completeQs: true
//! requestHeaders:
//!   X-Api-Key: secret
//! ```

use crate::options::MatchOptions;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// URL half of a mock target.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(untagged)]
pub enum UrlSpec {
    /// Full or partial URL: "http://host/path", "//host/path" or "/path"
    Target(String),

    /// Regex searched anywhere in the request URL: { regex: "/items/\\d+" }
    Regex { regex: String },

    /// Match any URL (field omitted)
    #[default]
    Any,
}

/// A registered mock target.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MockTarget {
    /// Request method; omitted means any method
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    #[serde(default)]
    pub url: UrlSpec,

    /// Headers the request must carry (all must match)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub request_headers: BTreeMap<String, String>,

    #[serde(flatten, default)]
    pub options: MatchOptions,
}

impl MockTarget {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        MockTarget {
            method: Some(method.into()),
            url: UrlSpec::Target(url.into()),
            ..Default::default()
        }
    }
}
