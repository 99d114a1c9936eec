//! Mock target matching.
//!
//! A [`Matcher`] pairs a method with a URL pattern and decides whether a
//! [`PreparedRequest`] hits it. URL components are compared progressively:
//! scheme, host and port only when the target spells them out, path always,
//! and the query string as a subset or complete set depending on
//! `complete_qs`.
//!
//! ```
//! use reqmock_matcher::{Matcher, PreparedRequest};
//!
//! let matcher = Matcher::builder("GET", "//www.test.com/path?a=1")
//!     .build()
//!     .unwrap();
//! let request = PreparedRequest::new("get", "https://www.test.com/path?a=1&b=2").unwrap();
//! assert!(matcher.matches(&request));
//! ```

use crate::config::{MockTarget, UrlSpec};
use crate::error::MatcherError;
use crate::method::MethodMatcher;
use crate::options::MatchOptions;
use crate::predicate::{HeaderPredicate, RequestPredicate};
use crate::query::QueryMatcher;
use crate::request::PreparedRequest;
use crate::url_parts::UrlParts;
use regex::Regex;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// URL half of a compiled matcher.
#[derive(Debug, Clone)]
pub(crate) enum UrlPattern {
    Any,
    Regex(Arc<Regex>),
    Parts(UrlParts),
}

/// Compiled mock target. Immutable, cheap to clone, safe to share.
#[derive(Clone)]
pub struct Matcher {
    method: MethodMatcher,
    /// Target as registered, for diagnostics
    target: String,
    url: UrlPattern,
    query: QueryMatcher,
    options: MatchOptions,
    predicates: Vec<Arc<dyn RequestPredicate>>,
}

impl Matcher {
    /// Build a matcher from its four construction inputs.
    pub fn new(
        method: &str,
        target: &str,
        predicates: Vec<Arc<dyn RequestPredicate>>,
        complete_qs: bool,
    ) -> Result<Self, MatcherError> {
        let mut builder = Matcher::builder(method, target).complete_qs(complete_qs);
        builder.predicates = predicates;
        builder.build()
    }

    /// Start building a matcher for a method and a full or partial URL.
    pub fn builder(method: &str, target: &str) -> MatcherBuilder {
        MatcherBuilder {
            method: Some(method.to_string()),
            url: UrlSpec::Target(target.to_string()),
            ..MatcherBuilder::default()
        }
    }

    /// Compile a configured mock target.
    pub fn compile(config: &MockTarget) -> Result<Self, MatcherError> {
        MatcherBuilder {
            method: config.method.clone(),
            url: config.url.clone(),
            options: config.options,
            headers: config
                .request_headers
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            predicates: Vec::new(),
        }
        .build()
    }

    /// Check whether this target matches a request.
    ///
    /// Never fails: a request that does not fit is simply `false`.
    pub fn matches(&self, request: &PreparedRequest) -> bool {
        if !self.method.matches(request.method()) {
            trace!(
                "{} rejected {} {}: method",
                self,
                request.method(),
                request.url()
            );
            return false;
        }

        if let Some(component) = self.url_mismatch(request) {
            trace!(
                "{} rejected {} {}: {}",
                self,
                request.method(),
                request.url(),
                component
            );
            return false;
        }

        if let Some(index) = self.predicates.iter().position(|p| !p.matches(request)) {
            trace!(
                "{} rejected {} {}: additional matcher #{}",
                self,
                request.method(),
                request.url(),
                index
            );
            return false;
        }

        true
    }

    /// Name of the first URL component that fails, if any.
    fn url_mismatch(&self, request: &PreparedRequest) -> Option<&'static str> {
        let target = match &self.url {
            UrlPattern::Any => return None,
            UrlPattern::Regex(regex) => {
                return (!regex.is_match(request.url())).then_some("url regex");
            }
            UrlPattern::Parts(parts) => parts,
        };
        let actual = request.parts();

        if target.scheme().is_some() && target.scheme() != actual.scheme() {
            return Some("scheme");
        }
        if target.host().is_some() && target.host() != actual.host() {
            return Some("host");
        }
        if target.port().is_some() && target.port() != actual.port() {
            return Some("port");
        }

        let path = if self.options.case_sensitive {
            Cow::Borrowed(actual.path())
        } else {
            Cow::Owned(actual.path().to_lowercase())
        };
        if path != target.path() {
            return Some("path");
        }

        if !self.query.is_unconstrained() && !self.query.matches(actual.query()) {
            return Some("query string");
        }
        None
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// The target URL as registered.
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.method {
            MethodMatcher::Any => write!(f, "ANY {}", self.target),
            MethodMatcher::Exact(m) => write!(f, "{} {}", m, self.target),
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("method", &self.method)
            .field("target", &self.target)
            .field("url", &self.url)
            .field("options", &self.options)
            .field("predicates", &self.predicates.len())
            .finish()
    }
}

/// Builder for [`Matcher`]. Input errors surface from [`build`](Self::build).
#[derive(Default)]
pub struct MatcherBuilder {
    /// `None` matches any method
    method: Option<String>,
    url: UrlSpec,
    options: MatchOptions,
    headers: Vec<(String, String)>,
    predicates: Vec<Arc<dyn RequestPredicate>>,
}

impl MatcherBuilder {
    /// Match any request method.
    #[must_use]
    pub fn any_method(mut self) -> Self {
        self.method = None;
        self
    }

    /// Match any request URL.
    #[must_use]
    pub fn any_url(mut self) -> Self {
        self.url = UrlSpec::Any;
        self
    }

    /// Match URLs by regex instead of by components.
    #[must_use]
    pub fn regex(mut self, pattern: impl Into<String>) -> Self {
        self.url = UrlSpec::Regex {
            regex: pattern.into(),
        };
        self
    }

    #[must_use]
    pub fn complete_qs(mut self, complete_qs: bool) -> Self {
        self.options.complete_qs = complete_qs;
        self
    }

    #[must_use]
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.options.case_sensitive = case_sensitive;
        self
    }

    #[must_use]
    pub fn options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Require a request header. An invalid name fails the build.
    #[must_use]
    pub fn request_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Append a predicate that must also hold for a request to match.
    #[must_use]
    pub fn additional_matcher(mut self, predicate: impl RequestPredicate + 'static) -> Self {
        self.predicates.push(Arc::new(predicate));
        self
    }

    pub fn build(self) -> Result<Matcher, MatcherError> {
        let method = match &self.method {
            Some(m) => MethodMatcher::exact(m)?,
            None => MethodMatcher::Any,
        };

        let (target, url, expected_query) = match self.url {
            UrlSpec::Any => ("*".to_string(), UrlPattern::Any, Vec::new()),
            UrlSpec::Regex { regex } => {
                let compiled = Regex::new(&regex)?;
                (regex, UrlPattern::Regex(Arc::new(compiled)), Vec::new())
            }
            UrlSpec::Target(target) => {
                let mut parts = UrlParts::parse_target(&target)?;
                if !self.options.case_sensitive {
                    parts = parts.lowercase_path();
                }
                let query = parts.query().to_vec();
                (target, UrlPattern::Parts(parts), query)
            }
        };

        // Header requirements run before caller-supplied predicates
        let mut predicates = self.predicates;
        let headers = HeaderPredicate::compile(self.headers)?;
        if !headers.is_empty() {
            predicates.insert(0, Arc::new(headers));
        }

        let matcher = Matcher {
            method,
            target,
            query: QueryMatcher::compile(&expected_query, &self.options),
            url,
            options: self.options,
            predicates,
        };
        debug!("Registered mock target {}", matcher);
        Ok(matcher)
    }
}
