//! The incoming request a mock target is matched against.

use crate::error::MatcherError;
use crate::url_parts::UrlParts;
use hyper::header::{HeaderName, HeaderValue};
use hyper::{HeaderMap, Method, Request};

/// A fully resolved request, ready to be handed to the matchers.
///
/// The URL must be absolute. It is parsed once here so every registered
/// matcher can compare components without re-parsing.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    method: String,
    url: String,
    parts: UrlParts,
    headers: HeaderMap,
}

impl PreparedRequest {
    /// Prepare a request from its method and absolute URL.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Result<Self, MatcherError> {
        let method = method.into();
        let url = url.into();

        if Method::from_bytes(method.as_bytes()).is_err() {
            return Err(MatcherError::InvalidMethod(method));
        }
        let parts = UrlParts::parse_absolute(&url)?;

        Ok(PreparedRequest {
            method,
            url,
            parts,
            headers: HeaderMap::new(),
        })
    }

    /// Append a header to the request.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, MatcherError> {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| MatcherError::InvalidHeader {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| MatcherError::InvalidHeader {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

        self.headers.append(header_name, header_value);
        Ok(self)
    }

    /// Merge a header map into the request, replacing same-named headers.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn parts(&self) -> &UrlParts {
        &self.parts
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// First value of a header, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl<B> TryFrom<&Request<B>> for PreparedRequest {
    type Error = MatcherError;

    fn try_from(request: &Request<B>) -> Result<Self, Self::Error> {
        Ok(
            PreparedRequest::new(request.method().as_str(), request.uri().to_string())?
                .with_headers(request.headers().clone()),
        )
    }
}
