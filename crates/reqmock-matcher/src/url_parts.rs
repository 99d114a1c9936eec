//! URL component value type shared by mock targets and requests.
//!
//! A target may be absolute (`http://host:port/path?q`), scheme-relative
//! (`//host/path?q`) or path-only (`/path?q`). Each component that the
//! target leaves out is `None` and acts as a wildcard when matching.

use crate::error::MatcherError;
use hyper::Uri;

/// Parsed URL components.
///
/// Scheme and host are lowercased. The port is only `Some` when it was
/// written out in the URL: `http://host:80/` and `http://host/` stay
/// distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    scheme: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    path: String,
    query: Vec<(String, String)>,
}

impl UrlParts {
    /// Parse a mock target, which may be partial.
    pub fn parse_target(target: &str) -> Result<Self, MatcherError> {
        if target.starts_with("//") {
            // Borrow a scheme so the authority parses, then forget it.
            let uri = parse_uri(target, &format!("http:{target}"))?;
            let mut parts = Self::from_uri(target, &uri)?;
            parts.scheme = None;
            return Ok(parts);
        }

        let uri = parse_uri(target, target)?;
        if !target.starts_with('/') && (uri.scheme().is_none() || uri.host().is_none()) {
            return Err(MatcherError::invalid_url(
                target,
                "expected 'scheme://host/path', '//host/path' or '/path'",
            ));
        }
        Self::from_uri(target, &uri)
    }

    /// Parse the absolute URL of a prepared request.
    pub fn parse_absolute(url: &str) -> Result<Self, MatcherError> {
        let parts = Self::parse_target(url)?;
        if !parts.is_absolute() {
            return Err(MatcherError::RelativeRequestUrl(url.to_string()));
        }
        Ok(parts)
    }

    fn from_uri(raw: &str, uri: &Uri) -> Result<Self, MatcherError> {
        let path = match uri.path() {
            "" => "/",
            p => p,
        };

        Ok(UrlParts {
            scheme: uri.scheme_str().map(str::to_ascii_lowercase),
            host: uri.host().map(str::to_ascii_lowercase),
            port: explicit_port(raw, uri)?,
            path: path.to_string(),
            query: parse_query_pairs(uri.query()),
        })
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Explicit port, `None` when the URL did not spell one out.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Decoded query pairs in their original order, duplicates included.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Copy with the path lowercased, for case-insensitive targets.
    pub(crate) fn lowercase_path(mut self) -> Self {
        self.path = self.path.to_lowercase();
        self
    }

    /// True when both scheme and host are present.
    pub fn is_absolute(&self) -> bool {
        self.scheme.is_some() && self.host.is_some()
    }
}

fn parse_uri(raw: &str, candidate: &str) -> Result<Uri, MatcherError> {
    candidate
        .parse::<Uri>()
        .map_err(|e| MatcherError::invalid_url(raw, e))
}

/// Read the port exactly as written. `Uri::port_u16` would silently drop
/// an out-of-range value and turn it into a wildcard.
fn explicit_port(raw: &str, uri: &Uri) -> Result<Option<u16>, MatcherError> {
    let Some(authority) = uri.authority() else {
        return Ok(None);
    };

    let host_port = authority.as_str().rsplit('@').next().unwrap_or_default();
    let tail = host_port.get(authority.host().len()..).unwrap_or_default();

    match tail {
        "" | ":" => Ok(None),
        _ => tail
            .strip_prefix(':')
            .and_then(|p| p.parse::<u16>().ok())
            .map(Some)
            .ok_or_else(|| MatcherError::invalid_url(raw, format!("invalid port '{tail}'"))),
    }
}

/// Parse a raw query string into decoded key/value pairs.
///
/// Order and duplicates are preserved. `+` decodes to a space, and a key
/// without `=` gets an empty value. Percent-escapes that are not valid UTF-8
/// decode lossily to U+FFFD, so `%FE` and `%FF` compare equal.
pub fn parse_query_pairs(query: Option<&str>) -> Vec<(String, String)> {
    let Some(q) = query else {
        return Vec::new();
    };

    q.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}
