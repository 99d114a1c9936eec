//! URL and method matching for HTTP request mocking.
//!
//! A mock target is a method plus a URL that may be partial:
//!
//! - `http://www.test.com:5000/abc?a=1` compares scheme, host, port, path and query
//! - `//www.test.com/abc` ignores the scheme
//! - `/abc?a=1` only looks at path and query
//!
//! A [`Matcher`] answers one question, `matches(&request) -> bool`, for an
//! already prepared request with an absolute URL. Choosing between several
//! matching targets, and reporting when none match, is left to the caller
//! ([`MatcherSet`] offers first-registered lookup).
//!
//! # Module Structure
//!
//! - `url_parts` - URL component value type and query-string parsing
//! - `method` - Case-insensitive method matching
//! - `query` - Query-string subset / complete matching
//! - `predicate` - Auxiliary request predicates (headers, closures)
//! - `request` - The prepared request being matched
//! - `options` / `config` - Serializable target configuration
//! - `matcher` - The compiled matcher and its builder
//! - `registry` - Registration-order lookup over many matchers

mod config;
mod error;
mod matcher;
mod method;
mod options;
mod predicate;
mod query;
mod registry;
mod request;
mod url_parts;

pub use config::{MockTarget, UrlSpec};
pub use error::MatcherError;
pub use matcher::{Matcher, MatcherBuilder};
pub use method::MethodMatcher;
pub use options::MatchOptions;
pub use predicate::{HeaderPredicate, RequestPredicate};
pub use query::QueryMatcher;
pub use registry::MatcherSet;
pub use request::PreparedRequest;
pub use url_parts::{parse_query_pairs, UrlParts};
