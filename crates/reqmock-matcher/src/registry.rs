//! Ordered collection of registered matchers.

use crate::config::MockTarget;
use crate::error::MatcherError;
use crate::matcher::Matcher;
use crate::request::PreparedRequest;
use tracing::debug;

/// Matchers in registration order.
///
/// Lookup returns the first matcher that accepts a request. What to do when
/// nothing matches is up to the caller.
#[derive(Debug, Clone, Default)]
pub struct MatcherSet {
    matchers: Vec<Matcher>,
}

impl MatcherSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile a list of configured targets, failing on the first bad one.
    pub fn compile(targets: &[MockTarget]) -> Result<Self, MatcherError> {
        let matchers = targets
            .iter()
            .map(Matcher::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(MatcherSet { matchers })
    }

    pub fn register(&mut self, matcher: Matcher) {
        self.matchers.push(matcher);
    }

    /// First registered matcher that accepts the request.
    pub fn find(&self, request: &PreparedRequest) -> Option<&Matcher> {
        let found = self.matchers.iter().find(|m| m.matches(request));
        if found.is_none() {
            debug!(
                "No mock target for {} {} ({} registered)",
                request.method(),
                request.url(),
                self.matchers.len()
            );
        }
        found
    }

    /// Every matcher that accepts the request, in registration order.
    pub fn matching<'a, 'r>(
        &'a self,
        request: &'r PreparedRequest,
    ) -> impl Iterator<Item = &'a Matcher> + 'r
    where
        'a: 'r,
    {
        self.matchers.iter().filter(move |m| m.matches(request))
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Matcher> {
        self.matchers.iter()
    }
}

impl FromIterator<Matcher> for MatcherSet {
    fn from_iter<I: IntoIterator<Item = Matcher>>(iter: I) -> Self {
        MatcherSet {
            matchers: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: &str, url: &str) -> PreparedRequest {
        PreparedRequest::new(method, url).unwrap()
    }

    #[test]
    fn test_find_returns_first_registered() {
        let mut set = MatcherSet::new();
        set.register(Matcher::builder("GET", "/path").build().unwrap());
        set.register(Matcher::builder("GET", "/path?a=1").build().unwrap());

        let req = request("GET", "http://www.test.com/path?a=1");
        assert_eq!(set.find(&req).map(Matcher::target), Some("/path"));
        assert_eq!(set.matching(&req).count(), 2);
    }

    #[test]
    fn test_found_matcher_outlives_request() {
        let set: MatcherSet = [Matcher::builder("GET", "/path").build().unwrap()]
            .into_iter()
            .collect();

        let found = {
            let req = request("GET", "http://www.test.com/path");
            set.find(&req)
        };
        assert_eq!(found.map(Matcher::target), Some("/path"));
    }

    #[test]
    fn test_find_none() {
        let set: MatcherSet = [Matcher::builder("POST", "/path").build().unwrap()]
            .into_iter()
            .collect();
        assert!(set.find(&request("GET", "http://www.test.com/path")).is_none());
        assert!(MatcherSet::new().find(&request("GET", "http://x.test/")).is_none());
    }

    #[test]
    fn test_compile_from_yaml() {
        let yaml = r#"
- method: GET
  url: http://www.test.com/users
- method: POST
  url: /users
  completeQs: true
- url:
    regex: "/health$"
"#;
        let targets: Vec<MockTarget> = serde_yaml::from_str(yaml).unwrap();
        let set = MatcherSet::compile(&targets).unwrap();
        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());

        let hit = set.find(&request("POST", "https://other.test.com/users")).unwrap();
        assert_eq!(hit.target(), "/users");

        let health = set.find(&request("HEAD", "http://svc.local/health")).unwrap();
        assert_eq!(health.target(), "/health$");

        assert!(set
            .find(&request("POST", "https://other.test.com/users?x=1"))
            .is_none());
    }

    #[test]
    fn test_compile_rejects_bad_target() {
        let targets = vec![
            MockTarget::new("GET", "/ok"),
            MockTarget::new("GET", "not a url"),
        ];
        assert!(MatcherSet::compile(&targets).is_err());
    }

    #[test]
    fn test_shared_across_threads() {
        let set = std::sync::Arc::new(
            [
                Matcher::builder("GET", "/a").build().unwrap(),
                Matcher::builder("GET", "/b").build().unwrap(),
            ]
            .into_iter()
            .collect::<MatcherSet>(),
        );

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let set = std::sync::Arc::clone(&set);
                std::thread::spawn(move || {
                    let path = if i % 2 == 0 { "a" } else { "b" };
                    let req = request("GET", &format!("http://www.test.com/{path}"));
                    set.find(&req).map(|m| m.target().to_string())
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let expected = if i % 2 == 0 { "/a" } else { "/b" };
            assert_eq!(handle.join().unwrap().as_deref(), Some(expected));
        }
    }
}
