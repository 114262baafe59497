//! Path matching logic.
//!
//! # Responsibilities
//! - Match the request path exactly (root)
//! - Match the request path by prefix and hand back the remainder
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - The remainder after a prefix is returned verbatim, slashes included
//! - No regex to guarantee O(n) matching

/// Trait for matching a request path against a condition.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns the unmatched remainder of `path` if it matches this condition.
    fn strip<'a>(&self, path: &'a str) -> Option<&'a str>;

    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool {
        self.strip(path).is_some()
    }
}

/// Matches one exact path. The remainder is always empty.
#[derive(Debug, Clone)]
pub struct ExactMatcher {
    path: &'static str,
}

impl ExactMatcher {
    pub fn new(path: &'static str) -> Self {
        Self { path }
    }
}

impl Matcher for ExactMatcher {
    fn strip<'a>(&self, path: &'a str) -> Option<&'a str> {
        (path == self.path).then_some("")
    }
}

/// Matches the request path prefix.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: &'static str,
}

impl PathPrefixMatcher {
    /// Create a new path prefix matcher.
    pub fn new(prefix: &'static str) -> Self {
        Self { prefix }
    }
}

impl Matcher for PathPrefixMatcher {
    fn strip<'a>(&self, path: &'a str) -> Option<&'a str> {
        path.strip_prefix(self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_matcher() {
        let matcher = ExactMatcher::new("/");

        assert_eq!(matcher.strip("/"), Some(""));
        assert!(!matcher.matches("/api"));
        assert!(!matcher.matches(""));
    }

    #[test]
    fn test_path_matcher() {
        let matcher = PathPrefixMatcher::new("/api/iseven/");

        assert_eq!(matcher.strip("/api/iseven/42"), Some("42"));
        assert_eq!(matcher.strip("/api/iseven/"), Some(""));
        assert_eq!(matcher.strip("/api/iseven/12/x"), Some("12/x"));

        assert!(!matcher.matches("/api/iseven"));
        assert!(!matcher.matches("/API/ISEVEN/4")); // Case sensitive
        assert!(!matcher.matches("/v2/api/iseven/4"));
    }
}
