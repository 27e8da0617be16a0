//! Route matching logic.
//!
//! # Responsibilities
//! - Match a request path exactly
//! - Match a request path by literal prefix
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - Matchers see the path only; the query string is stripped beforehand
//! - No pattern syntax, just `==` and `starts_with`

/// Trait for matching a request path against a condition.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;
}

/// Matches one path exactly.
#[derive(Debug, Clone)]
pub struct ExactPathMatcher {
    path: String,
}

impl ExactPathMatcher {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Matcher for ExactPathMatcher {
    fn matches(&self, path: &str) -> bool {
        path == self.path
    }
}

/// Matches the request path prefix.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    /// Create a new path prefix matcher.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Matcher for PathPrefixMatcher {
    fn matches(&self, path: &str) -> bool {
        path.starts_with(&self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_matcher() {
        let matcher = ExactPathMatcher::new("/api/health");

        assert!(matcher.matches("/api/health"));
        assert!(!matcher.matches("/api/health/"));
        assert!(!matcher.matches("/api/healthz"));
        assert!(!matcher.matches("/API/HEALTH"));
    }

    #[test]
    fn test_path_matcher() {
        let matcher = PathPrefixMatcher::new("/api/blog");

        assert!(matcher.matches("/api/blog"));
        assert!(matcher.matches("/api/blog/posts/1"));
        assert!(matcher.matches("/api/blogroll"));
        assert!(!matcher.matches("/api/bl"));
        assert!(!matcher.matches("/Api/blog"));
    }
}
