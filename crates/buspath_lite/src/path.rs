//! Object path patterns.
//!
//! A pattern is either a concrete path (`/org/service/object`), matched
//! exactly, or a subtree pattern ending in `/*` (`/org/service/objects/*`)
//! that matches every path below its base. A pattern of exactly `/*`
//! covers the whole tree rooted at `/`.

/// Returns true if the pattern registers a whole subtree, i.e. ends in `/*`.
pub fn is_subtree(pattern: &str) -> bool {
    pattern.ends_with("/*")
}

/// Decide whether a concrete inbound path falls under a pattern.
///
/// Concrete patterns require exact equality. Subtree patterns compare
/// everything except the trailing asterisk; the slash kept in the prefix
/// ensures only genuine child paths match, not string-prefix coincidences
/// (`/a/bc` is not under `/a/b/*`). An empty pattern matches nothing.
pub fn matches(path: &str, pattern: &str) -> bool {
    if pattern.is_empty() {
        return false;
    }

    if !is_subtree(pattern) {
        return path == pattern;
    }

    path.starts_with(&pattern[..pattern.len() - 1])
}

/// Strip the `/*` suffix from a subtree pattern, yielding the string the
/// transport actually binds. Concrete patterns pass through unchanged.
///
/// The whole-tree pattern `/*` maps to the root `/`, never to the empty
/// string.
pub fn base_path(pattern: &str) -> String {
    if !is_subtree(pattern) {
        return pattern.to_owned();
    }

    if pattern.len() == 2 {
        return "/".to_owned();
    }

    pattern[..pattern.len() - 2].to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_subtree() {
        assert!(is_subtree("/*"));
        assert!(is_subtree("/abc/*"));
        assert!(is_subtree("/org/example/objects/*"));

        assert!(!is_subtree(""));
        assert!(!is_subtree("/"));
        assert!(!is_subtree("*"));
        assert!(!is_subtree("/abc"));
        assert!(!is_subtree("/abc*"));
    }

    #[test]
    fn test_matches_concrete() {
        assert!(matches("/a/b", "/a/b"));
        assert!(!matches("/a/b/c", "/a/b"));
        assert!(!matches("/a", "/a/b"));
        assert!(!matches("", "/a"));
    }

    #[test]
    fn test_matches_subtree() {
        assert!(matches("/a/b", "/a/*"));
        assert!(matches("/a/b/c", "/a/*"));
        assert!(matches("/a/", "/a/*"));

        // The retained slash rejects sibling paths that merely share a
        // string prefix with the base.
        assert!(!matches("/ab", "/a/*"));
        assert!(!matches("/a", "/a/*"));
        assert!(!matches("/b", "/a/*"));
    }

    #[test]
    fn test_matches_whole_tree() {
        assert!(matches("/", "/*"));
        assert!(matches("/anything", "/*"));
        assert!(matches("/a/b/c", "/*"));
    }

    #[test]
    fn test_matches_empty_pattern() {
        assert!(!matches("/a", ""));
        assert!(!matches("", ""));
    }

    #[test]
    fn test_base_path() {
        assert_eq!(base_path("/a/b/*"), "/a/b");
        assert_eq!(base_path("/*"), "/");
        assert_eq!(base_path("/a/b"), "/a/b");
        assert_eq!(base_path("/"), "/");
    }
}
