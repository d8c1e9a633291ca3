//! Path normalization and joining utilities.
//!
//! Every path handed to the router goes through [`normalize`] first so the
//! rest of the crate can assume a canonical shape: leading slash, no
//! trailing slash except for the root, no duplicate slashes.

/// Normalize a path to its canonical absolute form.
///
/// Guarantees a leading slash, collapses duplicate slashes, and strips any
/// trailing slash except on the root path. Total: never fails, any input
/// produces a valid path.
///
/// # Example
///
/// ```rust
/// use waypoint::paths::normalize;
///
/// assert_eq!(normalize("jobs//42/"), "/jobs/42");
/// assert_eq!(normalize(""), "/");
/// assert_eq!(normalize("/"), "/");
/// ```
#[must_use]
pub fn normalize(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 1);
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        out.push('/');
        out.push_str(segment);
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}

/// Join path fragments into a single relative path.
///
/// Strips stray slashes from each fragment and drops empty fragments, so
/// `join(&["/a/", "b", "", "c/"])` yields `"a/b/c"`. Prefix the result with
/// [`normalize`] when an absolute path is needed.
#[must_use]
pub fn join(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim_matches('/'))
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Whether a path points outside the application (an absolute `http(s)` URL).
///
/// External targets are never routed; the presentation layer opens them
/// through the host environment instead of calling `navigate`.
#[must_use]
pub fn is_external(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_root() {
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("//"), "/");
    }

    #[test]
    fn test_normalize_adds_leading_slash() {
        assert_eq!(normalize("jobs"), "/jobs");
    }

    #[test]
    fn test_normalize_strips_trailing_slash() {
        assert_eq!(normalize("/jobs/"), "/jobs");
        assert_eq!(normalize("/jobs/42/"), "/jobs/42");
    }

    #[test]
    fn test_normalize_collapses_duplicate_slashes() {
        assert_eq!(normalize("/jobs//42"), "/jobs/42");
        assert_eq!(normalize("//jobs///42//"), "/jobs/42");
    }

    #[test]
    fn test_join() {
        assert_eq!(join(&["/a/", "b", "c/"]), "a/b/c");
        assert_eq!(join(&["", "x"]), "x");
        assert_eq!(join(&[]), "");
    }

    #[test]
    fn test_is_external() {
        assert!(is_external("https://example.com/jobs"));
        assert!(is_external("http://example.com"));
        assert!(!is_external("/jobs"));
        assert!(!is_external("jobs"));
    }
}
