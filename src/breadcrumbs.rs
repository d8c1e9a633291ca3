//! Breadcrumb trail derivation.
//!
//! A pure projection of the current path onto the route catalogue,
//! recomputed on every state change and never persisted. The walk is
//! exact-match only: a prefix with no declared route contributes no entry,
//! and a trailing parameterized segment (e.g. the `42` of `/jobs/42`
//! against a declared `/jobs/:id`) is silently skipped, leaving the
//! deepest matched prefix as the active tail.
//!
//! Callers hide the breadcrumb UI when the trail has one entry or fewer.

use crate::catalog::RouteCatalog;

/// One segment of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    /// Display label (the route's title, or `"Home"` for the synthetic
    /// root entry).
    pub label: String,
    /// Absolute path for this trail segment.
    pub path: String,
    /// True only for the last entry; active entries render without an
    /// outgoing link.
    pub is_active: bool,
}

/// Derive the breadcrumb trail for `current_path`.
///
/// Walks the path's `/`-delimited segments left to right, accumulating a
/// running prefix; each prefix with an exact catalogue match contributes
/// an entry labeled by the route's title. The deepest matched entry is
/// marked active. With `show_home`, a synthetic `Home` entry pointing at
/// the root is prepended, active only when `current_path` is the root
/// itself.
///
/// A fully unknown path yields either an empty trail or only the synthetic
/// `Home` entry.
///
/// # Example
///
/// ```rust
/// use waypoint::breadcrumbs::generate;
/// use waypoint::{RouteCatalog, RouteDescriptor};
///
/// let catalog = RouteCatalog::new(vec![
///     RouteDescriptor::new("/", "dashboard", "Dashboard"),
///     RouteDescriptor::new("/jobs", "jobs", "Jobs"),
/// ]);
/// let trail = generate(&catalog, "/jobs", true);
/// assert_eq!(trail.len(), 2);
/// assert_eq!(trail[0].label, "Home");
/// assert!(trail[1].is_active);
/// ```
#[must_use]
pub fn generate(catalog: &RouteCatalog, current_path: &str, show_home: bool) -> Vec<Breadcrumb> {
    let mut trail = Vec::new();
    if show_home {
        trail.push(Breadcrumb {
            label: "Home".to_string(),
            path: "/".to_string(),
            is_active: current_path == "/",
        });
    }

    let walk_start = trail.len();
    let mut prefix = String::with_capacity(current_path.len());
    for segment in current_path.split('/').filter(|s| !s.is_empty()) {
        prefix.push('/');
        prefix.push_str(segment);
        if let Some(route) = catalog.find_by_path(&prefix) {
            trail.push(Breadcrumb {
                label: route.title.clone(),
                path: prefix.clone(),
                is_active: false,
            });
        }
    }

    // The deepest matched entry closes the trail; the synthetic Home entry
    // is only active via its own root check above.
    if trail.len() > walk_start {
        if let Some(last) = trail.last_mut() {
            last.is_active = true;
        }
    }

    trail
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RouteDescriptor;

    fn sample_catalog() -> RouteCatalog {
        RouteCatalog::new(vec![
            RouteDescriptor::new("/", "dashboard", "Dashboard"),
            RouteDescriptor::new("/jobs", "jobs", "Jobs").with_children(vec![
                RouteDescriptor::new("/jobs/create", "jobs-create", "Create Job"),
                RouteDescriptor::new("/jobs/:id", "jobs-detail", "Job Details"),
            ]),
        ])
    }

    #[test]
    fn test_trail_with_home() {
        let trail = generate(&sample_catalog(), "/jobs", true);
        assert_eq!(
            trail,
            vec![
                Breadcrumb {
                    label: "Home".to_string(),
                    path: "/".to_string(),
                    is_active: false,
                },
                Breadcrumb {
                    label: "Jobs".to_string(),
                    path: "/jobs".to_string(),
                    is_active: true,
                },
            ]
        );
    }

    #[test]
    fn test_unmatched_final_segment_is_skipped() {
        // "/jobs/42" has no exact match (only "/jobs/:id" is declared), so
        // the walk ends at "/jobs", which becomes the active tail.
        let trail = generate(&sample_catalog(), "/jobs/42", true);
        assert_eq!(trail.len(), 2);
        assert_eq!(trail[1].label, "Jobs");
        assert!(trail[1].is_active);
        assert!(!trail[0].is_active);
    }

    #[test]
    fn test_nested_exact_match() {
        let trail = generate(&sample_catalog(), "/jobs/create", false);
        assert_eq!(trail.len(), 2);
        assert_eq!(trail[0].label, "Jobs");
        assert!(!trail[0].is_active);
        assert_eq!(trail[1].label, "Create Job");
        assert!(trail[1].is_active);
    }

    #[test]
    fn test_root_path() {
        let trail = generate(&sample_catalog(), "/", true);
        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0].label, "Home");
        assert!(trail[0].is_active);

        assert!(generate(&sample_catalog(), "/", false).is_empty());
    }

    #[test]
    fn test_unknown_path() {
        let trail = generate(&sample_catalog(), "/nowhere/at/all", true);
        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0].label, "Home");
        assert!(!trail[0].is_active);

        assert!(generate(&sample_catalog(), "/nowhere", false).is_empty());
    }
}
