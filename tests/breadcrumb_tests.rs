use waypoint::breadcrumbs::generate;
use waypoint::{Breadcrumb, RouteCatalog, RouteDescriptor};

fn catalog_with_param_child() -> RouteCatalog {
    RouteCatalog::new(vec![
        RouteDescriptor::new("/", "dashboard", "Dashboard"),
        RouteDescriptor::new("/jobs", "jobs", "Jobs").with_children(vec![
            RouteDescriptor::new("/jobs/:id", "jobs-detail", "Job Details"),
        ]),
    ])
}

#[test]
fn test_parameterized_leaf_degenerates_to_matched_prefix() {
    // "/jobs/42" has no exact match; only "/jobs/:id" is declared. The
    // exact-match walk skips the final segment and closes the trail at
    // "Jobs", which becomes the active entry.
    let trail = generate(&catalog_with_param_child(), "/jobs/42", true);
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
fn test_gap_in_the_middle_is_skipped() {
    // "/a/b/c" with only "/a" and "/a/b/c" declared: the unmatched middle
    // prefix contributes no entry and the trail continues past it.
    let catalog = RouteCatalog::new(vec![RouteDescriptor::new("/a", "a", "Alpha").with_children(
        vec![RouteDescriptor::new("/a/b/c", "abc", "Gamma")],
    )]);
    let trail = generate(&catalog, "/a/b/c", false);
    assert_eq!(trail.len(), 2);
    assert_eq!(trail[0].label, "Alpha");
    assert!(!trail[0].is_active);
    assert_eq!(trail[1].label, "Gamma");
    assert!(trail[1].is_active);
}

#[test]
fn test_unknown_path_yields_empty_or_home_only() {
    let catalog = catalog_with_param_child();

    let without_home = generate(&catalog, "/totally/unknown", false);
    assert!(without_home.is_empty());

    let with_home = generate(&catalog, "/totally/unknown", true);
    assert_eq!(with_home.len(), 1);
    assert_eq!(with_home[0].label, "Home");
    assert!(!with_home[0].is_active);
}

#[test]
fn test_home_active_only_at_root() {
    let catalog = catalog_with_param_child();

    let at_root = generate(&catalog, "/", true);
    assert_eq!(at_root.len(), 1);
    assert!(at_root[0].is_active);

    let elsewhere = generate(&catalog, "/jobs", true);
    assert!(!elsewhere[0].is_active);
}
