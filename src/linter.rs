//! # Catalogue Linter Module
//!
//! Validates a route catalogue against the structural invariants the
//! matcher assumes. Violations never stop the router at runtime (every
//! resolution stays total, first-match-wins), but they make navigation
//! surprising, so the linter surfaces them at build or review time.
//!
//! ## Checks Performed
//!
//! 1. **Duplicate paths** - `path` must be unique across the flattened tree
//! 2. **Duplicate names** - `name` must be unique across the flattened tree
//! 3. **Ambiguous siblings** - no two sibling patterns may differ only by
//!    parameter name at the same position
//! 4. **Detached children** - a child's path should extend its parent's path
//! 5. **Parameterized top level** - a top-level parameterized path never
//!    appears in static navigation menus
//!
//! ## Usage
//!
//! ```rust
//! use waypoint::linter::{lint_catalog, LintSeverity};
//! use waypoint::{RouteCatalog, RouteDescriptor};
//!
//! let catalog = RouteCatalog::new(vec![
//!     RouteDescriptor::new("/jobs", "jobs", "Jobs"),
//!     RouteDescriptor::new("/jobs", "jobs-again", "Jobs Again"),
//! ]);
//! let issues = lint_catalog(&catalog);
//! assert!(issues.iter().any(|i| i.severity == LintSeverity::Error));
//! ```

use std::collections::HashMap;
use std::path::Path;

use crate::catalog::{load_catalog, RouteCatalog, RouteDescriptor};

/// Severity level for lint issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    /// Breaks a declared invariant; resolution order becomes load-bearing.
    Error,
    /// Legal but ambiguous or surprising.
    Warning,
    /// Worth knowing; no action required.
    Info,
}

impl std::fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LintSeverity::Error => write!(f, "error"),
            LintSeverity::Warning => write!(f, "warning"),
            LintSeverity::Info => write!(f, "info"),
        }
    }
}

/// A lint issue found in a route catalogue.
#[derive(Debug, Clone)]
pub struct LintIssue {
    /// Where the issue occurred (a route path or name).
    pub location: String,
    /// Severity of the issue.
    pub severity: LintSeverity,
    /// Machine-readable kind (e.g. `duplicate_path`).
    pub kind: String,
    /// Human-readable description of the problem.
    pub message: String,
    /// Optional suggestion for how to fix it.
    pub suggestion: Option<String>,
}

impl LintIssue {
    fn new(
        location: impl Into<String>,
        severity: LintSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintIssue {
            location: location.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Lint a route catalogue file.
///
/// # Errors
///
/// Fails when the file cannot be read or parsed; lint findings are
/// returned, not errors.
pub fn lint_file(path: &Path) -> anyhow::Result<Vec<LintIssue>> {
    let catalog = load_catalog(path)?;
    Ok(lint_catalog(&catalog))
}

/// Lint an already constructed catalogue.
#[must_use]
pub fn lint_catalog(catalog: &RouteCatalog) -> Vec<LintIssue> {
    let mut issues = Vec::new();

    check_duplicates(catalog, &mut issues);
    check_siblings(catalog.roots(), &mut issues);
    for route in catalog.iter_flattened() {
        check_children(route, &mut issues);
    }
    for route in catalog.roots() {
        if route.is_parameterized() {
            issues.push(
                LintIssue::new(
                    &route.path,
                    LintSeverity::Info,
                    "parameterized_top_level",
                    "top-level parameterized route is invisible to static navigation menus",
                )
                .with_suggestion("nest it under a concrete parent route"),
            );
        }
    }

    issues
}

fn check_duplicates(catalog: &RouteCatalog, issues: &mut Vec<LintIssue>) {
    let mut paths: HashMap<&str, u32> = HashMap::new();
    let mut names: HashMap<&str, u32> = HashMap::new();
    for route in catalog.iter_flattened() {
        *paths.entry(route.path.as_str()).or_default() += 1;
        *names.entry(route.name.as_str()).or_default() += 1;
    }
    for (path, count) in paths {
        if count > 1 {
            issues.push(LintIssue::new(
                path,
                LintSeverity::Error,
                "duplicate_path",
                format!("path declared {count} times; only the first declaration is reachable"),
            ));
        }
    }
    for (name, count) in names {
        if count > 1 {
            issues.push(LintIssue::new(
                name,
                LintSeverity::Error,
                "duplicate_name",
                format!("name declared {count} times; find_by_name returns only the first"),
            ));
        }
    }
}

/// Two sibling patterns that differ only by parameter name shadow each
/// other: both match the same concrete paths and declaration order decides.
fn check_siblings(siblings: &[RouteDescriptor], issues: &mut Vec<LintIssue>) {
    for (i, a) in siblings.iter().enumerate() {
        for b in &siblings[i + 1..] {
            if a.path != b.path && shadows(&a.path, &b.path) {
                issues.push(
                    LintIssue::new(
                        &b.path,
                        LintSeverity::Warning,
                        "ambiguous_siblings",
                        format!(
                            "pattern differs from sibling {} only by parameter name; \
                             first declaration wins for every matching path",
                            a.path
                        ),
                    )
                    .with_suggestion("merge the routes or make a segment static"),
                );
            }
        }
    }
    for route in siblings {
        check_siblings(&route.children, issues);
    }
}

fn shadows(a: &str, b: &str) -> bool {
    let a_segments: Vec<&str> = a.split('/').collect();
    let b_segments: Vec<&str> = b.split('/').collect();
    if a_segments.len() != b_segments.len() {
        return false;
    }
    a_segments.iter().zip(&b_segments).all(|(sa, sb)| {
        let a_param = sa.starts_with(':');
        let b_param = sb.starts_with(':');
        (a_param && b_param) || (!a_param && !b_param && sa == sb)
    })
}

fn check_children(parent: &RouteDescriptor, issues: &mut Vec<LintIssue>) {
    let prefix = if parent.path == "/" {
        "/".to_string()
    } else {
        format!("{}/", parent.path)
    };
    for child in &parent.children {
        if !child.path.starts_with(&prefix) {
            issues.push(
                LintIssue::new(
                    &child.path,
                    LintSeverity::Warning,
                    "detached_child",
                    format!("child path does not extend its parent {}", parent.path),
                )
                .with_suggestion("declare the route at the top level or fix the path"),
            );
        }
    }
}
