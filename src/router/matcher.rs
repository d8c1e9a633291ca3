//! Pattern matching and parameter extraction.
//!
//! Two layers live here. The pairwise layer ([`pattern_matches`],
//! [`route_params`]) compares one pattern against one concrete path:
//! segments are compared positionally, and a pattern segment starting with
//! `:` matches any non-empty path segment and binds it. The tree-wide
//! layer ([`PatternTable`]) compiles every declared pattern up front and
//! resolves a path by trying each in declaration order, first-match-wins.

use regex::Regex;
use tracing::{debug, warn};

use crate::catalog::{RouteCatalog, RouteDescriptor};
use crate::query::ParamMap;

/// Structural pairwise check: does `pattern` match `path`?
///
/// Requires the same number of `/`-delimited segments; static segments
/// must be equal, and a `:`-prefixed pattern segment matches any non-empty
/// path segment. Both sides are assumed pre-normalized (no duplicate
/// slashes).
#[must_use]
pub fn pattern_matches(pattern: &str, path: &str) -> bool {
    let pattern_segments: Vec<&str> = pattern.split('/').collect();
    let path_segments: Vec<&str> = path.split('/').collect();
    if pattern_segments.len() != path_segments.len() {
        return false;
    }
    pattern_segments
        .iter()
        .zip(&path_segments)
        .all(|(pattern_segment, path_segment)| {
            if pattern_segment.starts_with(':') {
                !path_segment.is_empty()
            } else {
                pattern_segment == path_segment
            }
        })
}

/// Extract parameter bindings from a concrete path, positionally.
///
/// For every `:`-prefixed segment of `pattern`, binds the parameter name
/// to the percent-decoded path segment at the same position. A segment
/// that fails to decode is passed through raw; this is display-only data,
/// never trusted input, so extraction must not raise.
///
/// Pairwise only: callers verify structure first via [`pattern_matches`].
/// An empty map means the pattern declares no parameters.
///
/// # Example
///
/// ```rust
/// use waypoint::router::route_params;
///
/// let params = route_params("/jobs/:id/edit", "/jobs/42/edit");
/// assert_eq!(params.get("id"), Some("42"));
/// ```
#[must_use]
pub fn route_params(pattern: &str, path: &str) -> ParamMap {
    let mut params = ParamMap::new();
    for (pattern_segment, path_segment) in pattern.split('/').zip(path.split('/')) {
        if let Some(name) = pattern_segment.strip_prefix(':') {
            if !path_segment.is_empty() {
                params.insert(name, decode_segment(path_segment));
            }
        }
    }
    params
}

/// Percent-decode a path segment, falling back to the raw value when the
/// encoding is malformed.
fn decode_segment(raw: &str) -> String {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}

/// A route pattern compiled to an anchored regex plus its ordered
/// parameter names.
///
/// Static segments are regex-escaped; `:name` segments become a
/// `([^/]+)` group. Compilation happens once per declared pattern at table
/// construction, so resolution never re-parses pattern strings.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pattern: String,
    regex: Regex,
    param_names: Vec<String>,
}

impl CompiledPattern {
    /// Compile a pattern. The produced regex cannot fail to compile since
    /// static segments are escaped.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn compile(pattern: &str) -> Self {
        if pattern == "/" {
            return CompiledPattern {
                pattern: pattern.to_string(),
                regex: Regex::new(r"^/$").expect("root pattern regex"),
                param_names: Vec::new(),
            };
        }

        let mut expression = String::with_capacity(pattern.len() + 8);
        expression.push('^');
        let mut param_names = Vec::new();

        for segment in pattern.split('/').filter(|s| !s.is_empty()) {
            if let Some(name) = segment.strip_prefix(':') {
                expression.push_str("/([^/]+)");
                param_names.push(name.to_string());
            } else {
                expression.push('/');
                expression.push_str(&regex::escape(segment));
            }
        }
        expression.push('$');

        CompiledPattern {
            pattern: pattern.to_string(),
            regex: Regex::new(&expression).expect("escaped pattern regex"),
            param_names,
        }
    }

    /// The source pattern string.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Ordered parameter names declared by the pattern.
    #[must_use]
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    /// Whether the compiled pattern structurally matches `path`.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Match and extract parameter bindings in one step.
    #[must_use]
    pub fn captures(&self, path: &str) -> Option<ParamMap> {
        if !self.regex.is_match(path) {
            return None;
        }
        Some(route_params(&self.pattern, path))
    }
}

/// Compiled pattern table for tree-wide candidate search.
///
/// Built once from a catalogue: every descriptor's pattern is compiled and
/// stored in flattened declaration order. [`PatternTable::resolve`] then
/// tries each pattern against a concrete path and returns the first
/// structural match with its extracted parameters. First-match-wins, not
/// most-specific-wins; ambiguous sibling declarations are a catalogue
/// defect the linter reports.
#[derive(Debug, Clone)]
pub struct PatternTable {
    entries: Vec<(CompiledPattern, RouteDescriptor)>,
}

impl PatternTable {
    /// Compile every declared pattern in the catalogue.
    #[must_use]
    pub fn new(catalog: &RouteCatalog) -> Self {
        let entries: Vec<(CompiledPattern, RouteDescriptor)> = catalog
            .iter_flattened()
            .map(|route| (CompiledPattern::compile(&route.path), route.clone()))
            .collect();
        debug!(patterns = entries.len(), "Pattern table compiled");
        PatternTable { entries }
    }

    /// Resolve a concrete path to a declared route, extracting parameters.
    ///
    /// Returns the first pattern in declaration order that structurally
    /// matches, or `None` when no declared pattern matches. A miss is not
    /// an error; consumers render their fallback view.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<(&RouteDescriptor, ParamMap)> {
        for (pattern, route) in &self.entries {
            if let Some(params) = pattern.captures(path) {
                debug!(
                    path,
                    pattern = pattern.pattern(),
                    route = %route.name,
                    "Route pattern matched"
                );
                return Some((route, params));
            }
        }
        warn!(path, "No route pattern matched");
        None
    }

    /// Every compiled pattern string, in declaration order. Useful for
    /// diagnostics and menu pre-computation.
    #[must_use]
    pub fn pattern_strings(&self) -> Vec<&str> {
        self.entries.iter().map(|(p, _)| p.pattern()).collect()
    }
}
