use std::sync::Arc;

use tracing::info;

use super::types::RouteDescriptor;

/// Immutable, cheaply cloneable route catalogue.
///
/// Wraps the declared top-level descriptors in shared storage so the router
/// and its history listener can each hold the catalogue without copying the
/// tree. No runtime mutation: the catalogue built at startup is the
/// catalogue for the whole session.
#[derive(Debug, Clone)]
pub struct RouteCatalog {
    roots: Arc<[RouteDescriptor]>,
}

impl RouteCatalog {
    /// Build a catalogue from the declared top-level routes.
    #[must_use]
    pub fn new(routes: Vec<RouteDescriptor>) -> Self {
        let catalog = RouteCatalog {
            roots: routes.into(),
        };
        info!(
            routes_count = catalog.iter_flattened().count(),
            top_level = catalog.roots.len(),
            "Route catalogue loaded"
        );
        catalog
    }

    /// The declared top-level descriptors, in declaration order.
    #[must_use]
    pub fn roots(&self) -> &[RouteDescriptor] {
        &self.roots
    }

    /// Find a route by its unique name.
    ///
    /// Depth-first pre-order search across children; first match in
    /// declaration order.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&RouteDescriptor> {
        self.iter_flattened().find(|r| r.name == name)
    }

    /// Find a route by exact path match.
    ///
    /// No parameter resolution: `/jobs/42` does not match a declared
    /// `/jobs/:id` here. Parameterized matching is the concern of
    /// [`crate::router::matcher`].
    #[must_use]
    pub fn find_by_path(&self, path: &str) -> Option<&RouteDescriptor> {
        self.iter_flattened().find(|r| r.path == path)
    }

    /// Concrete top-level entries for static navigation menus.
    ///
    /// Filters out any top-level descriptor whose path carries a parameter
    /// marker, since those are not directly navigable from a menu.
    pub fn top_level_routes(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.roots.iter().filter(|r| !r.is_parameterized())
    }

    /// Depth-first pre-order walk over every descriptor in the tree,
    /// parents before children. This is the declaration order that
    /// first-match-wins resolution relies on.
    #[must_use]
    pub fn iter_flattened(&self) -> Flattened<'_> {
        Flattened {
            stack: vec![self.roots.iter()],
        }
    }
}

impl From<Vec<RouteDescriptor>> for RouteCatalog {
    fn from(routes: Vec<RouteDescriptor>) -> Self {
        RouteCatalog::new(routes)
    }
}

/// Iterator over a catalogue's flattened tree. See
/// [`RouteCatalog::iter_flattened`].
pub struct Flattened<'a> {
    stack: Vec<std::slice::Iter<'a, RouteDescriptor>>,
}

impl<'a> Iterator for Flattened<'a> {
    type Item = &'a RouteDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let iter = self.stack.last_mut()?;
            match iter.next() {
                Some(route) => {
                    if !route.children.is_empty() {
                        self.stack.push(route.children.iter());
                    }
                    return Some(route);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
