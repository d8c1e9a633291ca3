use serde::{Deserialize, Serialize};

/// Static declaration of a navigable path and its display metadata.
///
/// The `path` is a URL path pattern; segments prefixed with `:` are named
/// parameters (e.g. `/jobs/:id`). Descriptors nest through `children`,
/// which represent sub-routes declared under this path. Children are
/// informational for sub-navigation only: arriving at a child's path
/// resolves through the same flattened lookup as any other route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    /// URL path pattern, e.g. `/jobs` or `/jobs/:id`.
    pub path: String,
    /// Unique identifier within the tree, e.g. `jobs-detail`.
    pub name: String,
    /// Human-readable label, used for menus and breadcrumbs.
    pub title: String,
    /// Optional longer description for menus and headers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional key into the presentation layer's icon table. Opaque here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Sub-routes declared under this path, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteDescriptor>,
    /// Structured metadata bag, passed through unread by the router core.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<RouteMetaBag>,
}

impl RouteDescriptor {
    /// Create a descriptor with only the required fields set.
    pub fn new(path: impl Into<String>, name: impl Into<String>, title: impl Into<String>) -> Self {
        RouteDescriptor {
            path: path.into(),
            name: name.into(),
            title: title.into(),
            description: None,
            icon: None,
            children: Vec::new(),
            meta: None,
        }
    }

    /// Attach child routes, builder style.
    #[must_use]
    pub fn with_children(mut self, children: Vec<RouteDescriptor>) -> Self {
        self.children = children;
        self
    }

    /// Attach a metadata bag, builder style.
    #[must_use]
    pub fn with_meta(mut self, meta: RouteMetaBag) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Whether the path pattern contains a `:`-prefixed parameter segment.
    #[must_use]
    pub fn is_parameterized(&self) -> bool {
        self.path.split('/').any(|s| s.starts_with(':'))
    }
}

/// Opaque route metadata declared by the application.
///
/// The router carries this through without reading it; enforcement (auth,
/// layout selection) belongs to external collaborators. `requires_auth` in
/// particular is declared but unused by this core.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteMetaBag {
    /// Whether the route expects an authenticated session. Not enforced here.
    #[serde(default)]
    pub requires_auth: bool,
    /// Roles allowed to see the route. Not enforced here.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
    /// Layout hint for the presentation layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
}
