use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info, warn};

use super::matcher::PatternTable;
use crate::breadcrumbs::{self, Breadcrumb};
use crate::catalog::{RouteCatalog, RouteDescriptor};
use crate::history::{History, Location, Subscription};
use crate::paths;
use crate::query::{parse_query, ParamMap};

/// The router's observable read model.
///
/// Created once when the router initializes from the host location and
/// mutated only through [`Router::navigate`] or an external back/forward
/// event; consumers read it through the router's accessors or a
/// [`Router::state`] snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouterState {
    /// Normalized absolute path: leading slash, no trailing slash except
    /// root.
    pub current_path: String,
    /// Exact-match resolution of `current_path` against the catalogue, or
    /// `None` when no declared path matches. A miss is a signal to render
    /// the fallback view, not an error.
    pub current_route: Option<RouteDescriptor>,
    /// Parameter bindings from the last parameterized match.
    ///
    /// The initial load and the history-change listener leave this empty
    /// even when the location matches a parameterized pattern, and
    /// `navigate` resets it; extraction is an explicit, separate step via
    /// [`Router::resolve`] or
    /// [`route_params`](crate::router::route_params). Downstream consumers
    /// rely on this exact behavior, so it is documented rather than
    /// changed.
    pub params: ParamMap,
    /// Decoded query parameters from the current location.
    pub query: ParamMap,
}

impl RouterState {
    fn from_location(catalog: &RouteCatalog, location: &Location) -> Self {
        let current_path = paths::normalize(&location.path);
        RouterState {
            current_route: catalog.find_by_path(&current_path).cloned(),
            current_path,
            params: ParamMap::new(),
            query: parse_query(&location.query),
        }
    }
}

/// Stateful navigation controller synchronized with the host history.
///
/// Owns the [`RouterState`] exclusively: all transitions go through
/// [`Router::navigate`], [`Router::go_back`]/[`Router::go_forward`], or
/// the history-change listener registered at construction. Every
/// transition is synchronous on the calling thread, so the exposed state
/// never disagrees with the host's actual location.
///
/// Construct one router per history instance. The listener subscription is
/// released when the router is dropped, so independent routers in tests do
/// not observe each other's events.
pub struct Router<H: History> {
    history: H,
    catalog: RouteCatalog,
    patterns: PatternTable,
    state: Rc<RefCell<RouterState>>,
    _subscription: Subscription,
}

impl<H: History> Router<H> {
    /// Initialize a router from the host environment's current location.
    ///
    /// Reads the current path and query, resolves the route by exact-match
    /// lookup, and subscribes to history changes. Parameter bindings stay
    /// empty on the initial load (see [`RouterState::params`]).
    #[must_use]
    pub fn new(catalog: RouteCatalog, mut history: H) -> Self {
        let initial = RouterState::from_location(&catalog, &history.location());
        info!(
            path = %initial.current_path,
            route = initial.current_route.as_ref().map(|r| r.name.as_str()),
            "Router initialized"
        );
        let state = Rc::new(RefCell::new(initial));

        let subscription = {
            let catalog = catalog.clone();
            let state = Rc::clone(&state);
            history.subscribe(Rc::new(move |location: &Location| {
                let next = RouterState::from_location(&catalog, location);
                debug!(
                    path = %next.current_path,
                    route = next.current_route.as_ref().map(|r| r.name.as_str()),
                    "History change applied"
                );
                *state.borrow_mut() = next;
            }))
        };

        let patterns = PatternTable::new(&catalog);
        Router {
            history,
            catalog,
            patterns,
            state,
            _subscription: subscription,
        }
    }

    /// Navigate to a path, pushing (default) or replacing the current
    /// history entry.
    ///
    /// The path is normalized first; navigation calls are path-only, so
    /// the query is re-read from the resulting location. Synchronous: on
    /// return, [`Router::current_path`] equals the normalized target.
    /// Unknown paths navigate normally with an absent `current_route`.
    ///
    /// External `http(s)` URLs are never routed: the call is ignored with
    /// a warning, and the presentation layer opens them through the host
    /// environment instead.
    pub fn navigate(&mut self, path: &str, replace: bool) {
        if paths::is_external(path) {
            warn!(path, "Refusing to route an external URL");
            return;
        }
        let path = paths::normalize(path);
        debug!(path = %path, replace, "Navigation attempt");
        if replace {
            self.history.replace(&path);
        } else {
            self.history.push(&path);
        }

        let location = self.history.location();
        let next = RouterState::from_location(&self.catalog, &location);
        match &next.current_route {
            Some(route) => info!(path = %next.current_path, route = %route.name, "Route resolved"),
            None => warn!(path = %next.current_path, "No route matched; fallback view"),
        }
        *self.state.borrow_mut() = next;
    }

    /// Step back in the host history. The state update arrives through the
    /// history-change listener; with no previous entry this is a silent
    /// no-op and the state is unchanged.
    pub fn go_back(&mut self) {
        self.history.back();
    }

    /// Step forward in the host history. Same delivery as [`Router::go_back`].
    pub fn go_forward(&mut self) {
        self.history.forward();
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> RouterState {
        self.state.borrow().clone()
    }

    /// The current normalized path.
    #[must_use]
    pub fn current_path(&self) -> String {
        self.state.borrow().current_path.clone()
    }

    /// The exact-match route for the current path, if any.
    #[must_use]
    pub fn current_route(&self) -> Option<RouteDescriptor> {
        self.state.borrow().current_route.clone()
    }

    /// Parameter bindings from the last parameterized match. See
    /// [`RouterState::params`] for when this is populated.
    #[must_use]
    pub fn params(&self) -> ParamMap {
        self.state.borrow().params.clone()
    }

    /// Decoded query parameters from the current location.
    #[must_use]
    pub fn query(&self) -> ParamMap {
        self.state.borrow().query.clone()
    }

    /// The catalogue this router resolves against.
    #[must_use]
    pub fn catalog(&self) -> &RouteCatalog {
        &self.catalog
    }

    /// Parameterized resolution of an arbitrary path against the compiled
    /// pattern table, first-match-wins in declaration order.
    ///
    /// This is the explicit extraction step consumers layer on top of the
    /// exact-match state: the data layer resolves `/jobs/42` here to learn
    /// it is `jobs-detail` with `id = 42`.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<(&RouteDescriptor, ParamMap)> {
        self.patterns.resolve(&paths::normalize(path))
    }

    /// Breadcrumb trail for the current path. See
    /// [`breadcrumbs::generate`] for the derivation rules.
    #[must_use]
    pub fn breadcrumbs(&self, show_home: bool) -> Vec<Breadcrumb> {
        breadcrumbs::generate(&self.catalog, &self.state.borrow().current_path, show_home)
    }
}
