//! # Waypoint
//!
//! **Waypoint** is a client-side navigation core for application shells: a
//! statically declared route tree, exact-match and parameterized path
//! resolution, a query-string codec, a history-synchronized router state
//! machine, and breadcrumb derivation.
//!
//! ## Overview
//!
//! Waypoint does not render anything and does not fetch anything. The
//! presentation layer reads [`RouterState`](router::RouterState) and the
//! breadcrumb trail to decide which view to mount; the data layer observes
//! route changes and manages its own request lifecycle. Waypoint owns only
//! the mapping between the host environment's current location and the
//! declared route catalogue.
//!
//! ## Architecture
//!
//! The crate is organized into the following modules:
//!
//! - **[`catalog`]** - The immutable route catalogue: descriptors, lookups,
//!   and loading a catalogue from a YAML or JSON file
//! - **[`router`]** - Path matching, parameter extraction, and the stateful
//!   [`Router`](router::Router) synchronized with the host history
//! - **[`history`]** - The host navigation environment abstraction, with an
//!   in-memory implementation for tests and non-browser shells
//! - **[`query`]** - Query-string parsing and building over an
//!   insertion-ordered parameter map
//! - **[`breadcrumbs`]** - Breadcrumb trail derivation from the current path
//! - **[`linter`]** - Catalogue validation (duplicate paths, ambiguous
//!   sibling patterns)
//! - **[`paths`]** - Path normalization and joining utilities
//!
//! ## Example
//!
//! ```rust
//! use waypoint::{MemoryHistory, RouteCatalog, RouteDescriptor, Router};
//!
//! let catalog = RouteCatalog::new(vec![
//!     RouteDescriptor::new("/", "dashboard", "Dashboard"),
//!     RouteDescriptor::new("/jobs", "jobs", "Jobs"),
//! ]);
//!
//! let mut router = Router::new(catalog, MemoryHistory::new());
//! router.navigate("/jobs", false);
//!
//! assert_eq!(router.current_path(), "/jobs");
//! assert_eq!(router.current_route().map(|r| r.title), Some("Jobs".to_string()));
//! ```
//!
//! ## Concurrency Model
//!
//! Waypoint is single-threaded and event-driven: every operation runs
//! synchronously on the caller's thread, and the router never exposes a
//! state whose path differs from the host location. External back/forward
//! navigation is delivered through a [`Subscription`](history::Subscription)
//! registered at router construction and released when the router is
//! dropped.

pub mod breadcrumbs;
pub mod catalog;
pub mod history;
pub mod linter;
pub mod paths;
pub mod query;
pub mod router;

pub use breadcrumbs::Breadcrumb;
pub use catalog::{load_catalog, RouteCatalog, RouteDescriptor, RouteMetaBag};
pub use history::{History, Location, MemoryHistory, Subscription};
pub use query::{build_query, parse_query, ParamMap};
pub use router::{Router, RouterState};
