//! # Route Catalogue Module
//!
//! The catalogue is the immutable, statically declared hierarchy of route
//! descriptors the rest of the crate resolves against. Applications build
//! it once at startup, either in code via [`RouteCatalog::new`] or from a
//! YAML/JSON file via [`load_catalog`], and the router treats it as
//! read-only for the life of the session.
//!
//! ## Lookups
//!
//! All lookups traverse the tree depth-first in declaration order, parents
//! before children:
//!
//! - [`RouteCatalog::find_by_name`] - first descriptor with a matching name
//! - [`RouteCatalog::find_by_path`] - exact string match only; parameterized
//!   matching lives in [`crate::router::matcher`]
//! - [`RouteCatalog::top_level_routes`] - concrete top-level entries for
//!   static navigation menus (parameterized paths filtered out)

mod load;
mod tree;
mod types;

pub use load::load_catalog;
pub use tree::RouteCatalog;
pub use types::{RouteDescriptor, RouteMetaBag};
