//! # Router Module
//!
//! Path matching and the stateful navigation controller.
//!
//! ## Two resolution strategies
//!
//! The router deliberately keeps exact-match lookup and parameterized
//! matching apart:
//!
//! 1. **Exact match** drives [`RouterState`]: on every navigation the
//!    current path is compared literally against declared paths
//!    ([`crate::catalog::RouteCatalog::find_by_path`]), and a miss simply
//!    leaves `current_route` absent.
//! 2. **Parameterized match** is an explicit operation
//!    ([`Router::resolve`] over a [`PatternTable`]): patterns are compiled
//!    once and tried in declaration order, first-match-wins, binding
//!    `:name` segments to percent-decoded values.
//!
//! ## State machine
//!
//! The router has exactly two observable conditions: idle at a path, and
//! the synchronous transition inside `navigate`. There is no loading
//! state at this layer; asynchronous work triggered by a path change
//! belongs to downstream observers.

mod core;
pub mod matcher;

pub use core::{Router, RouterState};
pub use matcher::{pattern_matches, route_params, CompiledPattern, PatternTable};
