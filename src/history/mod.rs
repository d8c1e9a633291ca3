//! # History Module
//!
//! The host navigation environment abstraction. A [`History`]
//! implementation supplies the current location, push/replace operations,
//! back/forward primitives, and a change notification for externally
//! triggered navigation (address-bar edits, back/forward buttons).
//!
//! ## Semantics
//!
//! Matching browser history behavior, `push` and `replace` do **not** fire
//! the change listeners; only `back`, `forward`, and external changes do.
//! The router therefore updates its state directly after a `navigate` call
//! and relies on the listener only for externally driven transitions.
//!
//! ## Subscriptions
//!
//! [`History::subscribe`] returns a [`Subscription`]: an explicit handle
//! that unregisters the listener when dropped or when
//! [`Subscription::unsubscribe`] is called. Each router instance holds its
//! own subscription, so multiple routers over one history never share a
//! listener.
//!
//! [`MemoryHistory`] is the in-memory implementation used by tests and
//! non-browser shells: an entry stack plus a cursor, with back/forward
//! moving the cursor and notifying listeners.

mod memory;
mod subscription;

pub use memory::MemoryHistory;
pub use subscription::{Listeners, Subscription};

/// A concrete location in the host environment: absolute path plus the raw
/// query string (without the leading `?`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    /// Absolute path, e.g. `/jobs/42`.
    pub path: String,
    /// Raw query string, e.g. `page=2&sort=title`. Empty when absent.
    pub query: String,
}

impl Location {
    /// Build a location from a path and raw query string.
    pub fn new(path: impl Into<String>, query: impl Into<String>) -> Self {
        Location {
            path: path.into(),
            query: query.into(),
        }
    }
}

/// Listener invoked on externally triggered navigation.
///
/// Shared rather than boxed so the dispatch loop can snapshot the listener
/// set before calling out, keeping re-entrant subscribe/unsubscribe safe.
pub type HistoryListener = std::rc::Rc<dyn Fn(&Location)>;

/// The host navigation environment.
///
/// All operations are synchronous; this core is single-threaded and
/// event-driven, so implementations never block or spawn work.
pub trait History {
    /// The current location.
    fn location(&self) -> Location;

    /// Push a new entry for `path`, discarding any forward entries.
    /// Does not notify listeners. The new entry carries no query component;
    /// navigation calls are path-only in this design.
    fn push(&mut self, path: &str);

    /// Replace the current entry with `path`. Does not notify listeners.
    fn replace(&mut self, path: &str);

    /// Move one entry back, notifying listeners. A no-op with no event when
    /// there is no previous entry.
    fn back(&mut self);

    /// Move one entry forward, notifying listeners. A no-op with no event
    /// when there is no forward entry.
    fn forward(&mut self);

    /// Register a listener for externally triggered navigation. The
    /// listener stays registered until the returned [`Subscription`] is
    /// dropped or unsubscribed.
    fn subscribe(&mut self, listener: HistoryListener) -> Subscription;
}
