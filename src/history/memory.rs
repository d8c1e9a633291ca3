use tracing::debug;

use super::subscription::{Listeners, Subscription};
use super::{History, HistoryListener, Location};

/// In-memory history: an entry stack plus a cursor.
///
/// The host environment for tests and non-browser shells. `push` truncates
/// any forward entries (as a browser does after navigating from a
/// mid-stack position); `back`/`forward` move the cursor and notify
/// listeners, mirroring `popstate`.
pub struct MemoryHistory {
    entries: Vec<Location>,
    index: usize,
    listeners: Listeners,
}

impl MemoryHistory {
    /// A history positioned at the root path with no query.
    #[must_use]
    pub fn new() -> Self {
        MemoryHistory::with_initial("/", "")
    }

    /// A history positioned at the given path and raw query string, the way
    /// a session starts on a deep link.
    #[must_use]
    pub fn with_initial(path: &str, query: &str) -> Self {
        MemoryHistory {
            entries: vec![Location::new(path, query)],
            index: 0,
            listeners: Listeners::new(),
        }
    }

    /// Number of entries currently on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the stack has no entries. A history always holds at least
    /// its initial entry, so this only reports true for a corrupted stack.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Simulate an externally triggered location change (address-bar edit).
    ///
    /// Replaces the current entry and notifies listeners, unlike
    /// [`History::replace`] which is a programmatic, silent transition.
    pub fn set_external(&mut self, path: &str, query: &str) {
        self.entries[self.index] = Location::new(path, query);
        let location = self.entries[self.index].clone();
        debug!(path = %location.path, "External location change");
        self.listeners.notify(&location);
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        MemoryHistory::new()
    }
}

impl History for MemoryHistory {
    fn location(&self) -> Location {
        self.entries[self.index].clone()
    }

    fn push(&mut self, path: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(Location::new(path, ""));
        self.index = self.entries.len() - 1;
        debug!(path, depth = self.entries.len(), "History push");
    }

    fn replace(&mut self, path: &str) {
        self.entries[self.index] = Location::new(path, "");
        debug!(path, "History replace");
    }

    fn back(&mut self) {
        if self.index == 0 {
            debug!("History back ignored at stack bottom");
            return;
        }
        self.index -= 1;
        let location = self.entries[self.index].clone();
        debug!(path = %location.path, "History back");
        self.listeners.notify(&location);
    }

    fn forward(&mut self) {
        if self.index + 1 >= self.entries.len() {
            debug!("History forward ignored at stack top");
            return;
        }
        self.index += 1;
        let location = self.entries[self.index].clone();
        debug!(path = %location.path, "History forward");
        self.listeners.notify(&location);
    }

    fn subscribe(&mut self, listener: HistoryListener) -> Subscription {
        self.listeners.subscribe(listener)
    }
}
