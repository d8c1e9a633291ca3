use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::{HistoryListener, Location};

struct Registry {
    next_id: u64,
    listeners: Vec<(u64, HistoryListener)>,
}

/// Listener registry shared by [`History`](super::History) implementations.
///
/// Keeps registration order for dispatch and hands out [`Subscription`]
/// handles that unregister on drop. Dispatch snapshots the listener set
/// first, so a listener may subscribe or unsubscribe re-entrantly without
/// invalidating the iteration.
#[derive(Clone)]
pub struct Listeners {
    inner: Rc<RefCell<Registry>>,
}

impl Listeners {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Listeners {
            inner: Rc::new(RefCell::new(Registry {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Register a listener and return its unsubscribe handle.
    pub fn subscribe(&self, listener: HistoryListener) -> Subscription {
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, listener));
        Subscription {
            registry: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Invoke every registered listener with the new location, in
    /// registration order.
    pub fn notify(&self, location: &Location) {
        let snapshot: Vec<HistoryListener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in snapshot {
            listener(location);
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Whether no listeners are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().listeners.is_empty()
    }
}

impl Default for Listeners {
    fn default() -> Self {
        Listeners::new()
    }
}

/// Handle for a registered history listener.
///
/// The listener stops receiving events when this handle is dropped or
/// [`Subscription::unsubscribe`] is called, guaranteeing release when the
/// owning scope ends.
pub struct Subscription {
    registry: Weak<RefCell<Registry>>,
    id: u64,
}

impl Subscription {
    /// Unregister the listener now instead of waiting for drop.
    pub fn unsubscribe(self) {
        // Drop does the work.
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_notify_reaches_listeners_in_order() {
        let listeners = Listeners::new();
        let calls = Rc::new(RefCell::new(Vec::new()));

        let c1 = Rc::clone(&calls);
        let _s1 = listeners.subscribe(Rc::new(move |loc: &Location| {
            c1.borrow_mut().push(format!("first:{}", loc.path));
        }));
        let c2 = Rc::clone(&calls);
        let _s2 = listeners.subscribe(Rc::new(move |loc: &Location| {
            c2.borrow_mut().push(format!("second:{}", loc.path));
        }));

        listeners.notify(&Location::new("/jobs", ""));
        assert_eq!(*calls.borrow(), vec!["first:/jobs", "second:/jobs"]);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let listeners = Listeners::new();
        let hits = Rc::new(Cell::new(0u32));

        let h = Rc::clone(&hits);
        let subscription = listeners.subscribe(Rc::new(move |_loc: &Location| {
            h.set(h.get() + 1);
        }));
        assert_eq!(listeners.len(), 1);

        listeners.notify(&Location::new("/", ""));
        assert_eq!(hits.get(), 1);

        drop(subscription);
        assert!(listeners.is_empty());
        listeners.notify(&Location::new("/", ""));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_explicit_unsubscribe() {
        let listeners = Listeners::new();
        let subscription = listeners.subscribe(Rc::new(|_loc: &Location| {}));
        subscription.unsubscribe();
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_subscription_outliving_registry_is_harmless() {
        let subscription = {
            let listeners = Listeners::new();
            listeners.subscribe(Rc::new(|_loc: &Location| {}))
        };
        drop(subscription);
    }
}
