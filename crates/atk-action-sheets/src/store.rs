//! Minimal observable value container

use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Inner<T> {
    state: T,
    // Keyed by registration sequence so iteration follows registration order
    listeners: BTreeMap<u64, Listener<T>>,
}

/// Observable state cell.
///
/// Every update replaces the value and then synchronously notifies all
/// current subscribers in registration order. Listeners run outside the
/// internal lock, so they may read or update the store themselves. There is
/// no atomic read-modify-write across concurrent callers.
pub struct Store<T> {
    inner: Arc<Mutex<Inner<T>>>,
    next_id: Arc<AtomicU64>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            next_id: self.next_id.clone(),
        }
    }
}

impl<T: Clone + Send + 'static> Store<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: initial,
                listeners: BTreeMap::new(),
            })),
            next_id: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> T {
        self.inner.lock().state.clone()
    }

    /// Replace the state and notify subscribers
    pub fn set_state(&self, state: T) {
        self.update(|_| state);
    }

    /// Derive the next state from the current one and notify subscribers
    pub fn update(&self, updater: impl FnOnce(&T) -> T) {
        let (state, listeners) = {
            let mut inner = self.inner.lock();
            let next = updater(&inner.state);
            inner.state = next;
            let listeners: Vec<Listener<T>> = inner.listeners.values().cloned().collect();
            (inner.state.clone(), listeners)
        };

        for listener in listeners {
            listener(&state);
        }
    }

    /// Register a listener called after every update
    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.lock().listeners.insert(id, Arc::new(listener));

        let weak: Weak<Mutex<Inner<T>>> = Arc::downgrade(&self.inner);
        Subscription {
            remove: Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.lock().listeners.remove(&id);
                }
            }),
            active: AtomicBool::new(true),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().listeners.len()
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("Store")
            .field("state", &inner.state)
            .field("subscribers", &inner.listeners.len())
            .finish()
    }
}

/// Handle returned by [`Store::subscribe`].
///
/// Dropping the handle keeps the listener registered; call
/// [`Subscription::unsubscribe`] to remove it.
pub struct Subscription {
    remove: Box<dyn Fn() + Send + Sync>,
    active: AtomicBool,
}

impl Subscription {
    /// Remove exactly this listener. Calling it again is a no-op.
    pub fn unsubscribe(&self) {
        if self.active.swap(false, Ordering::AcqRel) {
            (self.remove)();
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
