use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// Callback type for state change notifications.
pub type ChangeHandler<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Unique handle for a subscription, returned by [`StateCell::subscribe`].
///
/// Use this to unsubscribe later via [`StateCell::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A single observable state value.
///
/// - `set(value)` replaces the value and notifies all subscribers.
/// - `get()` reads a snapshot (clone of the current value).
/// - `update(f)` mutates under the write lock, then notifies.
/// - `set_if(f)` mutates conditionally; skipping the mutation skips
///   the notification, which makes idempotent transitions (double
///   `clear()`) notify at most once.
///
/// Readers always observe either the old or the new value, never a
/// partially applied one. Handlers run synchronously on the mutating
/// thread, after the write lock is released, so a handler may re-read
/// the cell and will see the value it was notified about (or newer).
pub struct StateCell<T> {
    value: RwLock<T>,
    handlers: RwLock<Vec<HandlerEntry<T>>>,
    /// Monotonic counter for subscription IDs.
    next_id: AtomicU64,
}

struct HandlerEntry<T> {
    id: SubscriptionId,
    handler: ChangeHandler<T>,
}

impl<T: Clone + Send + Sync> StateCell<T> {
    /// Create a new cell holding `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            value: RwLock::new(initial),
            handlers: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Get a snapshot of the current value.
    pub fn get(&self) -> T {
        self.value.read().unwrap().clone()
    }

    /// Replace the value and notify all subscribers.
    pub fn set(&self, value: T) {
        self.update(|v| *v = value);
    }

    /// Mutate the value under the write lock, then notify subscribers
    /// with a snapshot of the result.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        let snapshot = {
            let mut guard = self.value.write().unwrap();
            f(&mut guard);
            guard.clone()
        };
        self.notify(&snapshot);
    }

    /// Conditionally mutate the value. The closure returns whether it
    /// applied a change; subscribers are notified only when it did.
    ///
    /// Returns the closure's answer.
    pub fn set_if<F>(&self, f: F) -> bool
    where
        F: FnOnce(&mut T) -> bool,
    {
        let snapshot = {
            let mut guard = self.value.write().unwrap();
            if !f(&mut guard) {
                return false;
            }
            guard.clone()
        };
        self.notify(&snapshot);
        true
    }

    /// Subscribe to value changes.
    ///
    /// The handler is called synchronously whenever the value is
    /// replaced or mutated. Returns a [`SubscriptionId`] that can be
    /// used to unsubscribe.
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.handlers.write().unwrap().push(HandlerEntry {
            id,
            handler: Arc::new(handler),
        });
        id
    }

    /// Unsubscribe a handler by its subscription ID. Unknown IDs are a
    /// no-op.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.handlers.write().unwrap().retain(|e| e.id != id);
    }

    fn notify(&self, value: &T) {
        // Snapshot the handler list so a handler may subscribe or
        // unsubscribe without deadlocking.
        let entries: Vec<ChangeHandler<T>> = self
            .handlers
            .read()
            .unwrap()
            .iter()
            .map(|e| e.handler.clone())
            .collect();
        for handler in entries {
            handler(value);
        }
    }
}

impl<T: Clone + Send + Sync + Default> Default for StateCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
