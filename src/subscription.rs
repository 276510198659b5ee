//! Subscriber registration and fan-out shared by the state stores.
//!
//! Fan-out is synchronous and runs in registration order. Each callback is
//! invoked in isolation: a panicking subscriber is caught and logged so the
//! remaining subscribers still receive the notification.

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::warn;

struct Entry<T> {
    id: u64,
    callback: Box<dyn Fn(T) + Send + Sync>,
}

/// Ordered set of subscriber callbacks.
pub(crate) struct SubscriberSet<T> {
    entries: Mutex<Vec<Arc<Entry<T>>>>,
    next_id: AtomicU64,
}

impl<T: Copy + 'static> SubscriberSet<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Register `callback` and return the handle that deregisters it.
    pub(crate) fn add(self: Arc<Self>, callback: Box<dyn Fn(T) + Send + Sync>) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.entries
            .lock()
            .unwrap()
            .push(Arc::new(Entry { id, callback }));

        // The handle holds a weak reference so an outliving Subscription
        // does not keep a dropped store alive.
        let set = Arc::downgrade(&self);
        Subscription {
            canceller: Box::new(move || {
                if let Some(set) = set.upgrade() {
                    set.entries.lock().unwrap().retain(|entry| entry.id != id);
                }
            }),
        }
    }

    /// Invoke every registered callback with `value`, in registration order.
    pub(crate) fn notify(&self, value: T) {
        // Snapshot outside the invocation loop so a callback may subscribe
        // or unsubscribe without deadlocking.
        let snapshot: Vec<Arc<Entry<T>>> = self.entries.lock().unwrap().clone();

        for entry in snapshot {
            if catch_unwind(AssertUnwindSafe(|| (entry.callback)(value))).is_err() {
                warn!("Subscriber {} panicked during notification", entry.id);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

/// Handle returned by `subscribe`.
///
/// Deregisters its callback on [`cancel`](Subscription::cancel) or when
/// dropped, so tying the handle to a view's lifetime is enough to avoid
/// notifying a torn-down observer. `cancel` is idempotent.
pub struct Subscription {
    canceller: Box<dyn Fn() + Send + Sync>,
}

impl Subscription {
    /// Deregister the callback. Calling this more than once is a no-op.
    pub fn cancel(&self) {
        (self.canceller)();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Subscription")
    }
}
