//! Shared widget state
//!
//! Widgets keep their mutable state behind a [`Shared`] cell and hand
//! clones of it to the handler closures they register with the
//! dispatcher. All access happens on the host's UI thread; the lock only
//! guards field access and is never held across a host callback.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// A cheaply cloneable cell holding one widget's mutable state.
pub struct Shared<T> {
    inner: Arc<Mutex<T>>,
}

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(value)),
        }
    }

    /// Replace the contained value
    pub fn set(&self, value: T) {
        *self.inner.lock().unwrap() = value;
    }

    /// Read through a closure
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.lock().unwrap())
    }

    /// Mutate through a closure, returning its result
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.lock().unwrap())
    }
}

impl<T: Clone> Shared<T> {
    /// Clone the contained value out
    pub fn get(&self) -> T {
        self.inner.lock().unwrap().clone()
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

/// Allocate a process-wide unique widget id, used as the event target
/// address when the host routes toolkit events.
pub fn next_widget_id() -> u64 {
    NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed)
}
