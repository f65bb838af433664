//! Typed event channels between the shell and the UI runtime

use parking_lot::RwLock;
use std::sync::Arc;

type Subscriber<T> = Box<dyn Fn(&T) + Send + Sync>;

/// A named, typed signal crossing the runtime boundary.
///
/// Dispatch is synchronous and in registration order on the calling
/// thread; `send` runs every subscriber to completion before returning.
/// Subscribing to a port the other side never fires is a no-op. Handlers
/// must not subscribe to the port they are being invoked from.
pub struct Port<T> {
    subscribers: Arc<RwLock<Vec<Subscriber<T>>>>,
}

impl<T> Port<T> {
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Register a handler for every future `send` on this port
    pub fn subscribe<F>(&self, handler: F)
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.subscribers.write().push(Box::new(handler));
    }

    /// Fire the signal; fire-and-forget, always runs to completion
    pub fn send(&self, value: T) {
        for subscriber in self.subscribers.read().iter() {
            subscriber(&value);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }
}

impl<T> Clone for Port<T> {
    fn clone(&self) -> Self {
        Self {
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

impl<T> Default for Port<T> {
    fn default() -> Self {
        Self::new()
    }
}
