//! Key routing with scoped subscriptions.
//!
//! Hosts feed every raw key event into a [`KeyRouter`]; handlers are
//! consulted in registration order until one claims the event. A handler
//! stays registered exactly as long as its [`KeySubscription`] guard is
//! alive, so listeners cannot leak across palette mounts.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use crate::keys::{KeyEvent, KeyOutcome};

/// Generate unique subscription ids.
fn next_subscription_id() -> u64 {
    static COUNTER: AtomicU64 = AtomicU64::new(1);
    COUNTER.fetch_add(1, Ordering::Relaxed)
}

type Handler = Arc<dyn Fn(&KeyEvent) -> KeyOutcome + Send + Sync>;

#[derive(Default)]
struct RouterInner {
    /// (id, handler) pairs in registration order.
    handlers: RwLock<Vec<(u64, Handler)>>,
}

/// Ordered key-event dispatcher.
#[derive(Clone, Default)]
pub struct KeyRouter {
    inner: Arc<RouterInner>,
}

impl KeyRouter {
    /// Create an empty router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. It is dropped from the dispatch chain when the
    /// returned guard is dropped.
    pub fn subscribe(
        &self,
        handler: impl Fn(&KeyEvent) -> KeyOutcome + Send + Sync + 'static,
    ) -> KeySubscription {
        let id = next_subscription_id();
        self.inner.handlers.write().push((id, Arc::new(handler)));
        KeySubscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Dispatch an event to the handlers in registration order.
    ///
    /// Stops at the first handler that returns `Handled`; returns
    /// `Ignored` if none claim the event.
    pub fn dispatch(&self, event: &KeyEvent) -> KeyOutcome {
        // Snapshot the chain so handlers may (un)subscribe reentrantly.
        let handlers: Vec<Handler> = self
            .inner
            .handlers
            .read()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();

        for handler in handlers {
            if handler(event) == KeyOutcome::Handled {
                return KeyOutcome::Handled;
            }
        }
        KeyOutcome::Ignored
    }

    /// Number of live handlers.
    pub fn handler_count(&self) -> usize {
        self.inner.handlers.read().len()
    }
}

/// Guard for a registered handler; unregisters on drop.
pub struct KeySubscription {
    id: u64,
    inner: Weak<RouterInner>,
}

impl Drop for KeySubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.handlers.write().retain(|(id, _)| *id != self.id);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
