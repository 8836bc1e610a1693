//! Debounced "re-measure" broadcast.
//!
//! Sidebar transitions, terminal resizes and content-area changes all call
//! [`ResizeCoordinator::on_trigger`]. A burst of triggers collapses into one
//! signal fired `debounce` after the last trigger. Signals are spaced at least
//! `rate_floor` apart; a signal that comes due too early is pushed back, not
//! dropped.
//!
//! The coordinator owns no timer. The event loop sleeps until
//! [`ResizeCoordinator::next_deadline`] and then calls
//! [`ResizeCoordinator::poll`].

use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex, Weak};
use std::time::{Duration, Instant};

use crate::adapters::SystemClock;
use crate::startup::config::{DEFAULT_RESIZE_DEBOUNCE, DEFAULT_RESIZE_RATE_FLOOR};
use crate::traits::{Clock, Resizable};

/// What caused a resize trigger. Only used for logging; all sources coalesce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeSource {
    Sidebar,
    Window,
    Container,
}

type Callback = Box<dyn FnMut() + Send>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    subscribers: BTreeMap<u64, Callback>,
    dispatching: bool,
    // ids dropped while their callback was checked out for a broadcast
    cancelled: HashSet<u64>,
}

impl Registry {
    fn remove(&mut self, id: u64) {
        if self.subscribers.remove(&id).is_none() && self.dispatching {
            self.cancelled.insert(id);
        }
    }
}

/// Handle returned by [`ResizeCoordinator::subscribe`].
///
/// Dropping it unsubscribes. It holds only a weak reference, so it may outlive
/// the coordinator.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    /// Stop receiving signals.
    pub fn unsubscribe(self) {}

    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .and_then(|registry| {
                registry
                    .lock()
                    .ok()
                    .map(|r| {
                        r.subscribers.contains_key(&self.id)
                            || (r.dispatching && !r.cancelled.contains(&self.id))
                    })
            })
            .unwrap_or(false)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if let Ok(mut registry) = registry.lock() {
                registry.remove(self.id);
            }
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

pub struct ResizeCoordinator<C: Clock = SystemClock> {
    clock: C,
    debounce: Duration,
    rate_floor: Duration,
    /// Debounce deadline of the pending signal, if any.
    pending: Option<Instant>,
    last_emit: Option<Instant>,
    emitted: u64,
    registry: Arc<Mutex<Registry>>,
}

impl ResizeCoordinator<SystemClock> {
    pub fn new(debounce: Duration, rate_floor: Duration) -> Self {
        Self::with_clock(SystemClock, debounce, rate_floor)
    }
}

impl Default for ResizeCoordinator<SystemClock> {
    fn default() -> Self {
        Self::new(DEFAULT_RESIZE_DEBOUNCE, DEFAULT_RESIZE_RATE_FLOOR)
    }
}

impl<C: Clock> ResizeCoordinator<C> {
    pub fn with_clock(clock: C, debounce: Duration, rate_floor: Duration) -> Self {
        Self {
            clock,
            debounce,
            rate_floor,
            pending: None,
            last_emit: None,
            emitted: 0,
            registry: Arc::new(Mutex::new(Registry::default())),
        }
    }

    /// Register a callback for every future signal.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: FnMut() + Send + 'static,
    {
        let mut registry = self.lock_registry();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.subscribers.insert(id, Box::new(callback));
        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Call [`Resizable::resize`] on `target` for every signal.
    pub fn subscribe_resizable<R>(&self, target: Arc<Mutex<R>>) -> Subscription
    where
        R: Resizable + 'static,
    {
        self.subscribe(move || {
            if let Ok(mut target) = target.lock() {
                target.resize();
            }
        })
    }

    /// Record a trigger, restarting the debounce window.
    pub fn on_trigger(&mut self, source: ResizeSource) {
        let deadline = self.clock.now() + self.debounce;
        tracing::trace!(?source, restarted = self.pending.is_some(), "Resize trigger");
        self.pending = Some(deadline);
    }

    /// When the pending signal is due, after the rate floor is applied.
    pub fn next_deadline(&self) -> Option<Instant> {
        let debounced = self.pending?;
        Some(match self.last_emit {
            Some(last) => debounced.max(last + self.rate_floor),
            None => debounced,
        })
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Fire the pending signal if it is due. Returns `true` if it fired.
    pub fn poll(&mut self) -> bool {
        let Some(deadline) = self.next_deadline() else {
            return false;
        };
        let now = self.clock.now();
        if now < deadline {
            return false;
        }

        self.pending = None;
        self.last_emit = Some(now);
        self.emitted += 1;
        let delivered = self.broadcast();
        tracing::debug!(emission = self.emitted, delivered, "Resize signal");
        true
    }

    /// Total signals fired so far.
    pub fn emitted_count(&self) -> u64 {
        self.emitted
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock_registry().subscribers.len()
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn rate_floor(&self) -> Duration {
        self.rate_floor
    }

    // Callbacks run with the lock released so they may drop subscriptions.
    fn broadcast(&self) -> usize {
        let mut batch = {
            let mut registry = self.lock_registry();
            registry.dispatching = true;
            std::mem::take(&mut registry.subscribers)
        };

        let mut delivered = 0;
        for (id, callback) in batch.iter_mut() {
            if self.lock_registry().cancelled.contains(id) {
                continue;
            }
            callback();
            delivered += 1;
        }

        let mut registry = self.lock_registry();
        for (id, callback) in batch {
            if !registry.cancelled.remove(&id) {
                registry.subscribers.insert(id, callback);
            }
        }
        registry.cancelled.clear();
        registry.dispatching = false;
        delivered
    }

    fn lock_registry(&self) -> std::sync::MutexGuard<'_, Registry> {
        // recover from a subscriber that panicked mid-broadcast
        self.registry
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
