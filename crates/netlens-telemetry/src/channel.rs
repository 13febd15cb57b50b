//! Single typed channel with cancellable subscriptions.
//!
//! Delivery is synchronous, in registration order, on the publisher's
//! thread. A publish issued from inside a subscriber callback is queued
//! and delivered after the current value has reached every subscriber, so
//! each subscriber observes the channel's values in publication order.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

type Callback<T> = dyn Fn(&T) + Send + Sync;

struct Subscriber<T> {
    id: u64,
    active: AtomicBool,
    callback: Box<Callback<T>>,
}

impl<T> Subscriber<T> {
    fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}

struct ChannelState<T> {
    next_id: u64,
    subscribers: Vec<Arc<Subscriber<T>>>,
    /// Most recently delivered value (kept only for replaying channels).
    latest: Option<T>,
    pending: VecDeque<T>,
    dispatching: bool,
}

fn lock<S>(state: &Mutex<S>) -> MutexGuard<'_, S> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A typed fan-out channel.
pub struct Channel<T> {
    name: &'static str,
    replay_latest: bool,
    state: Arc<Mutex<ChannelState<T>>>,
}

impl<T: Clone + Send + 'static> Channel<T> {
    /// Creates a channel that delivers only values published after subscription.
    pub fn new(name: &'static str) -> Self {
        Self::build(name, false)
    }

    /// Creates a channel that hands its most recent value to every new
    /// subscriber immediately upon subscription.
    pub fn with_replay(name: &'static str) -> Self {
        Self::build(name, true)
    }

    fn build(name: &'static str, replay_latest: bool) -> Self {
        Self {
            name,
            replay_latest,
            state: Arc::new(Mutex::new(ChannelState {
                next_id: 0,
                subscribers: Vec::new(),
                latest: None,
                pending: VecDeque::new(),
                dispatching: false,
            })),
        }
    }

    /// Registers a callback. On replaying channels the callback is invoked
    /// with the latest value before this returns.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let (subscriber, replay) = {
            let mut state = lock(&self.state);
            let subscriber = Arc::new(Subscriber {
                id: state.next_id,
                active: AtomicBool::new(true),
                callback: Box::new(callback),
            });
            state.next_id += 1;
            state.subscribers.push(Arc::clone(&subscriber));
            let replay = if self.replay_latest {
                state.latest.clone()
            } else {
                None
            };
            (subscriber, replay)
        };

        tracing::trace!(channel = self.name, id = subscriber.id, "subscribe");

        if let Some(value) = replay {
            (subscriber.callback)(&value);
        }

        let handle: Arc<dyn Cancel> = Arc::new(SubscriberHandle {
            subscriber,
            state: Arc::downgrade(&self.state),
        });
        Subscription {
            handle: Some(handle),
        }
    }

    /// Publishes a value to every currently registered subscriber.
    pub fn publish(&self, value: T) {
        {
            let mut state = lock(&self.state);
            state.pending.push_back(value);
            if state.dispatching {
                // Reentrant publish: the outer dispatch loop delivers it.
                return;
            }
            state.dispatching = true;
        }

        let _guard = DispatchGuard { state: &*self.state };
        loop {
            let (value, subscribers) = {
                let mut state = lock(&self.state);
                let Some(value) = state.pending.pop_front() else {
                    state.dispatching = false;
                    return;
                };
                if self.replay_latest {
                    state.latest = Some(value.clone());
                }
                (value, state.subscribers.clone())
            };

            for subscriber in subscribers {
                // Re-checked per value so a cancel issued mid-delivery takes effect at once.
                if subscriber.is_active() {
                    (subscriber.callback)(&value);
                }
            }
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        lock(&self.state).subscribers.len()
    }

    /// The value a new subscriber would be replayed, if any.
    pub fn latest(&self) -> Option<T> {
        lock(&self.state).latest.clone()
    }

    /// Channel name used in logs.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Releases the dispatch flag if a subscriber panics mid-delivery.
struct DispatchGuard<'a, T> {
    state: &'a Mutex<ChannelState<T>>,
}

impl<T> Drop for DispatchGuard<'_, T> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            let mut state = lock(self.state);
            state.dispatching = false;
            state.pending.clear();
        }
    }
}

trait Cancel: Send + Sync {
    fn cancel(&self);
    fn is_active(&self) -> bool;
}

struct SubscriberHandle<T> {
    subscriber: Arc<Subscriber<T>>,
    state: Weak<Mutex<ChannelState<T>>>,
}

impl<T: Send + 'static> Cancel for SubscriberHandle<T> {
    fn cancel(&self) {
        if !self.subscriber.active.swap(false, Ordering::AcqRel) {
            return;
        }
        if let Some(state) = self.state.upgrade() {
            let id = self.subscriber.id;
            lock(&state).subscribers.retain(|s| s.id != id);
        }
    }

    fn is_active(&self) -> bool {
        self.subscriber.is_active()
    }
}

/// Handle returned by [`Channel::subscribe`].
///
/// Dropping the handle does not cancel the subscription; call
/// [`Subscription::cancel`]. Cancelling is idempotent.
pub struct Subscription {
    handle: Option<Arc<dyn Cancel>>,
}

impl Subscription {
    /// Deregisters the callback. No further values are delivered to it,
    /// including values of a publish already in progress.
    pub fn cancel(&self) {
        if let Some(handle) = &self.handle {
            handle.cancel();
        }
    }

    /// Returns false once cancelled.
    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| h.is_active())
    }

    /// A handle bound to nothing; cancelling it does nothing.
    pub fn detached() -> Self {
        Self { handle: None }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
