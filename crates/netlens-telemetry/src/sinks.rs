//! Pluggable event sinks.
//!
//! Sinks are subscribers with a name: capture values in memory, log them
//! through `tracing`, or forward them elsewhere.

use std::fmt::Debug;
use std::sync::{Arc, Mutex, PoisonError};

/// Trait for channel consumers.
///
/// Implement this to create custom hub outputs.
pub trait EventSink<T>: Send + Sync {
    /// Process a single value.
    fn handle(&self, event: &T);

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// A sink that collects values in a shared `Vec` for testing and inspection.
///
/// Clones share the same storage, so a clone can be attached to a channel
/// while the original is kept for reading.
pub struct VecSink<T> {
    events: Arc<Mutex<Vec<T>>>,
}

impl<T: Clone> VecSink<T> {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Copies out every value received so far.
    pub fn events(&self) -> Vec<T> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of values received so far.
    pub fn len(&self) -> usize {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Clone for VecSink<T> {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
        }
    }
}

impl<T: Clone> Default for VecSink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send> EventSink<T> for VecSink<T> {
    fn handle(&self, event: &T) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// A sink that logs values using the `tracing` crate.
pub struct TracingSink {
    channel: &'static str,
}

impl TracingSink {
    /// Creates a tracing sink labelled with the channel it listens on.
    pub fn new(channel: &'static str) -> Self {
        Self { channel }
    }
}

impl<T: Debug> EventSink<T> for TracingSink {
    fn handle(&self, event: &T) {
        tracing::info!(channel = self.channel, event = ?event, "hub_event");
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
