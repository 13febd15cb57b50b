//! Event hub — four independent typed channels.
//!
//! The hub is an ordinary value constructed and owned by the pipeline and
//! lent by reference to producers and consumers. There is no global hub.

use std::sync::Arc;

use netlens_io::{Anomaly, PipelineStatus, ThreatDetection, VisualSnapshot};

use crate::channel::{Channel, Subscription};
use crate::events::{ChannelKind, HubEvent};
use crate::sinks::{EventSink, TracingSink};

/// Typed publish/subscribe fan-out.
///
/// Only the visual-state channel replays: a late subscriber immediately
/// receives the most recent snapshot (current state, not history). The
/// event channels deliver only what is published after subscription.
/// Order is total within a channel and unspecified across channels.
pub struct EventHub {
    visual: Channel<Arc<VisualSnapshot>>,
    anomalies: Channel<Anomaly>,
    threats: Channel<ThreatDetection>,
    status: Channel<PipelineStatus>,
}

impl EventHub {
    /// Creates a hub with no subscribers.
    pub fn new() -> Self {
        Self {
            visual: Channel::with_replay(ChannelKind::VisualState.name()),
            anomalies: Channel::new(ChannelKind::Anomalies.name()),
            threats: Channel::new(ChannelKind::Threats.name()),
            status: Channel::new(ChannelKind::Status.name()),
        }
    }

    /// Routes an event to its channel.
    pub fn publish(&self, event: HubEvent) {
        match event {
            HubEvent::VisualState(snapshot) => self.visual.publish(snapshot),
            HubEvent::Anomaly(anomaly) => self.anomalies.publish(anomaly),
            HubEvent::Threat(threat) => self.threats.publish(threat),
            HubEvent::Status(status) => self.status.publish(status),
        }
    }

    pub fn visual(&self) -> &Channel<Arc<VisualSnapshot>> {
        &self.visual
    }

    pub fn anomalies(&self) -> &Channel<Anomaly> {
        &self.anomalies
    }

    pub fn threats(&self) -> &Channel<ThreatDetection> {
        &self.threats
    }

    pub fn status(&self) -> &Channel<PipelineStatus> {
        &self.status
    }

    /// The most recently published snapshot, if any.
    pub fn current_visual_state(&self) -> Option<Arc<VisualSnapshot>> {
        self.visual.latest()
    }

    /// Number of live subscriptions on a channel.
    pub fn subscriber_count(&self, channel: ChannelKind) -> usize {
        match channel {
            ChannelKind::VisualState => self.visual.subscriber_count(),
            ChannelKind::Anomalies => self.anomalies.subscriber_count(),
            ChannelKind::Threats => self.threats.subscriber_count(),
            ChannelKind::Status => self.status.subscriber_count(),
        }
    }

    /// Attaches a [`TracingSink`] to every channel.
    pub fn attach_tracing(&self) -> Vec<Subscription> {
        vec![
            attach(&self.visual, Arc::new(TracingSink::new(self.visual.name()))),
            attach(&self.anomalies, Arc::new(TracingSink::new(self.anomalies.name()))),
            attach(&self.threats, Arc::new(TracingSink::new(self.threats.name()))),
            attach(&self.status, Arc::new(TracingSink::new(self.status.name()))),
        ]
    }
}

impl Default for EventHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Subscribes a sink to a channel.
pub fn attach<T>(channel: &Channel<T>, sink: Arc<dyn EventSink<T>>) -> Subscription
where
    T: Clone + Send + 'static,
{
    tracing::debug!(channel = channel.name(), sink = sink.name(), "attach_sink");
    channel.subscribe(move |value| sink.handle(value))
}
