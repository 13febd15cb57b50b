//! Hub event types.
//!
//! Each variant of [`HubEvent`] targets exactly one channel of the hub.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use netlens_io::{Anomaly, PipelineStatus, ThreatDetection, VisualSnapshot};

/// The four independent channels of an [`EventHub`](crate::EventHub).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    VisualState,
    Anomalies,
    Threats,
    Status,
}

impl ChannelKind {
    pub const ALL: [Self; 4] = [Self::VisualState, Self::Anomalies, Self::Threats, Self::Status];

    /// Channel name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::VisualState => "visual_state",
            Self::Anomalies => "anomalies",
            Self::Threats => "threats",
            Self::Status => "status",
        }
    }
}

/// A value published on one of the hub's channels.
#[derive(Debug, Clone)]
pub enum HubEvent {
    /// A freshly projected snapshot. Shared, never mutated after publication.
    VisualState(Arc<VisualSnapshot>),
    Anomaly(Anomaly),
    Threat(ThreatDetection),
    Status(PipelineStatus),
}

impl HubEvent {
    /// The channel this event is delivered on.
    pub fn channel(&self) -> ChannelKind {
        match self {
            Self::VisualState(_) => ChannelKind::VisualState,
            Self::Anomaly(_) => ChannelKind::Anomalies,
            Self::Threat(_) => ChannelKind::Threats,
            Self::Status(_) => ChannelKind::Status,
        }
    }
}
