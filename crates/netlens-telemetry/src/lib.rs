//! # netlens-telemetry
//!
//! Event hub for the netlens pipeline. Carries projected visual snapshots
//! and detector events (anomalies, threats, pipeline status) from producers
//! to any number of subscribers, which can be closures or pluggable sinks
//! (in-memory capture, tracing).

pub mod bus;
pub mod channel;
pub mod events;
pub mod sinks;

pub use bus::EventHub;
pub use channel::{Channel, Subscription};
pub use events::{ChannelKind, HubEvent};
