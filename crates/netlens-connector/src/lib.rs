//! # netlens-connector
//!
//! Glue between the anomaly-detection engine and the renderers.
//!
//! [`VisualizationConnector`] owns an [`AnomalyDetector`], a
//! [`StateProjector`](netlens_projection::StateProjector), and an
//! [`EventHub`](netlens_telemetry::EventHub). Each engine snapshot it
//! receives is projected and published in one synchronous cycle; detector
//! events are forwarded to the matching hub channel.

pub mod clock;
pub mod connector;
pub mod detector;

pub use connector::VisualizationConnector;
pub use detector::{AnomalyDetector, DetectorEvent, ScriptedDetector};
