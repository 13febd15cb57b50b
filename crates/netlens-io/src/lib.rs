//! # netlens-io
//!
//! Boundary types of the netlens pipeline.
//!
//! [`contract`] holds what the detection engine and the packet log hand
//! us; [`visual`] holds what renderers receive back. [`validator`] offers
//! opt-in range checks for feeds loaded from disk.

pub mod contract;
pub mod validator;
pub mod visual;

pub use contract::{
    Anomaly, CommunicationRecord, Device, DetectorStatus, DeviceFeed, Neuron, PipelineStatus,
    SimulationSnapshot, SynapticConnection, ThreatDetection,
};
pub use visual::{NeuralActivity, VisualConnection, VisualNeuron, VisualSnapshot};
