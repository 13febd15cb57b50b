//! Consumed contract types.
//!
//! These mirror the records produced by the anomaly-detection engine and
//! the communication log. They are serializable so feeds can be replayed
//! from JSON.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use netlens_types::{
    ConnectionId, DeviceCategory, DeviceId, LinkStatus, NeuronId, Scalar, TimestampMs,
};

/// One neuron of the detection network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neuron {
    pub id: NeuronId,
    /// Membrane potential.
    pub potential: Scalar,
    /// Firing threshold.
    pub threshold: Scalar,
    /// Whether the neuron is in its refractory period.
    pub refractory: bool,
    /// Raw layer tag as reported by the engine ("input", "hidden1", ...).
    pub layer: String,
    /// Ordinal position within the layer.
    pub index: u32,
    /// Contribution to the aggregate anomaly signal, in [0, 1].
    pub anomaly_contribution: Scalar,
    /// Outgoing connection ids.
    #[serde(default)]
    pub connections: Vec<ConnectionId>,
}

/// A synaptic connection between two neurons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynapticConnection {
    pub id: ConnectionId,
    pub source: NeuronId,
    pub target: NeuronId,
    pub weight: Scalar,
    /// Propensity to change strength, in [0, 1].
    pub plasticity: Scalar,
    /// When the connection last carried a spike.
    pub last_activation: TimestampMs,
}

/// One tick of the detection engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    pub neurons: Vec<Neuron>,
    pub connections: Vec<SynapticConnection>,
    /// Aggregate anomaly score of the tick.
    pub anomaly_score: Scalar,
}

/// Live status reported by the detection engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectorStatus {
    pub is_processing: bool,
    pub packets_processed: u64,
    pub anomalies_detected: u64,
}

/// An anomaly raised by the detection engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub id: String,
    pub timestamp: TimestampMs,
    pub score: Scalar,
    pub description: String,
    #[serde(default)]
    pub source: Option<DeviceId>,
}

/// A threat assembled from one or more anomalies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatDetection {
    pub id: String,
    pub timestamp: TimestampMs,
    pub severity: LinkStatus,
    pub description: String,
    #[serde(default)]
    pub anomaly_ids: Vec<String>,
}

/// Progress report of the capture-and-detect pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineStatus {
    pub timestamp: TimestampMs,
    pub stage: String,
    pub is_processing: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// A monitored network device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub category: DeviceCategory,
    pub status: LinkStatus,
    /// Logical position in the 800×400 reference frame; may lie outside it.
    pub position: Vec2,
    pub active_connections: u32,
}

/// One logged communication between two devices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunicationRecord {
    pub source: DeviceId,
    pub destination: DeviceId,
    pub protocol: String,
    pub status: LinkStatus,
    pub anomaly_score: Scalar,
}

/// Devices plus their communication log, most recent record last.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceFeed {
    pub devices: Vec<Device>,
    #[serde(default)]
    pub communications: Vec<CommunicationRecord>,
}
