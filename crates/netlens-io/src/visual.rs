//! Exposed visual-state types.
//!
//! A [`VisualSnapshot`] is produced once per projection cycle and never
//! edited afterwards; the next cycle produces a new one.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use netlens_types::{ActivationState, ConnectionId, LayerTag, NeuronId, Scalar};

/// A neuron ready to be drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualNeuron {
    pub id: NeuronId,
    /// Cached position; identical across every snapshot for the same id.
    pub position: Vec3,
    pub layer: LayerTag,
    /// Size multiplier (1.5 for strong anomaly contributors, else 1.0).
    pub size: Scalar,
    pub connections: Vec<ConnectionId>,
    pub state: ActivationState,
    /// potential / threshold.
    pub activation_level: Scalar,
    pub anomaly_level: Scalar,
}

/// A connection ready to be drawn. Both endpoints exist in the same snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualConnection {
    pub id: ConnectionId,
    pub source: NeuronId,
    pub target: NeuronId,
    pub strength: Scalar,
    pub active: bool,
    pub highlighted: bool,
}

/// The complete visual state of one tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisualSnapshot {
    pub neurons: Vec<VisualNeuron>,
    pub connections: Vec<VisualConnection>,
    pub anomaly_score: Scalar,
    pub is_analysis_active: bool,
    pub active_threats: u32,
}

/// Condensed activity figures for the neural-activity indicator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NeuralActivity {
    pub anomaly_score: Scalar,
    pub active_neurons: usize,
    pub total_neurons: usize,
    pub is_analysis_active: bool,
    pub active_threats: u32,
}

impl VisualSnapshot {
    /// Summarizes the snapshot for the activity indicator.
    ///
    /// Refractory neurons are not counted as active.
    pub fn activity(&self) -> NeuralActivity {
        NeuralActivity {
            anomaly_score: self.anomaly_score,
            active_neurons: self
                .neurons
                .iter()
                .filter(|n| n.state == ActivationState::Active)
                .count(),
            total_neurons: self.neurons.len(),
            is_analysis_active: self.is_analysis_active,
            active_threats: self.active_threats,
        }
    }

    /// Looks up a neuron by id.
    pub fn neuron(&self, id: &NeuronId) -> Option<&VisualNeuron> {
        self.neurons.iter().find(|n| &n.id == id)
    }
}
