//! Snapshot projection.
//!
//! One detection-engine snapshot becomes one [`VisualSnapshot`]. The only
//! state carried between calls is the position cache.

use std::collections::HashSet;

use netlens_io::{
    Neuron, SimulationSnapshot, SynapticConnection, VisualConnection, VisualNeuron,
    VisualSnapshot,
};
use netlens_types::{LayerTag, NetlensResult, NeuronId, TimestampMs};

use crate::classifier;
use crate::config::ProjectionConfig;
use crate::position_cache::PositionCache;

/// Collaborator state sampled at projection time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LiveStatus {
    pub is_processing: bool,
    pub active_threats: u32,
}

/// Projects simulation snapshots through a persistent [`PositionCache`].
pub struct StateProjector {
    cache: PositionCache,
}

impl StateProjector {
    pub fn new(cache: PositionCache) -> Self {
        Self { cache }
    }

    /// Validates the config and builds a projector with a seeded cache.
    pub fn from_config(config: &ProjectionConfig) -> NetlensResult<Self> {
        config.validate()?;
        Ok(Self::new(PositionCache::from_config(config)))
    }

    /// Projects one snapshot.
    ///
    /// Layer tags are resolved for every neuron before any position is
    /// assigned, so an unknown tag fails the whole cycle without touching
    /// the cache. Connections with an endpoint missing from the snapshot
    /// are dropped.
    pub fn project(
        &mut self,
        snapshot: &SimulationSnapshot,
        live: LiveStatus,
        now: TimestampMs,
    ) -> NetlensResult<VisualSnapshot> {
        let layers = snapshot
            .neurons
            .iter()
            .map(|n| n.layer.parse::<LayerTag>())
            .collect::<NetlensResult<Vec<_>>>()?;

        let neurons: Vec<VisualNeuron> = snapshot
            .neurons
            .iter()
            .zip(layers)
            .map(|(neuron, layer)| self.project_neuron(neuron, layer))
            .collect();

        let connections: Vec<VisualConnection> = {
            let known: HashSet<&NeuronId> = neurons.iter().map(|n| &n.id).collect();
            snapshot
                .connections
                .iter()
                .filter(|c| known.contains(&c.source) && known.contains(&c.target))
                .map(|c| project_connection(c, now))
                .collect()
        };

        let dropped = snapshot.connections.len() - connections.len();
        if dropped > 0 {
            tracing::debug!(dropped, "dangling connections filtered");
        }

        Ok(VisualSnapshot {
            neurons,
            connections,
            anomaly_score: snapshot.anomaly_score,
            is_analysis_active: live.is_processing,
            active_threats: live.active_threats,
        })
    }

    /// The position cache, for read-only queries.
    pub fn cache(&self) -> &PositionCache {
        &self.cache
    }

    fn project_neuron(&mut self, neuron: &Neuron, layer: LayerTag) -> VisualNeuron {
        VisualNeuron {
            id: neuron.id.clone(),
            position: self.cache.position_in(&neuron.id, layer, neuron.index),
            layer,
            size: classifier::size_multiplier(neuron.anomaly_contribution),
            connections: neuron.connections.clone(),
            state: classifier::neuron_state(neuron.potential, neuron.threshold, neuron.refractory),
            activation_level: classifier::activation_level(neuron.potential, neuron.threshold),
            anomaly_level: neuron.anomaly_contribution,
        }
    }
}

fn project_connection(connection: &SynapticConnection, now: TimestampMs) -> VisualConnection {
    VisualConnection {
        id: connection.id.clone(),
        source: connection.source.clone(),
        target: connection.target.clone(),
        strength: connection.weight,
        active: classifier::is_connection_active(connection.last_activation, now),
        highlighted: classifier::is_highlighted(connection.plasticity),
    }
}
