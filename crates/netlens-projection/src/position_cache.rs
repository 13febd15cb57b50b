//! Stable neuron placement.
//!
//! The first query for an id computes its coordinate; every later query
//! returns the stored value bit-for-bit. Entries are never evicted.

use std::collections::HashMap;
use std::f32::consts::TAU;

use glam::Vec3;

use netlens_types::constants::RING_SLOTS;
use netlens_types::{LayerTag, NetlensResult, NeuronId, Scalar};

use crate::config::ProjectionConfig;
use crate::jitter::{JitterSource, SeededJitter};
use crate::layers::LayerTable;

/// Write-once map from neuron id to 3-D coordinate.
pub struct PositionCache {
    table: LayerTable,
    jitter: Scalar,
    source: Box<dyn JitterSource>,
    positions: HashMap<NeuronId, Vec3>,
}

impl PositionCache {
    /// Creates an empty cache with an explicit jitter source.
    pub fn new(table: LayerTable, jitter: Scalar, source: Box<dyn JitterSource>) -> Self {
        Self {
            table,
            jitter,
            source,
            positions: HashMap::new(),
        }
    }

    /// Creates an empty cache with [`SeededJitter`] from the config's seed.
    pub fn from_config(config: &ProjectionConfig) -> Self {
        Self::new(
            config.layers,
            config.jitter,
            Box::new(SeededJitter::new(config.seed)),
        )
    }

    /// Position for a neuron given its raw layer tag.
    ///
    /// An unrecognized tag is a configuration error and nothing is cached.
    pub fn position(&mut self, id: &NeuronId, layer: &str, index: u32) -> NetlensResult<Vec3> {
        let tag = layer.parse::<LayerTag>()?;
        Ok(self.position_in(id, tag, index))
    }

    /// Position for a neuron whose layer is already resolved.
    pub fn position_in(&mut self, id: &NeuronId, layer: LayerTag, index: u32) -> Vec3 {
        if let Some(&cached) = self.positions.get(id) {
            return cached;
        }
        let position = self.compute(id, layer, index);
        self.positions.insert(id.clone(), position);
        tracing::trace!(%id, %layer, index, ?position, "position_assigned");
        position
    }

    /// Read-only lookup; never assigns.
    pub fn get(&self, id: &NeuronId) -> Option<Vec3> {
        self.positions.get(id).copied()
    }

    /// Number of ids seen so far.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Depth from the layer band, planar position on the layer ring at
    /// angle `2π · index / 10`, plus bounded planar jitter.
    fn compute(&self, id: &NeuronId, layer: LayerTag, index: u32) -> Vec3 {
        let band = self.table.band(layer);
        let [u_depth, u_x, u_y] = self.source.sample(id, layer, index);

        let z = band.min_z + u_depth * (band.max_z - band.min_z);
        let angle = (index as f32 / RING_SLOTS) * TAU;
        let x = angle.cos() * band.radius + (u_x * 2.0 - 1.0) * self.jitter;
        let y = angle.sin() * band.radius + (u_y * 2.0 - 1.0) * self.jitter;

        Vec3::new(x, y, z)
    }
}
