//! Projection configuration.
//!
//! Parameters that control neuron placement: the jitter seed and
//! half-width, and the per-layer table. Classification thresholds are
//! fixed constants and deliberately absent here.

use std::path::Path;

use serde::{Deserialize, Serialize};

use netlens_types::constants::DEFAULT_JITTER;
use netlens_types::{NetlensError, NetlensResult, Scalar};

use crate::layers::LayerTable;

/// Configuration for the state projector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Seed of the placement jitter. Same seed, same layout.
    pub seed: u64,

    /// Half-width of the planar jitter added to ring positions.
    pub jitter: Scalar,

    /// Depth band and ring radius per layer.
    pub layers: LayerTable,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            jitter: DEFAULT_JITTER,
            layers: LayerTable::default(),
        }
    }
}

impl ProjectionConfig {
    /// Creates a config that places neurons exactly on their rings.
    pub fn without_jitter() -> Self {
        Self {
            jitter: 0.0,
            ..Default::default()
        }
    }

    /// Checks the jitter and every layer band.
    pub fn validate(&self) -> NetlensResult<()> {
        if !self.jitter.is_finite() || self.jitter < 0.0 {
            return Err(NetlensError::InvalidConfig(format!(
                "Jitter must be finite and non-negative, got {}",
                self.jitter
            )));
        }
        self.layers.validate()
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> NetlensResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| NetlensError::Serialization(format!("TOML parse failed: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> NetlensResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
