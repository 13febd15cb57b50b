//! Per-layer placement table.

use serde::{Deserialize, Serialize};

use netlens_types::{LayerTag, NetlensError, NetlensResult, Scalar};

/// Depth band and ring radius of one layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerBand {
    /// Lower bound of the depth band.
    pub min_z: Scalar,
    /// Upper bound of the depth band.
    pub max_z: Scalar,
    /// Radius of the ring neurons of this layer are placed on.
    pub radius: Scalar,
}

impl LayerBand {
    pub const fn new(min_z: Scalar, max_z: Scalar, radius: Scalar) -> Self {
        Self { min_z, max_z, radius }
    }

    fn validate(&self, tag: LayerTag) -> NetlensResult<()> {
        if !self.min_z.is_finite() || !self.max_z.is_finite() {
            return Err(NetlensError::InvalidConfig(format!(
                "Layer '{tag}': depth band must be finite"
            )));
        }
        if self.min_z > self.max_z {
            return Err(NetlensError::InvalidConfig(format!(
                "Layer '{tag}': min_z ({}) > max_z ({})",
                self.min_z, self.max_z
            )));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(NetlensError::InvalidConfig(format!(
                "Layer '{tag}': radius must be finite and non-negative, got {}",
                self.radius
            )));
        }
        Ok(())
    }
}

/// Placement table, one entry per [`LayerTag`].
///
/// Exhaustive by construction: every tag has a band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerTable {
    pub input: LayerBand,
    pub hidden1: LayerBand,
    pub hidden2: LayerBand,
    pub output: LayerBand,
}

impl Default for LayerTable {
    fn default() -> Self {
        Self {
            input: LayerBand::new(-300.0, -200.0, 300.0),
            hidden1: LayerBand::new(-100.0, 0.0, 250.0),
            hidden2: LayerBand::new(100.0, 200.0, 200.0),
            output: LayerBand::new(300.0, 400.0, 150.0),
        }
    }
}

impl LayerTable {
    /// Band for a layer.
    pub fn band(&self, tag: LayerTag) -> &LayerBand {
        match tag {
            LayerTag::Input => &self.input,
            LayerTag::Hidden1 => &self.hidden1,
            LayerTag::Hidden2 => &self.hidden2,
            LayerTag::Output => &self.output,
        }
    }

    /// Checks every band.
    pub fn validate(&self) -> NetlensResult<()> {
        for tag in LayerTag::ALL {
            self.band(tag).validate(tag)?;
        }
        Ok(())
    }
}
