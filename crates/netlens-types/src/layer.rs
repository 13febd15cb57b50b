//! Network layer tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NetlensError;

/// The four display layers of the detection network.
///
/// The layer table in `netlens-projection` is exhaustive over this enum,
/// so any tag that fails to parse into it is a configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerTag {
    Input,
    Hidden1,
    Hidden2,
    Output,
}

/// Neuron role as reported by the detection engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeuronKind {
    Input,
    Hidden,
    Output,
}

impl LayerTag {
    pub const ALL: [Self; 4] = [Self::Input, Self::Hidden1, Self::Hidden2, Self::Output];

    /// Canonical tag string.
    pub fn name(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Hidden1 => "hidden1",
            Self::Hidden2 => "hidden2",
            Self::Output => "output",
        }
    }

    /// Derives the display layer from an engine role and hidden-layer index.
    ///
    /// Hidden layer 0 is `Hidden1`; every deeper hidden layer folds into `Hidden2`.
    pub fn from_kind(kind: NeuronKind, layer_index: u32) -> Self {
        match kind {
            NeuronKind::Input => Self::Input,
            NeuronKind::Output => Self::Output,
            NeuronKind::Hidden if layer_index == 0 => Self::Hidden1,
            NeuronKind::Hidden => Self::Hidden2,
        }
    }
}

impl FromStr for LayerTag {
    type Err = NetlensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "input" => Ok(Self::Input),
            "hidden1" | "hidden-1" => Ok(Self::Hidden1),
            "hidden2" | "hidden-2" => Ok(Self::Hidden2),
            "output" => Ok(Self::Output),
            other => Err(NetlensError::UnknownLayer(other.to_string())),
        }
    }
}

impl fmt::Display for LayerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
