//! Deterministic jitter for neuron placement.
//!
//! Placement jitter is a pure function of `(seed, id, layer, index)`, so
//! the same neuron lands on the same spot in every run and every test.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use netlens_types::{LayerTag, NeuronId};

/// Source of placement noise.
pub trait JitterSource: Send + Sync {
    /// Three samples, each uniform in `[0, 1)`: depth within the band,
    /// then planar x and y offsets.
    fn sample(&self, id: &NeuronId, layer: LayerTag, index: u32) -> [f32; 3];
}

/// Jitter drawn from a `StdRng` seeded per neuron.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededJitter {
    seed: u64,
}

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// 64-bit FNV-1a over the seed and the neuron's identity.
    fn key(&self, id: &NeuronId, layer: LayerTag, index: u32) -> u64 {
        const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const PRIME: u64 = 0x0000_0100_0000_01b3;

        let mut hash = OFFSET;
        let bytes = self
            .seed
            .to_le_bytes()
            .into_iter()
            .chain(id.as_str().bytes())
            .chain(layer.name().bytes())
            .chain(index.to_le_bytes());
        for byte in bytes {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(PRIME);
        }
        hash
    }
}

impl JitterSource for SeededJitter {
    fn sample(&self, id: &NeuronId, layer: LayerTag, index: u32) -> [f32; 3] {
        let mut rng = StdRng::seed_from_u64(self.key(id, layer, index));
        [rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>()]
    }
}

/// Jitter that always returns the midpoint: neurons sit exactly on their
/// ring, in the middle of their depth band.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn sample(&self, _id: &NeuronId, _layer: LayerTag, _index: u32) -> [f32; 3] {
        [0.5, 0.5, 0.5]
    }
}
