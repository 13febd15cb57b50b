//! # netlens-projection
//!
//! Turns detection-engine snapshots into renderable visual snapshots.
//!
//! ## Key Types
//!
//! - [`PositionCache`] — stable 3-D coordinate per neuron id, assigned on first sight
//! - [`classifier`] — fixed rules mapping potentials and timestamps to visual categories
//! - [`StateProjector`] — one simulation snapshot in, one immutable visual snapshot out
//! - [`ProjectionConfig`] — jitter seed and the layer table, loadable from TOML

pub mod classifier;
pub mod config;
pub mod jitter;
pub mod layers;
pub mod position_cache;
pub mod projector;

pub use config::ProjectionConfig;
pub use jitter::{JitterSource, SeededJitter};
pub use layers::{LayerBand, LayerTable};
pub use position_cache::PositionCache;
pub use projector::{LiveStatus, StateProjector};
