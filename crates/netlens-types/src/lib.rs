//! # netlens-types
//!
//! Shared identifiers, visual categories, error types, and design constants
//! for the netlens dashboard projection pipeline.
//!
//! This crate has zero projection logic — it defines the vocabulary
//! that all other netlens crates share.

pub mod category;
pub mod constants;
pub mod error;
pub mod ids;
pub mod layer;
pub mod scalar;

pub use category::{ActivationState, DeviceCategory, LinkStatus};
pub use error::{NetlensError, NetlensResult};
pub use ids::{ConnectionId, DeviceId, NeuronId};
pub use layer::{LayerTag, NeuronKind};
pub use scalar::{Scalar, TimestampMs};
