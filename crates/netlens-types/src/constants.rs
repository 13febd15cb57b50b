//! Fixed design constants for classification and layout.
//!
//! These are part of the dashboard contract and deliberately not
//! configurable.

/// A neuron is active when its potential exceeds this fraction of its threshold.
pub const ACTIVE_POTENTIAL_RATIO: f32 = 0.6;

/// A connection is active if it fired within this many milliseconds.
pub const CONNECTION_ACTIVITY_WINDOW_MS: u64 = 200;

/// Plasticity above which a connection is highlighted.
pub const PLASTICITY_HIGHLIGHT_THRESHOLD: f32 = 0.5;

/// Anomaly contribution above which a neuron is drawn enlarged.
pub const ANOMALY_SIZE_THRESHOLD: f32 = 0.5;

/// Size multiplier for neurons above [`ANOMALY_SIZE_THRESHOLD`].
pub const ANOMALY_SIZE_MULTIPLIER: f32 = 1.5;

/// Number of angular slots around a layer ring.
pub const RING_SLOTS: f32 = 10.0;

/// Default half-width of the planar jitter added to ring positions.
pub const DEFAULT_JITTER: f32 = 20.0;

/// Width of the logical frame device positions are expressed in.
pub const REFERENCE_WIDTH: f32 = 800.0;

/// Height of the logical frame device positions are expressed in.
pub const REFERENCE_HEIGHT: f32 = 400.0;

/// Inset kept free on every side of the drawing surface.
pub const SURFACE_MARGIN: f32 = 30.0;

/// Only this many of the most recent communications are laid out.
pub const COMMUNICATION_WINDOW: usize = 20;
