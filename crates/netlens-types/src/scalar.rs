//! Scalar and time aliases.
//!
//! Coordinates are `f32` because every consumer of the projected state is a
//! drawing surface. Timestamps are wall-clock milliseconds since the Unix
//! epoch, as reported by the detection engine.

/// The floating-point type used for coordinates and scores.
pub type Scalar = f32;

/// Milliseconds since the Unix epoch.
pub type TimestampMs = u64;
