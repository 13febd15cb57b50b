//! State classification.
//!
//! Maps continuous engine state to the discrete categories renderers key
//! their styles on. All thresholds come from
//! [`netlens_types::constants`] and are not configurable.

use netlens_types::constants::{
    ACTIVE_POTENTIAL_RATIO, ANOMALY_SIZE_MULTIPLIER, ANOMALY_SIZE_THRESHOLD,
    CONNECTION_ACTIVITY_WINDOW_MS, PLASTICITY_HIGHLIGHT_THRESHOLD,
};
use netlens_types::{ActivationState, Scalar, TimestampMs};

/// Classifies a neuron.
///
/// Refractory wins over everything; otherwise the neuron is active when
/// its potential strictly exceeds 0.6 × threshold.
pub fn neuron_state(potential: Scalar, threshold: Scalar, refractory: bool) -> ActivationState {
    if refractory {
        ActivationState::Refractory
    } else if potential > threshold * ACTIVE_POTENTIAL_RATIO {
        ActivationState::Active
    } else {
        ActivationState::Inactive
    }
}

/// `potential / threshold`, or 0 when that ratio is not finite.
pub fn activation_level(potential: Scalar, threshold: Scalar) -> Scalar {
    let level = potential / threshold;
    if level.is_finite() {
        level
    } else {
        0.0
    }
}

/// Draw-size multiplier for a neuron's anomaly contribution.
pub fn size_multiplier(anomaly_contribution: Scalar) -> Scalar {
    if anomaly_contribution > ANOMALY_SIZE_THRESHOLD {
        ANOMALY_SIZE_MULTIPLIER
    } else {
        1.0
    }
}

/// True iff the connection fired less than 200 ms before `now`.
///
/// Timestamps ahead of `now` count as elapsed time zero.
pub fn is_connection_active(last_activation: TimestampMs, now: TimestampMs) -> bool {
    now.saturating_sub(last_activation) < CONNECTION_ACTIVITY_WINDOW_MS
}

/// True iff plasticity exceeds 0.5.
pub fn is_highlighted(plasticity: Scalar) -> bool {
    plasticity > PLASTICITY_HIGHLIGHT_THRESHOLD
}
