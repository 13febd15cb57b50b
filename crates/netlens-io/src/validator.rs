//! Feed validation.
//!
//! Range checks for feeds loaded from disk, catching data-level errors
//! early with clear diagnostics. The live pipeline does not call these:
//! dangling references are filtered downstream, never rejected here.

use netlens_types::{NetlensError, NetlensResult, Scalar};

use crate::contract::{DeviceFeed, SimulationSnapshot};

/// Validates a detection-engine snapshot.
///
/// Checks:
/// - Potentials and thresholds are finite
/// - Anomaly contributions and plasticity lie in [0, 1]
/// - Weights and the aggregate score are finite
pub fn validate_snapshot(snapshot: &SimulationSnapshot) -> NetlensResult<()> {
    for neuron in &snapshot.neurons {
        if !neuron.potential.is_finite() || !neuron.threshold.is_finite() {
            return Err(NetlensError::InvalidInput(format!(
                "Neuron '{}': potential and threshold must be finite",
                neuron.id
            )));
        }
        check_unit(
            neuron.anomaly_contribution,
            &format!("Neuron '{}' anomaly contribution", neuron.id),
        )?;
    }

    for connection in &snapshot.connections {
        if !connection.weight.is_finite() {
            return Err(NetlensError::InvalidInput(format!(
                "Connection '{}': weight must be finite",
                connection.id
            )));
        }
        check_unit(
            connection.plasticity,
            &format!("Connection '{}' plasticity", connection.id),
        )?;
    }

    if !snapshot.anomaly_score.is_finite() {
        return Err(NetlensError::InvalidInput(
            "Aggregate anomaly score must be finite".into(),
        ));
    }

    Ok(())
}

/// Validates a device feed.
///
/// Positions may be arbitrarily large but must be finite; communication
/// anomaly scores must lie in [0, 1].
pub fn validate_feed(feed: &DeviceFeed) -> NetlensResult<()> {
    for device in &feed.devices {
        if !device.position.is_finite() {
            return Err(NetlensError::InvalidInput(format!(
                "Device '{}': position must be finite",
                device.id
            )));
        }
    }

    for (i, record) in feed.communications.iter().enumerate() {
        check_unit(
            record.anomaly_score,
            &format!("Communication #{i} ({} -> {}) anomaly score", record.source, record.destination),
        )?;
    }

    Ok(())
}

fn check_unit(value: Scalar, what: &str) -> NetlensResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(NetlensError::InvalidInput(format!(
            "{what} must be in [0, 1], got {value}"
        )));
    }
    Ok(())
}
