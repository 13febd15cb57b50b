//! The anomaly-detection collaborator.
//!
//! The engine itself lives outside netlens. This module fixes the surface
//! the connector drives it through, and offers a scripted implementation
//! that replays queued events.

use std::collections::VecDeque;

use netlens_io::{Anomaly, DetectorStatus, PipelineStatus, SimulationSnapshot, ThreatDetection};

/// One output of the detection engine.
#[derive(Debug, Clone)]
pub enum DetectorEvent {
    /// A tick of the spiking network.
    SnnState(SimulationSnapshot),
    Anomaly(Anomaly),
    Threat(ThreatDetection),
    Status(PipelineStatus),
}

/// Trait for detection engines.
///
/// # Lifecycle
///
/// ```text
/// detector.start(interface)      // false = could not start
/// loop:
///   for event in detector.drain_events():
///     connector handles event    // snapshots projected, the rest forwarded
/// detector.stop()
/// ```
pub trait AnomalyDetector: Send {
    /// Starts capture and detection. Returns false if the engine could not start.
    fn start(&mut self, interface: Option<&str>) -> bool;

    /// Stops capture and detection.
    fn stop(&mut self);

    /// Live engine status.
    fn status(&self) -> DetectorStatus;

    /// Number of threats currently considered active.
    fn active_threats_count(&self) -> u32;

    /// Takes every event produced since the last call, oldest first.
    fn drain_events(&mut self) -> Vec<DetectorEvent>;

    /// Returns the detector's name for logging.
    fn name(&self) -> &str {
        "detector"
    }
}

/// Detector that replays events pushed into it.
///
/// Useful for offline projection of recorded snapshots and for tests.
#[derive(Debug, Default)]
pub struct ScriptedDetector {
    status: DetectorStatus,
    active_threats: u32,
    queue: VecDeque<DetectorEvent>,
    refuse_start: bool,
}

impl ScriptedDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// A detector whose `start` always fails.
    pub fn refusing() -> Self {
        Self {
            refuse_start: true,
            ..Self::default()
        }
    }

    /// Queues an event for the next drain.
    pub fn push(&mut self, event: DetectorEvent) {
        self.queue.push_back(event);
    }

    pub fn set_active_threats(&mut self, count: u32) {
        self.active_threats = count;
    }

    /// Number of queued events.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl AnomalyDetector for ScriptedDetector {
    fn start(&mut self, _interface: Option<&str>) -> bool {
        if self.refuse_start {
            return false;
        }
        self.status.is_processing = true;
        true
    }

    fn stop(&mut self) {
        self.status.is_processing = false;
    }

    fn status(&self) -> DetectorStatus {
        self.status
    }

    fn active_threats_count(&self) -> u32 {
        self.active_threats
    }

    fn drain_events(&mut self) -> Vec<DetectorEvent> {
        self.queue.drain(..).collect()
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
