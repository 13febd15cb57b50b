//! Visualization connector.
//!
//! Each engine snapshot triggers exactly one projection-and-publish cycle.
//! Nothing in a cycle blocks or suspends.

use std::sync::Arc;

use netlens_io::{
    Anomaly, NeuralActivity, PipelineStatus, SimulationSnapshot, ThreatDetection, VisualSnapshot,
};
use netlens_projection::{LiveStatus, ProjectionConfig, StateProjector};
use netlens_telemetry::{EventHub, HubEvent, Subscription};
use netlens_types::{NetlensResult, TimestampMs};

use crate::clock::now_ms;
use crate::detector::{AnomalyDetector, DetectorEvent};

/// Adapts detector output for renderers.
pub struct VisualizationConnector<D> {
    detector: D,
    projector: StateProjector,
    hub: EventHub,
    current: Arc<VisualSnapshot>,
}

impl<D: AnomalyDetector> VisualizationConnector<D> {
    /// Creates a connector with a projector built from `config`.
    pub fn new(detector: D, config: &ProjectionConfig) -> NetlensResult<Self> {
        Ok(Self::with_projector(detector, StateProjector::from_config(config)?))
    }

    /// Creates a connector around an existing projector.
    pub fn with_projector(detector: D, projector: StateProjector) -> Self {
        Self {
            detector,
            projector,
            hub: EventHub::new(),
            current: Arc::new(VisualSnapshot::default()),
        }
    }

    /// Starts the detector. A refusal is reported as `false`, never as an error.
    pub fn start_analysis(&mut self, interface: Option<&str>) -> bool {
        let started = self.detector.start(interface);
        if started {
            tracing::info!(detector = self.detector.name(), interface, "analysis started");
        } else {
            tracing::warn!(detector = self.detector.name(), interface, "detector failed to start");
        }
        started
    }

    pub fn stop_analysis(&mut self) {
        self.detector.stop();
        tracing::info!(detector = self.detector.name(), "analysis stopped");
    }

    /// Handles every pending detector event, stamped with the wall clock.
    pub fn pump(&mut self) -> NetlensResult<usize> {
        self.pump_at(now_ms())
    }

    /// Handles every pending detector event as of `now`.
    ///
    /// The whole batch is handled even if a snapshot fails to project;
    /// the first such error is returned once the batch is done.
    pub fn pump_at(&mut self, now: TimestampMs) -> NetlensResult<usize> {
        let events = self.detector.drain_events();
        let count = events.len();
        let mut first_error = None;
        for event in events {
            if let Err(e) = self.ingest(event, now) {
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(count),
        }
    }

    /// Handles a single detector event.
    pub fn ingest(&mut self, event: DetectorEvent, now: TimestampMs) -> NetlensResult<()> {
        match event {
            DetectorEvent::SnnState(snapshot) => self.on_snapshot(&snapshot, now)?,
            DetectorEvent::Anomaly(anomaly) => self.hub.publish(HubEvent::Anomaly(anomaly)),
            DetectorEvent::Threat(threat) => self.hub.publish(HubEvent::Threat(threat)),
            DetectorEvent::Status(status) => self.hub.publish(HubEvent::Status(status)),
        }
        Ok(())
    }

    /// Projects a snapshot and publishes the result.
    ///
    /// On failure nothing is published and the current state is unchanged.
    fn on_snapshot(&mut self, snapshot: &SimulationSnapshot, now: TimestampMs) -> NetlensResult<()> {
        let live = LiveStatus {
            is_processing: self.detector.status().is_processing,
            active_threats: self.detector.active_threats_count(),
        };
        let visual = match self.projector.project(snapshot, live, now) {
            Ok(visual) => Arc::new(visual),
            Err(e) => {
                tracing::error!(error = %e, "projection failed");
                return Err(e);
            }
        };
        self.current = Arc::clone(&visual);
        self.hub.publish(HubEvent::VisualState(visual));
        Ok(())
    }

    /// Subscribes to projected snapshots. A subscriber joining after the
    /// first publish immediately receives the current snapshot.
    pub fn subscribe_visual_state<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&VisualSnapshot) + Send + Sync + 'static,
    {
        self.hub
            .visual()
            .subscribe(move |snapshot: &Arc<VisualSnapshot>| callback(snapshot.as_ref()))
    }

    pub fn subscribe_anomalies<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Anomaly) + Send + Sync + 'static,
    {
        self.hub.anomalies().subscribe(callback)
    }

    pub fn subscribe_threats<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&ThreatDetection) + Send + Sync + 'static,
    {
        self.hub.threats().subscribe(callback)
    }

    pub fn subscribe_status<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&PipelineStatus) + Send + Sync + 'static,
    {
        self.hub.status().subscribe(callback)
    }

    /// An owned copy of the current visual state.
    pub fn visual_state(&self) -> VisualSnapshot {
        self.current.as_ref().clone()
    }

    /// Activity figures of the current visual state.
    pub fn neural_activity(&self) -> NeuralActivity {
        self.current.activity()
    }

    pub fn hub(&self) -> &EventHub {
        &self.hub
    }

    pub fn projector(&self) -> &StateProjector {
        &self.projector
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }

    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }
}
