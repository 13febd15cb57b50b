//! Integration tests for netlens-connector.

use std::sync::{Arc, Mutex};

use netlens_connector::{AnomalyDetector, DetectorEvent, ScriptedDetector, VisualizationConnector};
use netlens_io::{Anomaly, Neuron, PipelineStatus, SimulationSnapshot, VisualSnapshot};
use netlens_projection::ProjectionConfig;
use netlens_types::{ActivationState, NetlensError};

fn neuron(id: &str, layer: &str, potential: f32) -> Neuron {
    Neuron {
        id: id.into(),
        potential,
        threshold: 100.0,
        refractory: false,
        layer: layer.into(),
        index: 0,
        anomaly_contribution: 0.0,
        connections: Vec::new(),
    }
}

fn tick(score: f32, potentials: &[f32]) -> DetectorEvent {
    DetectorEvent::SnnState(SimulationSnapshot {
        neurons: potentials
            .iter()
            .enumerate()
            .map(|(i, &p)| neuron(&format!("n{i}"), "hidden1", p))
            .collect(),
        connections: Vec::new(),
        anomaly_score: score,
    })
}

fn connector() -> VisualizationConnector<ScriptedDetector> {
    VisualizationConnector::new(ScriptedDetector::new(), &ProjectionConfig::default()).unwrap()
}

// ─── Lifecycle Tests ──────────────────────────────────────────

#[test]
fn start_failure_is_reported_as_false() {
    let mut c =
        VisualizationConnector::new(ScriptedDetector::refusing(), &ProjectionConfig::default())
            .unwrap();
    assert!(!c.start_analysis(Some("eth0")));
    assert!(!c.detector().status().is_processing);
}

#[test]
fn start_and_stop_toggle_processing() {
    let mut c = connector();
    assert!(c.start_analysis(None));
    assert!(c.detector().status().is_processing);
    c.stop_analysis();
    assert!(!c.detector().status().is_processing);
}

#[test]
fn invalid_config_is_rejected() {
    let config = ProjectionConfig {
        jitter: f32::NAN,
        ..Default::default()
    };
    assert!(VisualizationConnector::new(ScriptedDetector::new(), &config).is_err());
}

// ─── Projection Cycle Tests ───────────────────────────────────

#[test]
fn initial_state_is_empty() {
    let c = connector();
    let state = c.visual_state();
    assert!(state.neurons.is_empty());
    assert_eq!(state.anomaly_score, 0.0);
    assert!(!state.is_analysis_active);
    assert_eq!(c.neural_activity().total_neurons, 0);
}

#[test]
fn snapshot_is_projected_and_published() {
    let mut c = connector();
    c.start_analysis(None);
    c.detector_mut().set_active_threats(2);

    let received: Arc<Mutex<Vec<VisualSnapshot>>> = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&received);
    let _sub = c.subscribe_visual_state(move |s| log.lock().unwrap().push(s.clone()));

    c.detector_mut().push(tick(0.75, &[80.0, 10.0]));
    assert_eq!(c.pump_at(1_000).unwrap(), 1);

    let received = received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].anomaly_score, 0.75);
    assert!(received[0].is_analysis_active);
    assert_eq!(received[0].active_threats, 2);
    assert_eq!(received[0].neurons[0].state, ActivationState::Active);

    let activity = c.neural_activity();
    assert_eq!(activity.active_neurons, 1);
    assert_eq!(activity.total_neurons, 2);
    assert_eq!(activity.active_threats, 2);
}

#[test]
fn late_subscriber_sees_current_snapshot_only() {
    let mut c = connector();
    for score in [0.1, 0.2, 0.3] {
        c.detector_mut().push(tick(score, &[10.0]));
    }
    c.pump_at(0).unwrap();

    let received: Arc<Mutex<Vec<f32>>> = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&received);
    let _sub = c.subscribe_visual_state(move |s| log.lock().unwrap().push(s.anomaly_score));

    assert_eq!(*received.lock().unwrap(), vec![0.3]);
}

#[test]
fn visual_state_is_an_owned_copy() {
    let mut c = connector();
    c.detector_mut().push(tick(0.4, &[10.0]));
    c.pump_at(0).unwrap();

    let mut copy = c.visual_state();
    copy.neurons.clear();
    copy.anomaly_score = 9.0;

    assert_eq!(c.visual_state().neurons.len(), 1);
    assert_eq!(c.visual_state().anomaly_score, 0.4);
}

#[test]
fn positions_persist_across_cycles() {
    let mut c = connector();
    c.detector_mut().push(tick(0.1, &[10.0, 20.0]));
    c.pump_at(0).unwrap();
    let before = c.visual_state();

    c.detector_mut().push(tick(0.2, &[90.0, 95.0]));
    c.pump_at(100).unwrap();
    let after = c.visual_state();

    for (a, b) in before.neurons.iter().zip(&after.neurons) {
        assert_eq!(a.position, b.position);
    }
    assert_eq!(c.projector().cache().len(), 2);
}

#[test]
fn unknown_layer_keeps_previous_state() {
    let mut c = connector();
    c.detector_mut().push(tick(0.5, &[10.0]));
    c.pump_at(0).unwrap();

    let published = Arc::new(Mutex::new(0usize));
    let count = Arc::clone(&published);
    let _sub = c.subscribe_visual_state(move |_| *count.lock().unwrap() += 1);
    assert_eq!(*published.lock().unwrap(), 1); // replay

    c.detector_mut().push(DetectorEvent::SnnState(SimulationSnapshot {
        neurons: vec![neuron("bad", "dendrite", 10.0)],
        connections: Vec::new(),
        anomaly_score: 0.9,
    }));
    let err = c.pump_at(10).unwrap_err();

    assert!(matches!(err, NetlensError::UnknownLayer(_)));
    assert_eq!(c.visual_state().anomaly_score, 0.5);
    assert_eq!(*published.lock().unwrap(), 1);
}

#[test]
fn batch_continues_after_projection_failure() {
    let mut c = connector();
    let anomalies = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&anomalies);
    let _sub = c.subscribe_anomalies(move |a| log.lock().unwrap().push(a.id.clone()));

    c.detector_mut().push(DetectorEvent::SnnState(SimulationSnapshot {
        neurons: vec![neuron("bad", "hidden7", 10.0)],
        ..Default::default()
    }));
    c.detector_mut().push(DetectorEvent::Anomaly(Anomaly {
        id: "a1".into(),
        timestamp: 1,
        score: 0.9,
        description: "burst".into(),
        source: None,
    }));

    assert!(c.pump_at(0).is_err());
    assert_eq!(*anomalies.lock().unwrap(), vec!["a1".to_string()]);
    assert_eq!(c.detector().pending(), 0);
}

// ─── Forwarding Tests ─────────────────────────────────────────

#[test]
fn status_events_are_forwarded_and_cancellable() {
    let mut c = connector();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&seen);
    let sub = c.subscribe_status(move |s| log.lock().unwrap().push(s.stage.clone()));

    let status = |stage: &str| {
        DetectorEvent::Status(PipelineStatus {
            timestamp: 0,
            stage: stage.into(),
            is_processing: true,
            message: None,
        })
    };

    c.ingest(status("capture"), 0).unwrap();
    sub.cancel();
    sub.cancel();
    c.ingest(status("analyze"), 0).unwrap();

    assert_eq!(*seen.lock().unwrap(), vec!["capture".to_string()]);
}

#[test]
fn pump_uses_wall_clock() {
    let mut c = connector();
    c.detector_mut().push(tick(0.0, &[]));
    assert_eq!(c.pump().unwrap(), 1);
    assert!(c.hub().current_visual_state().is_some());
}
