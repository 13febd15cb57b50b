//! Integration tests for netlens-io.

use glam::{Vec2, Vec3};
use netlens_io::validator::{validate_feed, validate_snapshot};
use netlens_io::{
    CommunicationRecord, Device, DeviceFeed, Neuron, SimulationSnapshot, SynapticConnection,
    VisualNeuron, VisualSnapshot,
};
use netlens_types::{ActivationState, DeviceCategory, LayerTag, LinkStatus};

fn neuron(id: &str, potential: f32) -> Neuron {
    Neuron {
        id: id.into(),
        potential,
        threshold: 100.0,
        refractory: false,
        layer: "input".into(),
        index: 0,
        anomaly_contribution: 0.2,
        connections: Vec::new(),
    }
}

fn visual(id: &str, state: ActivationState) -> VisualNeuron {
    VisualNeuron {
        id: id.into(),
        position: Vec3::ZERO,
        layer: LayerTag::Input,
        size: 1.0,
        connections: Vec::new(),
        state,
        activation_level: 0.5,
        anomaly_level: 0.0,
    }
}

// ─── Contract Tests ───────────────────────────────────────────

#[test]
fn device_feed_from_json() {
    let json = r#"{
        "devices": [
            {"id": "srv-1", "category": "Server", "status": "normal",
             "position": [120.0, 80.0], "active_connections": 3},
            {"id": "cam-7", "category": "IoT Device", "status": "anomaly",
             "position": [640.0, 310.0], "active_connections": 0}
        ],
        "communications": [
            {"source": "srv-1", "destination": "cam-7", "protocol": "TCP",
             "status": "anomaly", "anomaly_score": 0.91}
        ]
    }"#;
    let feed: DeviceFeed = serde_json::from_str(json).unwrap();
    assert_eq!(feed.devices.len(), 2);
    assert_eq!(feed.devices[1].category, DeviceCategory::IotDevice);
    assert_eq!(feed.devices[0].position, Vec2::new(120.0, 80.0));
    assert_eq!(feed.communications[0].status, LinkStatus::Anomaly);
}

#[test]
fn neuron_connections_default_to_empty() {
    let json = r#"{"id": "n1", "potential": 10.0, "threshold": 100.0, "refractory": false,
                   "layer": "hidden1", "index": 4, "anomaly_contribution": 0.1}"#;
    let n: Neuron = serde_json::from_str(json).unwrap();
    assert!(n.connections.is_empty());
    assert_eq!(n.layer, "hidden1");
}

// ─── Visual Tests ─────────────────────────────────────────────

#[test]
fn activity_counts_only_active_neurons() {
    let snapshot = VisualSnapshot {
        neurons: vec![
            visual("a", ActivationState::Active),
            visual("b", ActivationState::Refractory),
            visual("c", ActivationState::Inactive),
            visual("d", ActivationState::Active),
        ],
        connections: Vec::new(),
        anomaly_score: 0.4,
        is_analysis_active: true,
        active_threats: 2,
    };
    let activity = snapshot.activity();
    assert_eq!(activity.active_neurons, 2);
    assert_eq!(activity.total_neurons, 4);
    assert_eq!(activity.active_threats, 2);
    assert!(activity.is_analysis_active);
}

#[test]
fn empty_snapshot_activity() {
    let activity = VisualSnapshot::default().activity();
    assert_eq!(activity.total_neurons, 0);
    assert_eq!(activity.anomaly_score, 0.0);
    assert!(!activity.is_analysis_active);
}

// ─── Validator Tests ──────────────────────────────────────────

#[test]
fn valid_snapshot_passes() {
    let snapshot = SimulationSnapshot {
        neurons: vec![neuron("n1", 70.0)],
        connections: vec![SynapticConnection {
            id: "c1".into(),
            source: "n1".into(),
            target: "ghost".into(),
            weight: 0.3,
            plasticity: 0.9,
            last_activation: 0,
        }],
        anomaly_score: 0.5,
    };
    // Dangling endpoints are not a validation concern.
    assert!(validate_snapshot(&snapshot).is_ok());
}

#[test]
fn out_of_range_contribution_fails() {
    let mut n = neuron("n1", 70.0);
    n.anomaly_contribution = 1.5;
    let snapshot = SimulationSnapshot {
        neurons: vec![n],
        ..Default::default()
    };
    let err = validate_snapshot(&snapshot).unwrap_err();
    assert!(err.to_string().contains("anomaly contribution"));
}

#[test]
fn non_finite_potential_fails() {
    let snapshot = SimulationSnapshot {
        neurons: vec![neuron("n1", f32::NAN)],
        ..Default::default()
    };
    assert!(validate_snapshot(&snapshot).is_err());
}

#[test]
fn feed_with_bad_score_fails() {
    let feed = DeviceFeed {
        devices: Vec::new(),
        communications: vec![CommunicationRecord {
            source: "a".into(),
            destination: "b".into(),
            protocol: "UDP".into(),
            status: LinkStatus::Normal,
            anomaly_score: -0.1,
        }],
    };
    assert!(validate_feed(&feed).is_err());
}

#[test]
fn feed_with_infinite_position_fails() {
    let feed = DeviceFeed {
        devices: vec![Device {
            id: "d".into(),
            category: DeviceCategory::Router,
            status: LinkStatus::Normal,
            position: Vec2::new(f32::INFINITY, 0.0),
            active_connections: 0,
        }],
        communications: Vec::new(),
    };
    assert!(validate_feed(&feed).is_err());
}
