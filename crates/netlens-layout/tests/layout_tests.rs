//! Integration tests for netlens-layout.

use std::sync::{Arc, Mutex};

use glam::Vec2;
use netlens_io::{CommunicationRecord, Device, DeviceFeed};
use netlens_layout::mapper::NODE_RADIUS;
use netlens_layout::palette::{device_fill, legend, status_color, NEUTRAL_GRAY};
use netlens_layout::selection::toggled;
use netlens_layout::{
    layout, Color, DeviceGraph, DrawSurface, HeadlessSurface, JsonLayoutExporter, Selection,
    SpatialLayoutMapper,
};
use netlens_types::{DeviceCategory, DeviceId, LinkStatus};

fn device(id: &str, category: DeviceCategory, x: f32, y: f32) -> Device {
    Device {
        id: id.into(),
        category,
        status: LinkStatus::Normal,
        position: Vec2::new(x, y),
        active_connections: 0,
    }
}

fn comm(source: &str, destination: &str, protocol: &str, status: LinkStatus) -> CommunicationRecord {
    CommunicationRecord {
        source: source.into(),
        destination: destination.into(),
        protocol: protocol.into(),
        status,
        anomaly_score: 0.3,
    }
}

fn two_devices() -> Vec<Device> {
    vec![
        device("a", DeviceCategory::Server, 100.0, 100.0),
        device("b", DeviceCategory::Router, 400.0, 200.0),
    ]
}

// ─── Placement Tests ──────────────────────────────────────────

#[test]
fn scales_from_reference_frame() {
    let mapper = SpatialLayoutMapper::new(1600.0, 800.0);
    assert_eq!(mapper.place(Vec2::new(100.0, 50.0)), Vec2::new(200.0, 100.0));
}

#[test]
fn nodes_stay_inside_margin_for_any_input() {
    let dims = [60.0, 61.0, 100.0, 400.0, 800.0, 1920.0, 4000.0];
    let coords = [-1e9, -5000.0, -1.0, 0.0, 15.0, 400.0, 799.0, 5000.0, 1e9, f32::INFINITY, f32::NEG_INFINITY];
    for &width in &dims {
        for &height in &dims {
            let mapper = SpatialLayoutMapper::new(width, height);
            for &x in &coords {
                for &y in &coords {
                    let p = mapper.place(Vec2::new(x, y));
                    assert!(p.x >= 30.0 && p.x <= width - 30.0, "x={} w={width}", p.x);
                    assert!(p.y >= 30.0 && p.y <= height - 30.0, "y={} h={height}", p.y);
                }
            }
        }
    }
}

#[test]
fn nan_position_lands_on_margin() {
    let mapper = SpatialLayoutMapper::new(800.0, 400.0);
    assert_eq!(mapper.place(Vec2::new(f32::NAN, 10.0)), Vec2::new(30.0, 30.0));
}

#[test]
fn undersized_surface_centers_nodes() {
    let mapper = SpatialLayoutMapper::new(40.0, 20.0);
    assert_eq!(mapper.place(Vec2::new(500.0, -500.0)), Vec2::new(20.0, 10.0));
}

// ─── Edge Tests ───────────────────────────────────────────────

#[test]
fn dangling_communications_are_dropped() {
    let comms = vec![
        comm("a", "b", "TCP", LinkStatus::Normal),
        comm("a", "ghost", "UDP", LinkStatus::Normal),
        comm("ghost", "b", "DNS", LinkStatus::Normal),
    ];
    let frame = layout(&two_devices(), &comms, 800.0, 400.0);
    assert_eq!(frame.edges.len(), 1);
    assert_eq!(frame.edges[0].protocol, "TCP");
    for edge in &frame.edges {
        assert!(frame.node(&edge.source).is_some());
        assert!(frame.node(&edge.destination).is_some());
    }
}

#[test]
fn only_last_twenty_communications_are_considered() {
    let comms: Vec<_> = (0..25)
        .map(|i| comm("a", "b", &format!("p{i}"), LinkStatus::Normal))
        .collect();
    let frame = layout(&two_devices(), &comms, 800.0, 400.0);

    let protocols: Vec<_> = frame.edges.iter().map(|e| e.protocol.clone()).collect();
    let expected: Vec<_> = (5..25).map(|i| format!("p{i}")).collect();
    assert_eq!(protocols, expected);
}

#[test]
fn window_applies_before_filtering() {
    let mut comms = vec![comm("a", "b", "old", LinkStatus::Normal)];
    comms.extend((0..20).map(|_| comm("a", "ghost", "x", LinkStatus::Normal)));
    let frame = layout(&two_devices(), &comms, 800.0, 400.0);
    assert!(frame.edges.is_empty());
}

#[test]
fn anomalous_edges_are_dashed_and_red() {
    let comms = vec![
        comm("a", "b", "SSH", LinkStatus::Anomaly),
        comm("b", "a", "HTTP", LinkStatus::Suspicious),
        comm("a", "b", "HTTPS", LinkStatus::Normal),
    ];
    let frame = layout(&two_devices(), &comms, 800.0, 400.0);
    let dashed: Vec<_> = frame.edges.iter().map(|e| e.dashed).collect();
    assert_eq!(dashed, vec![true, false, false]);
    assert_eq!(frame.edges[0].color, Color::rgb(0xEF4444));
    assert_eq!(frame.edges[1].color, Color::rgb(0xF59E0B));
    assert_eq!(frame.edges[2].color, Color::rgb(0x22C55E));
}

#[test]
fn edge_endpoints_match_node_positions() {
    let comms = vec![comm("a", "b", "TCP", LinkStatus::Normal)];
    let frame = layout(&two_devices(), &comms, 1000.0, 500.0);
    let edge = &frame.edges[0];
    assert_eq!(edge.from, frame.node(&"a".into()).unwrap().position);
    assert_eq!(edge.to, frame.node(&"b".into()).unwrap().position);
    assert_eq!(edge.label_anchor, (edge.from + edge.to) * 0.5);
}

// ─── Node Tests ───────────────────────────────────────────────

#[test]
fn category_fill_with_gray_fallback() {
    assert_eq!(device_fill(&DeviceCategory::Server), Color::rgb(0x3B82F6));
    assert_eq!(device_fill(&DeviceCategory::Database), Color::rgb(0xEC4899));
    assert_eq!(device_fill(&DeviceCategory::Other("Toaster".into())), NEUTRAL_GRAY);

    let devices = vec![device("t", DeviceCategory::from("Toaster"), 10.0, 10.0)];
    let frame = layout(&devices, &[], 800.0, 400.0);
    assert_eq!(frame.nodes[0].fill, NEUTRAL_GRAY);
    assert_eq!(frame.nodes[0].glyph, Some('T'));
}

#[test]
fn badge_only_when_connections_active() {
    let mut devices = two_devices();
    devices[0].active_connections = 4;
    let frame = layout(&devices, &[], 800.0, 400.0);
    assert_eq!(frame.nodes[0].badge, Some(4));
    assert_eq!(frame.nodes[1].badge, None);
}

#[test]
fn anomalous_devices_pulse() {
    let mut devices = two_devices();
    devices[1].status = LinkStatus::Anomaly;
    let frame = layout(&devices, &[], 800.0, 400.0);
    assert!(!frame.nodes[0].pulsing);
    assert!(frame.nodes[1].pulsing);
    assert_eq!(frame.nodes[1].stroke, status_color(LinkStatus::Anomaly));
}

#[test]
fn selected_node_is_emphasized() {
    let mapper = SpatialLayoutMapper::new(800.0, 400.0);
    let selected = DeviceId::from("b");
    let frame = mapper.layout(&two_devices(), &[], Some(&selected));
    assert!(!frame.nodes[0].selected);
    assert!(frame.nodes[1].selected);
    assert_eq!(frame.nodes[1].stroke_width, 4.0);
    assert_eq!(frame.nodes[0].stroke_width, 2.0);
}

#[test]
fn empty_device_set_yields_empty_frame() {
    let comms = vec![comm("a", "b", "TCP", LinkStatus::Normal)];
    let frame = layout(&[], &comms, 800.0, 400.0);
    assert!(frame.nodes.is_empty());
    assert!(frame.edges.is_empty());
    assert!(frame.legend.is_empty());
}

#[test]
fn layout_is_idempotent() {
    let comms = vec![comm("a", "b", "TCP", LinkStatus::Suspicious)];
    let first = layout(&two_devices(), &comms, 640.0, 480.0);
    let second = layout(&two_devices(), &comms, 640.0, 480.0);
    assert_eq!(first, second);
}

#[test]
fn legend_has_three_rows() {
    let rows = legend();
    let labels: Vec<_> = rows.iter().map(|r| r.label).collect();
    assert_eq!(labels, vec!["Normal", "Suspicious", "Anomaly"]);
}

#[test]
fn color_serializes_as_hex() {
    assert_eq!(serde_json::to_string(&Color::rgb(0x22C55E)).unwrap(), "\"#22C55E\"");
    assert_eq!(Color::rgb(0x0000FF).hex(), "#0000FF");
}

// ─── Selection Tests ──────────────────────────────────────────

#[test]
fn selecting_twice_clears() {
    let mut selection = Selection::none();
    let x = DeviceId::from("x");
    assert_eq!(selection.toggle(&x), Some(&x));
    assert_eq!(selection.toggle(&x), None);
}

#[test]
fn selecting_other_replaces() {
    let mut selection = Selection::of("x".into());
    let y = DeviceId::from("y");
    selection.toggle(&y);
    assert!(selection.is_selected(&y));
    assert_eq!(toggled(Some(&y), &"z".into()), Some("z".into()));
}

// ─── Surface Tests ────────────────────────────────────────────

#[test]
fn headless_surface_counts_frames() {
    let mut surface = HeadlessSurface::new();
    surface.init(800.0, 400.0).unwrap();
    let frame = layout(&two_devices(), &[], 800.0, 400.0);
    surface.draw(&frame).unwrap();
    surface.draw(&frame).unwrap();
    assert_eq!(surface.frame_count(), 2);
    assert_eq!(surface.name(), "headless");
    assert_eq!(surface.last_frame(), Some(&frame));
    surface.finalize().unwrap();
}

#[test]
fn json_exporter_writes_frames() {
    let path = std::env::temp_dir().join(format!("netlens-layout-{}.json", std::process::id()));
    let path_str = path.to_string_lossy().to_string();

    let mut exporter = JsonLayoutExporter::new(&path_str);
    exporter.init(800.0, 400.0).unwrap();
    let comms = vec![comm("a", "b", "TCP", LinkStatus::Anomaly)];
    exporter.draw(&layout(&two_devices(), &comms, 800.0, 400.0)).unwrap();
    assert_eq!(exporter.frame_count(), 1);
    exporter.finalize().unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["frames"].as_array().unwrap().len(), 1);
    assert_eq!(written["frames"][0]["edges"][0]["dashed"], true);
    assert_eq!(written["frames"][0]["nodes"][0]["fill"], "#3B82F6");
    std::fs::remove_file(&path).ok();
}

// ─── Device Graph Tests ───────────────────────────────────────

#[test]
fn graph_click_toggles_and_notifies() {
    let mut graph = DeviceGraph::from_feed(DeviceFeed {
        devices: two_devices(),
        communications: Vec::new(),
    });
    let seen: Arc<Mutex<Vec<Option<String>>>> = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&seen);
    graph.on_select(move |id| log.lock().unwrap().push(id.map(|d| d.to_string())));

    graph.click(&"a".into());
    graph.click(&"b".into());
    graph.click(&"b".into());

    assert_eq!(
        *seen.lock().unwrap(),
        vec![Some("a".to_string()), Some("b".to_string()), None]
    );
    assert!(graph.selection().current().is_none());
}

#[test]
fn graph_redraw_reflects_selection() {
    let mut graph = DeviceGraph::from_feed(DeviceFeed {
        devices: two_devices(),
        communications: vec![comm("a", "b", "TCP", LinkStatus::Normal)],
    });
    let mut surface = HeadlessSurface::new();

    graph.click(&"a".into());
    graph.redraw(&mut surface, 800.0, 400.0).unwrap();

    let frame = surface.last_frame().unwrap();
    assert!(frame.node(&"a".into()).unwrap().selected);
    assert_eq!(frame.edges.len(), 1);
}

#[test]
fn graph_click_at_uses_hit_test() {
    let mut graph = DeviceGraph::from_feed(DeviceFeed {
        devices: two_devices(),
        communications: Vec::new(),
    });
    // Device "b" at (400, 200) in the reference frame maps to (400, 200) on 800×400.
    let hit = graph.click_at(Vec2::new(405.0, 195.0), 800.0, 400.0).cloned();
    assert_eq!(hit, Some("b".into()));

    let miss = graph
        .click_at(Vec2::new(700.0, 50.0 + NODE_RADIUS * 3.0), 800.0, 400.0)
        .cloned();
    assert_eq!(miss, Some("b".into()));
}
