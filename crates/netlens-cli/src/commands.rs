//! CLI command implementations.

use netlens_connector::clock::now_ms;
use netlens_connector::{DetectorEvent, ScriptedDetector, VisualizationConnector};
use netlens_io::validator::{validate_feed, validate_snapshot};
use netlens_io::{DeviceFeed, SimulationSnapshot};
use netlens_layout::{DeviceGraph, DrawSurface, HeadlessSurface, JsonLayoutExporter};
use netlens_projection::ProjectionConfig;
use netlens_types::DeviceId;

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Project one recorded snapshot through the full connector cycle.
pub fn project(
    input: &str,
    config_path: Option<&str>,
    now: Option<u64>,
    output_path: Option<&str>,
) -> CommandResult {
    println!("netlens Projection");
    println!("──────────────────");
    println!();

    let config = match config_path {
        Some(path) => {
            println!("Config:   {path}");
            ProjectionConfig::load(path)?
        }
        None => ProjectionConfig::default(),
    };

    let content = std::fs::read_to_string(input)?;
    let snapshot: SimulationSnapshot = serde_json::from_str(&content)?;

    let mut detector = ScriptedDetector::new();
    detector.push(DetectorEvent::SnnState(snapshot));
    let mut connector = VisualizationConnector::new(detector, &config)?;
    connector.pump_at(now.unwrap_or_else(now_ms))?;

    let visual = connector.visual_state();
    let activity = connector.neural_activity();
    let active_links = visual.connections.iter().filter(|c| c.active).count();

    println!("Input:        {input}");
    println!("Neurons:      {} ({} active)", activity.total_neurons, activity.active_neurons);
    println!("Connections:  {} ({} active)", visual.connections.len(), active_links);
    println!("Anomaly:      {:.3}", activity.anomaly_score);
    println!();

    let json = serde_json::to_string_pretty(&visual)?;
    match output_path {
        Some(path) => {
            std::fs::write(path, json)?;
            println!("Visual snapshot written to: {path}");
        }
        None => println!("{json}"),
    }

    Ok(())
}

/// Lay out a device feed for a surface of the given size.
pub fn layout(
    input: &str,
    width: f32,
    height: f32,
    select: Option<&str>,
    output_path: Option<&str>,
) -> CommandResult {
    println!("netlens Layout");
    println!("══════════════");
    println!();

    let content = std::fs::read_to_string(input)?;
    let feed: DeviceFeed = serde_json::from_str(&content)?;
    let mut graph = DeviceGraph::from_feed(feed);
    if let Some(id) = select {
        graph.click(&DeviceId::from(id));
    }

    let frame = graph.frame(width, height);
    println!("Surface:   {width} × {height}");
    println!("Nodes:     {}", frame.nodes.len());
    println!("Edges:     {}", frame.edges.len());
    if let Some(selected) = graph.selection().current() {
        println!("Selected:  {selected}");
    }
    println!();

    let mut surface: Box<dyn DrawSurface> = match output_path {
        Some(path) => Box::new(JsonLayoutExporter::new(path)),
        None => Box::new(HeadlessSurface::new()),
    };
    surface.init(width, height)?;
    graph.redraw(surface.as_mut(), width, height)?;
    surface.finalize()?;

    match output_path {
        Some(path) => println!("Layout written to: {path}"),
        None => println!("{}", serde_json::to_string_pretty(&frame)?),
    }

    Ok(())
}

/// Validate a config, snapshot, or feed.
pub fn validate(path: &str) -> CommandResult {
    println!("netlens Validator");
    println!("─────────────────");
    println!();

    if path.ends_with(".toml") {
        println!("Validating config: {path}");
        ProjectionConfig::load(path)?;
        println!("✅ Config is valid.");
    } else if path.ends_with(".json") {
        let content = std::fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&content)?;
        if value.get("devices").is_some() {
            println!("Validating device feed: {path}");
            let feed: DeviceFeed = serde_json::from_value(value)?;
            match validate_feed(&feed) {
                Ok(()) => println!(
                    "✅ Feed is valid ({} devices, {} communications).",
                    feed.devices.len(),
                    feed.communications.len()
                ),
                Err(e) => println!("❌ Feed validation failed: {e}"),
            }
        } else {
            println!("Validating engine snapshot: {path}");
            let snapshot: SimulationSnapshot = serde_json::from_value(value)?;
            match validate_snapshot(&snapshot) {
                Ok(()) => println!(
                    "✅ Snapshot is valid ({} neurons, {} connections).",
                    snapshot.neurons.len(),
                    snapshot.connections.len()
                ),
                Err(e) => println!("❌ Snapshot validation failed: {e}"),
            }
        }
    } else {
        println!("Unsupported file format. Use .toml (config) or .json (snapshot/feed).");
    }

    Ok(())
}
