//! Spatial layout of the device graph.
//!
//! Logical device positions live in an 800×400 reference frame but are
//! not bounded by it. Positions are scaled to the surface and clamped to
//! a 30-unit inset, so nothing is ever drawn outside the viewport no
//! matter how large the input coordinates are. The mapper is stateless:
//! identical inputs produce identical frames.

use std::collections::HashMap;

use glam::Vec2;
use serde::Serialize;

use netlens_io::{CommunicationRecord, Device};
use netlens_types::constants::{
    COMMUNICATION_WINDOW, REFERENCE_HEIGHT, REFERENCE_WIDTH, SURFACE_MARGIN,
};
use netlens_types::{DeviceCategory, DeviceId, LinkStatus, Scalar};

use crate::palette::{self, Color, LegendEntry};

/// Radius of a device node.
pub const NODE_RADIUS: Scalar = 20.0;

/// Rim width of an unselected node.
pub const NODE_STROKE: Scalar = 2.0;

/// Rim width of the selected node.
pub const SELECTED_NODE_STROKE: Scalar = 4.0;

/// A device ready to be drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutNode {
    pub id: DeviceId,
    pub category: DeviceCategory,
    pub status: LinkStatus,
    /// Surface position, inside the margin.
    pub position: Vec2,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: Scalar,
    pub selected: bool,
    /// Active-connection count, present only when non-zero.
    pub badge: Option<u32>,
    /// First character of the category label.
    pub glyph: Option<char>,
    /// Anomalous devices pulse.
    pub pulsing: bool,
}

/// A communication ready to be drawn. Both endpoints resolved to devices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutEdge {
    pub source: DeviceId,
    pub destination: DeviceId,
    pub from: Vec2,
    pub to: Vec2,
    pub protocol: String,
    pub status: LinkStatus,
    pub color: Color,
    /// Dashed iff the communication is anomalous.
    pub dashed: bool,
    pub anomaly_score: Scalar,
    /// Where the protocol label goes (segment midpoint).
    pub label_anchor: Vec2,
}

/// Everything a surface needs for one redraw. Edges are drawn first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutFrame {
    pub width: Scalar,
    pub height: Scalar,
    pub edges: Vec<LayoutEdge>,
    pub nodes: Vec<LayoutNode>,
    pub legend: Vec<LegendEntry>,
}

impl LayoutFrame {
    /// Looks up a node by device id.
    pub fn node(&self, id: &DeviceId) -> Option<&LayoutNode> {
        self.nodes.iter().find(|n| &n.id == id)
    }
}

/// Maps logical device coordinates onto a surface of fixed size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialLayoutMapper {
    width: Scalar,
    height: Scalar,
}

impl SpatialLayoutMapper {
    pub fn new(width: Scalar, height: Scalar) -> Self {
        Self { width, height }
    }

    /// Scales a logical position to the surface and clamps it to the margin.
    pub fn place(&self, logical: Vec2) -> Vec2 {
        Vec2::new(
            clamp_axis(logical.x * (self.width / REFERENCE_WIDTH), self.width),
            clamp_axis(logical.y * (self.height / REFERENCE_HEIGHT), self.height),
        )
    }

    /// Lays out the device graph.
    ///
    /// Only the last 20 communications are considered. A communication
    /// naming an unknown device is dropped. When device ids repeat, the
    /// first device with that id is the one edges attach to.
    pub fn layout(
        &self,
        devices: &[Device],
        communications: &[CommunicationRecord],
        selected: Option<&DeviceId>,
    ) -> LayoutFrame {
        if devices.is_empty() {
            return LayoutFrame {
                width: self.width,
                height: self.height,
                edges: Vec::new(),
                nodes: Vec::new(),
                legend: Vec::new(),
            };
        }

        let mut by_id: HashMap<&DeviceId, &Device> = HashMap::with_capacity(devices.len());
        for device in devices {
            by_id.entry(&device.id).or_insert(device);
        }

        let recent = &communications[communications.len().saturating_sub(COMMUNICATION_WINDOW)..];
        let edges: Vec<LayoutEdge> = recent
            .iter()
            .filter_map(|record| {
                let source = by_id.get(&record.source)?;
                let destination = by_id.get(&record.destination)?;
                Some(self.edge(record, source, destination))
            })
            .collect();

        let dropped = recent.len() - edges.len();
        if dropped > 0 {
            tracing::debug!(dropped, "communications with unknown devices filtered");
        }

        let nodes = devices
            .iter()
            .map(|device| self.node(device, selected))
            .collect();

        LayoutFrame {
            width: self.width,
            height: self.height,
            edges,
            nodes,
            legend: palette::legend(),
        }
    }

    fn edge(&self, record: &CommunicationRecord, source: &Device, destination: &Device) -> LayoutEdge {
        let from = self.place(source.position);
        let to = self.place(destination.position);
        LayoutEdge {
            source: record.source.clone(),
            destination: record.destination.clone(),
            from,
            to,
            protocol: record.protocol.clone(),
            status: record.status,
            color: palette::status_color(record.status),
            dashed: record.status == LinkStatus::Anomaly,
            anomaly_score: record.anomaly_score,
            label_anchor: (from + to) * 0.5,
        }
    }

    fn node(&self, device: &Device, selected: Option<&DeviceId>) -> LayoutNode {
        if device.category.is_other() {
            tracing::warn!(
                device = %device.id,
                category = device.category.label(),
                "unknown device category, using neutral fill"
            );
        }
        let is_selected = selected == Some(&device.id);
        LayoutNode {
            id: device.id.clone(),
            category: device.category.clone(),
            status: device.status,
            position: self.place(device.position),
            fill: palette::device_fill(&device.category),
            stroke: palette::status_color(device.status),
            stroke_width: if is_selected { SELECTED_NODE_STROKE } else { NODE_STROKE },
            selected: is_selected,
            badge: (device.active_connections > 0).then_some(device.active_connections),
            glyph: device.category.label().chars().next(),
            pulsing: device.status == LinkStatus::Anomaly,
        }
    }
}

/// Lays out devices and communications on a `width × height` surface with
/// nothing selected.
pub fn layout(
    devices: &[Device],
    communications: &[CommunicationRecord],
    width: Scalar,
    height: Scalar,
) -> LayoutFrame {
    SpatialLayoutMapper::new(width, height).layout(devices, communications, None)
}

/// Clamps one axis to `[margin, dimension - margin]`.
///
/// A surface too small to hold both margins centers everything; a NaN
/// coordinate lands on the low margin.
fn clamp_axis(value: Scalar, dimension: Scalar) -> Scalar {
    let dimension = if dimension.is_finite() { dimension.max(0.0) } else { 0.0 };
    let lo = SURFACE_MARGIN;
    let hi = dimension - SURFACE_MARGIN;
    if hi < lo {
        return dimension / 2.0;
    }
    if value.is_nan() {
        return lo;
    }
    value.clamp(lo, hi)
}
