//! # netlens-layout
//!
//! Device-graph layout for netlens.
//!
//! [`SpatialLayoutMapper`] turns devices and their communication log into
//! positioned, styled nodes and edges that always fit the drawing surface.
//! A [`DrawSurface`] consumes the resulting [`LayoutFrame`]s; the
//! [`HeadlessSurface`] discards them and the [`JsonLayoutExporter`] writes
//! them to disk. [`DeviceGraph`] ties a feed, a selection, and a surface
//! together the way an interactive view does.

pub mod graph;
pub mod json_exporter;
pub mod mapper;
pub mod palette;
pub mod selection;
pub mod surface;

pub use graph::DeviceGraph;
pub use json_exporter::JsonLayoutExporter;
pub use mapper::{layout, LayoutEdge, LayoutFrame, LayoutNode, SpatialLayoutMapper};
pub use palette::{Color, LegendEntry};
pub use selection::Selection;
pub use surface::{DrawSurface, HeadlessSurface};
