//! JSON layout exporter — writes every drawn frame for offline inspection.
//!
//! Implements the `DrawSurface` trait. Frames are buffered and written as
//! one JSON document on `finalize()`.

use serde::Serialize;

use netlens_types::{NetlensError, NetlensResult, Scalar};

use crate::mapper::LayoutFrame;
use crate::surface::DrawSurface;

#[derive(Serialize)]
struct LayoutRecording<'a> {
    width: Scalar,
    height: Scalar,
    frames: &'a [LayoutFrame],
}

/// Exports layout frames to a JSON file.
///
/// Usage:
/// ```text
/// let mut exporter = JsonLayoutExporter::new("layout.json");
/// exporter.init(1024.0, 600.0)?;
/// // ... call draw() on every redraw ...
/// exporter.finalize()?; // Writes the JSON file
/// ```
pub struct JsonLayoutExporter {
    output_path: String,
    width: Scalar,
    height: Scalar,
    frames: Vec<LayoutFrame>,
}

impl JsonLayoutExporter {
    /// Creates a new exporter that will write to the given path.
    pub fn new(output_path: &str) -> Self {
        Self {
            output_path: output_path.to_string(),
            width: 0.0,
            height: 0.0,
            frames: Vec::new(),
        }
    }

    /// Renders the buffered frames as a JSON string.
    pub fn to_json(&self) -> NetlensResult<String> {
        let recording = LayoutRecording {
            width: self.width,
            height: self.height,
            frames: &self.frames,
        };
        serde_json::to_string_pretty(&recording)
            .map_err(|e| NetlensError::Serialization(format!("JSON serialization failed: {e}")))
    }
}

impl DrawSurface for JsonLayoutExporter {
    fn init(&mut self, width: Scalar, height: Scalar) -> NetlensResult<()> {
        self.width = width;
        self.height = height;
        Ok(())
    }

    fn draw(&mut self, frame: &LayoutFrame) -> NetlensResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn finalize(&mut self) -> NetlensResult<()> {
        let json = self.to_json()?;
        std::fs::write(&self.output_path, json)?;
        tracing::info!(path = %self.output_path, frames = self.frames.len(), "layout exported");
        self.frames.clear();
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn frame_count(&self) -> u32 {
        self.frames.len() as u32
    }
}
