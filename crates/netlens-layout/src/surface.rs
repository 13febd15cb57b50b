//! DrawSurface trait and HeadlessSurface stub.
//!
//! A surface is handed one [`LayoutFrame`] per redraw. The headless
//! surface discards every frame, serving as a no-op for tests and CI.

use netlens_types::{NetlensResult, Scalar};

use crate::mapper::LayoutFrame;

/// Trait for anything that draws layout frames.
///
/// # Implementations
/// - [`HeadlessSurface`] — Discards frames (tests, CI)
/// - [`JsonLayoutExporter`](crate::JsonLayoutExporter) — Writes frames to a JSON file
pub trait DrawSurface: Send {
    /// Initialize the surface with its dimensions.
    fn init(&mut self, width: Scalar, height: Scalar) -> NetlensResult<()>;

    /// Draw one frame, replacing whatever was drawn before.
    fn draw(&mut self, frame: &LayoutFrame) -> NetlensResult<()>;

    /// Finalize drawing (flush buffers, close files, etc.).
    fn finalize(&mut self) -> NetlensResult<()>;

    /// Returns the surface name.
    fn name(&self) -> &str;

    /// Returns the number of frames drawn.
    fn frame_count(&self) -> u32;
}

/// Headless surface — keeps only the most recent frame.
#[derive(Default)]
pub struct HeadlessSurface {
    frames: u32,
    last: Option<LayoutFrame>,
}

impl HeadlessSurface {
    /// Creates a new headless surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently drawn frame.
    pub fn last_frame(&self) -> Option<&LayoutFrame> {
        self.last.as_ref()
    }
}

impl DrawSurface for HeadlessSurface {
    fn init(&mut self, _width: Scalar, _height: Scalar) -> NetlensResult<()> {
        Ok(())
    }

    fn draw(&mut self, frame: &LayoutFrame) -> NetlensResult<()> {
        self.frames += 1;
        self.last = Some(frame.clone());
        Ok(())
    }

    fn finalize(&mut self) -> NetlensResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
