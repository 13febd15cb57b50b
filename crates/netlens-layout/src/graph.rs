//! Interactive device-graph component.
//!
//! Holds the current feed and selection, redraws onto a [`DrawSurface`]
//! at whatever size the surface currently has, and turns clicks into
//! selection changes reported through a callback.

use glam::Vec2;

use netlens_io::{CommunicationRecord, Device, DeviceFeed};
use netlens_types::{DeviceId, NetlensResult, Scalar};

use crate::mapper::{LayoutFrame, SpatialLayoutMapper, NODE_RADIUS};
use crate::selection::Selection;
use crate::surface::DrawSurface;

type SelectCallback = Box<dyn FnMut(Option<&DeviceId>) + Send>;

/// A device graph bound to a feed and a selection.
#[derive(Default)]
pub struct DeviceGraph {
    devices: Vec<Device>,
    communications: Vec<CommunicationRecord>,
    selection: Selection,
    on_select: Option<SelectCallback>,
}

impl DeviceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph over a feed.
    pub fn from_feed(feed: DeviceFeed) -> Self {
        Self {
            devices: feed.devices,
            communications: feed.communications,
            ..Self::default()
        }
    }

    /// Registers the selection callback, replacing any previous one.
    pub fn on_select<F>(&mut self, callback: F)
    where
        F: FnMut(Option<&DeviceId>) + Send + 'static,
    {
        self.on_select = Some(Box::new(callback));
    }

    pub fn set_devices(&mut self, devices: Vec<Device>) {
        self.devices = devices;
    }

    pub fn set_communications(&mut self, communications: Vec<CommunicationRecord>) {
        self.communications = communications;
    }

    /// Appends one communication (most recent last).
    pub fn push_communication(&mut self, record: CommunicationRecord) {
        self.communications.push(record);
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Computes the frame for a surface of the given size.
    pub fn frame(&self, width: Scalar, height: Scalar) -> LayoutFrame {
        SpatialLayoutMapper::new(width, height).layout(
            &self.devices,
            &self.communications,
            self.selection.current(),
        )
    }

    /// Lays out the graph and draws it.
    pub fn redraw(
        &self,
        surface: &mut dyn DrawSurface,
        width: Scalar,
        height: Scalar,
    ) -> NetlensResult<()> {
        surface.draw(&self.frame(width, height))
    }

    /// Handles a click on a device node and reports the new selection.
    pub fn click(&mut self, id: &DeviceId) -> Option<&DeviceId> {
        self.selection.toggle(id);
        if let Some(callback) = self.on_select.as_mut() {
            callback(self.selection.current());
        }
        self.selection.current()
    }

    /// Topmost node under a surface point. Later nodes are drawn on top.
    pub fn hit_test(&self, point: Vec2, width: Scalar, height: Scalar) -> Option<DeviceId> {
        let mapper = SpatialLayoutMapper::new(width, height);
        self.devices
            .iter()
            .rev()
            .find(|d| mapper.place(d.position).distance(point) <= NODE_RADIUS)
            .map(|d| d.id.clone())
    }

    /// Handles a click at a surface point. Clicks on empty space are ignored.
    pub fn click_at(&mut self, point: Vec2, width: Scalar, height: Scalar) -> Option<&DeviceId> {
        match self.hit_test(point, width, height) {
            Some(id) => self.click(&id),
            None => self.selection.current(),
        }
    }
}
