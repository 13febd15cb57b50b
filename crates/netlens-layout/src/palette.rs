//! Fixed color palettes.
//!
//! Both lookups are total: every status has a color, and every device
//! category has a fill, with unknown categories falling back to
//! [`NEUTRAL_GRAY`].

use std::fmt;

use serde::{Serialize, Serializer};

use netlens_types::{DeviceCategory, LinkStatus};

/// An opaque 24-bit RGB color. Serialized as `"#RRGGBB"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const fn rgb(hex: u32) -> Self {
        Self(hex & 0x00ff_ffff)
    }

    /// CSS hex notation.
    pub fn hex(self) -> String {
        format!("#{:06X}", self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

/// Fill used for categories outside the palette.
pub const NEUTRAL_GRAY: Color = Color::rgb(0x6B7280);

/// Fill color of a device node.
pub fn device_fill(category: &DeviceCategory) -> Color {
    match category {
        DeviceCategory::Server => Color::rgb(0x3B82F6),
        DeviceCategory::Workstation => Color::rgb(0x10B981),
        DeviceCategory::Router => Color::rgb(0xF59E0B),
        DeviceCategory::IotDevice => Color::rgb(0x8B5CF6),
        DeviceCategory::Mobile => Color::rgb(0xEF4444),
        DeviceCategory::Printer => Color::rgb(0x6B7280),
        DeviceCategory::Database => Color::rgb(0xEC4899),
        DeviceCategory::Other(_) => NEUTRAL_GRAY,
    }
}

/// Stroke color keyed by status, shared by edges, node rims and the legend.
pub fn status_color(status: LinkStatus) -> Color {
    match status {
        LinkStatus::Normal => Color::rgb(0x22C55E),
        LinkStatus::Suspicious => Color::rgb(0xF59E0B),
        LinkStatus::Anomaly => Color::rgb(0xEF4444),
    }
}

/// Badge fill for active-connection counts.
pub const BADGE_FILL: Color = Color::rgb(0xEF4444);

/// One row of the status legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub status: LinkStatus,
    pub color: Color,
}

/// The three-row status legend, in severity order.
pub fn legend() -> Vec<LegendEntry> {
    LinkStatus::ALL
        .iter()
        .map(|&status| LegendEntry {
            label: status.label(),
            status,
            color: status_color(status),
        })
        .collect()
}
