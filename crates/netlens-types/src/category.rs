//! Discrete visual categories.
//!
//! Every category a renderer keys a style on is a closed enum with a total
//! mapping. `DeviceCategory::Other` is the one explicit escape hatch for
//! categories the palette does not know.

use serde::{Deserialize, Serialize};

/// Display state of a neuron.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationState {
    Inactive,
    Active,
    Refractory,
}

/// Health status of a device or a communication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStatus {
    Normal,
    Suspicious,
    Anomaly,
}

impl LinkStatus {
    pub const ALL: [Self; 3] = [Self::Normal, Self::Suspicious, Self::Anomaly];

    /// Human-readable label used by legends.
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Suspicious => "Suspicious",
            Self::Anomaly => "Anomaly",
        }
    }
}

/// Kind of monitored device.
///
/// Serialized as the dashboard's display string ("Server", "IoT Device", ...).
/// Any unrecognized string deserializes to [`DeviceCategory::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeviceCategory {
    Server,
    Workstation,
    Router,
    IotDevice,
    Mobile,
    Printer,
    Database,
    Other(String),
}

impl DeviceCategory {
    /// Display string of the category.
    pub fn label(&self) -> &str {
        match self {
            Self::Server => "Server",
            Self::Workstation => "Workstation",
            Self::Router => "Router",
            Self::IotDevice => "IoT Device",
            Self::Mobile => "Mobile",
            Self::Printer => "Printer",
            Self::Database => "Database",
            Self::Other(label) => label,
        }
    }

    /// Returns true for categories outside the known palette.
    pub fn is_other(&self) -> bool {
        matches!(self, Self::Other(_))
    }
}

impl From<String> for DeviceCategory {
    fn from(val: String) -> Self {
        match val.as_str() {
            "Server" => Self::Server,
            "Workstation" => Self::Workstation,
            "Router" => Self::Router,
            "IoT Device" => Self::IotDevice,
            "Mobile" => Self::Mobile,
            "Printer" => Self::Printer,
            "Database" => Self::Database,
            _ => Self::Other(val),
        }
    }
}

impl From<&str> for DeviceCategory {
    fn from(val: &str) -> Self {
        Self::from(val.to_string())
    }
}

impl From<DeviceCategory> for String {
    fn from(val: DeviceCategory) -> Self {
        match val {
            DeviceCategory::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}
