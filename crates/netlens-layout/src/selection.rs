//! Device selection.

use netlens_types::DeviceId;

/// The currently selected device, if any.
///
/// Selecting the selected device clears the selection; selecting any
/// other device replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(Option<DeviceId>);

impl Selection {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn of(id: DeviceId) -> Self {
        Self(Some(id))
    }

    pub fn current(&self) -> Option<&DeviceId> {
        self.0.as_ref()
    }

    pub fn is_selected(&self, id: &DeviceId) -> bool {
        self.0.as_ref() == Some(id)
    }

    /// Applies a click on `id` and returns the new selection.
    pub fn toggle(&mut self, id: &DeviceId) -> Option<&DeviceId> {
        self.0 = toggled(self.current(), id);
        self.current()
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }
}

/// Selection that results from clicking `clicked` while `current` is selected.
pub fn toggled(current: Option<&DeviceId>, clicked: &DeviceId) -> Option<DeviceId> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked.clone())
    }
}
