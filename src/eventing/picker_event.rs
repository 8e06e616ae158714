//! PickerEvent - Controller Event Enum
//!
//! All events emitted by the picker controller to the UI layer.

use chrono::{DateTime, Local};

/// Picker events for controller -> UI communication
#[derive(Debug, Clone, PartialEq)]
pub enum PickerEvent {
    /// The active language changed after a location update
    LanguageChanged {
        /// Code of the newly active language
        code: String,
    },

    /// The dropdown was opened or closed
    DropdownToggled {
        /// New open state
        open: bool,
    },

    /// A full navigation to a rewritten path was requested
    NavigationRequested {
        /// Target path handed to the navigator
        path: String,
        /// When the request was issued
        at: DateTime<Local>,
    },
}

impl PickerEvent {
    /// Create a navigation event stamped with the current time
    pub fn navigation(path: impl Into<String>) -> Self {
        Self::NavigationRequested {
            path: path.into(),
            at: Local::now(),
        }
    }
}
