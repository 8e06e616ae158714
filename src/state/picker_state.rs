//! PickerState - Language Picker UI State

/// UI state owned by the language picker
///
/// `current_code` is always a code registered in the picker's language
/// table; the controller re-derives it from the observed location and
/// never stores anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerState {
    /// Code of the currently active language
    pub current_code: String,
    /// Whether the dropdown is open
    pub dropdown_open: bool,
}

impl PickerState {
    /// Create state for the given active language, dropdown closed
    pub fn new(current_code: impl Into<String>) -> Self {
        Self {
            current_code: current_code.into(),
            dropdown_open: false,
        }
    }

    /// Set the active language, returning whether it actually changed
    pub fn set_language(&mut self, code: &str) -> bool {
        if self.current_code == code {
            return false;
        }
        self.current_code = code.to_string();
        true
    }

    /// Flip the dropdown flag, returning the new value
    pub fn toggle_dropdown(&mut self) -> bool {
        self.dropdown_open = !self.dropdown_open;
        self.dropdown_open
    }

    /// Close the dropdown
    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }
}
