//! LanguageEntry - A Selectable Language

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A language offered by the picker dropdown
///
/// Entries are static configuration: defined once at startup and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LanguageEntry {
    /// Locale code, doubling as the URL path prefix (e.g. "fr-FR")
    pub code: String,
    /// Native display name (e.g. "Français")
    pub label: String,
    /// Flag glyph shown next to the label
    pub flag: String,
    /// Compact label for collapsed pickers (e.g. "FR")
    pub short_label: String,
}

impl LanguageEntry {
    /// Create a new entry
    pub fn new(
        code: impl Into<String>,
        label: impl Into<String>,
        flag: impl Into<String>,
        short_label: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            flag: flag.into(),
            short_label: short_label.into(),
        }
    }
}
