//! Registry Configuration
//!
//! Serde-facing shape of the language table. The table is static
//! configuration: hosts declare it once, in TOML or JSON, and hand the
//! validated registry to the picker at startup. Parsing is string-based;
//! this crate performs no file access.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::language::LanguageEntry;
use crate::error::Result;
use crate::registry::LanguageRegistry;

/// Declarative language table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RegistryConfig {
    /// Code of the language served without a URL prefix
    pub default: String,
    /// Languages in dropdown display order
    pub languages: Vec<LanguageEntry>,
}

impl RegistryConfig {
    /// Parse from a TOML document
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Parse from a JSON document
    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Serialize to a TOML document
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Serialize to a JSON document
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate into a usable registry
    pub fn build(self) -> Result<LanguageRegistry> {
        LanguageRegistry::new(self.default, self.languages)
    }
}

impl From<&LanguageRegistry> for RegistryConfig {
    fn from(registry: &LanguageRegistry) -> Self {
        Self {
            default: registry.default_code().to_string(),
            languages: registry.iter().cloned().collect(),
        }
    }
}
