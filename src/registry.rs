//! LanguageRegistry - Ordered Language Table
//!
//! Insertion-ordered mapping from locale code to entry. Insertion order
//! defines the dropdown display order; one code is designated as the
//! default and is never shown as a URL path prefix.

use ahash::RandomState;
use hashlink::LinkedHashMap;

use crate::domain::language::LanguageEntry;
use crate::error::{Error, Result};

/// Ordered language table with a designated default
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    /// Code served without a URL prefix
    default_code: String,
    /// Entries keyed by code, in declaration order
    entries: LinkedHashMap<String, LanguageEntry, RandomState>,
}

impl LanguageRegistry {
    /// Build a registry from entries, designating `default_code`
    ///
    /// Codes must be unique, non-empty and usable as a single path
    /// segment; the default code must be one of the entries.
    pub fn new(default_code: impl Into<String>, languages: Vec<LanguageEntry>) -> Result<Self> {
        let default_code = default_code.into();
        let mut entries = LinkedHashMap::with_hasher(RandomState::new());

        for language in languages {
            if language.code.is_empty() || language.code.contains('/') {
                return Err(Error::InvalidCode {
                    code: language.code,
                });
            }
            if entries.contains_key(&language.code) {
                return Err(Error::DuplicateCode {
                    code: language.code,
                });
            }
            entries.insert(language.code.clone(), language);
        }

        if entries.is_empty() {
            return Err(Error::EmptyRegistry);
        }
        if !entries.contains_key(&default_code) {
            return Err(Error::UnknownDefault { code: default_code });
        }

        Ok(Self {
            default_code,
            entries,
        })
    }

    /// The built-in production table: English (default) and French
    pub fn builtin() -> Self {
        let mut entries = LinkedHashMap::with_hasher(RandomState::new());
        for language in [
            LanguageEntry::new("en", "English", "🇺🇸", "EN"),
            LanguageEntry::new("fr-FR", "Français", "🇫🇷", "FR"),
        ] {
            entries.insert(language.code.clone(), language);
        }
        Self {
            default_code: "en".to_string(),
            entries,
        }
    }

    /// Code of the default language
    pub fn default_code(&self) -> &str {
        &self.default_code
    }

    /// Entry for the default language
    pub fn default_language(&self) -> &LanguageEntry {
        self.entries
            .get(&self.default_code)
            .expect("default code is registered")
    }

    /// Look up an entry by code
    pub fn get(&self, code: &str) -> Option<&LanguageEntry> {
        self.entries.get(code)
    }

    /// Whether a code is part of the table
    pub fn is_registered(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// Whether a code is the designated default
    pub fn is_default(&self, code: &str) -> bool {
        code == self.default_code
    }

    /// Entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &LanguageEntry> {
        self.entries.values()
    }

    /// Codes in declaration order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of registered languages
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty (never true for a constructed registry)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
