//! Error types for locale-picker
//!
//! Centralized error handling using snafu for ergonomic error definitions.
//! All variants are construction or parse time failures; once a picker is
//! built, its operations are total and never surface an `Error`.

use snafu::Snafu;

/// Main error type for the crate
#[derive(Debug, Snafu)]
pub enum Error {
    /// A language code appears more than once in the table
    #[snafu(display("Duplicate language code: {code}"))]
    DuplicateCode { code: String },

    /// A language code is empty or not usable as a path segment
    #[snafu(display("Invalid language code: {code:?}"))]
    InvalidCode { code: String },

    /// The designated default code is not part of the table
    #[snafu(display("Default language {code:?} is not registered"))]
    UnknownDefault { code: String },

    /// The language table has no entries
    #[snafu(display("Language registry is empty"))]
    EmptyRegistry,

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
