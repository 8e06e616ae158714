//! Locale Picker Library
//!
//! This crate provides the state and URL plumbing behind a language-selection
//! dropdown: detecting the active locale from the current URL path, rewriting
//! the path when the user picks another language, and notifying the embedding
//! UI of every state change through an event channel.

pub mod config;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod helpers;
pub mod navigator;
pub mod picker;
pub mod registry;
pub mod routing;
pub mod state;

pub use config::RegistryConfig;
pub use domain::language::LanguageEntry;
pub use domain::location::PageLocation;
pub use error::{Error, Result};
pub use eventing::picker_event::PickerEvent;
pub use navigator::{Navigator, NoopNavigator, RecordingNavigator};
pub use picker::LanguagePicker;
pub use registry::LanguageRegistry;
