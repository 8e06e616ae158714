//! Eventing - Picker Event Types

pub mod picker_event;
