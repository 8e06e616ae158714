//! Navigator - Host Location-Assignment Seam
//!
//! Abstraction over the host environment's location facility. Selecting a
//! language performs a full navigation through this trait; the picker
//! never touches the host directly.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local};

/// Host navigation facility
///
/// `assign` is fire-and-forget: the browsing context is expected to be
/// torn down or replaced, so there is nothing to return and no failure
/// to report.
pub trait Navigator: Send {
    /// Navigate to the given path
    fn assign(&mut self, path: &str);
}

/// Closures serve directly as host adapters
impl<F> Navigator for F
where
    F: FnMut(&str) + Send,
{
    fn assign(&mut self, path: &str) {
        self(path)
    }
}

/// A navigation performed through a [`RecordingNavigator`]
#[derive(Debug, Clone)]
pub struct Visit {
    /// Path that was assigned
    pub path: String,
    /// When the assignment happened
    pub at: DateTime<Local>,
}

/// Navigator that records every assignment for later inspection
///
/// Clones share the same record, so a handle kept outside the picker
/// observes everything the picker assigns. Useful in tests and headless
/// hosts.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visits: Arc<Mutex<Vec<Visit>>>,
}

impl RecordingNavigator {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// All visits so far, oldest first
    pub fn visits(&self) -> Vec<Visit> {
        self.visits.lock().expect("visit record poisoned").clone()
    }

    /// Paths assigned so far, oldest first
    pub fn paths(&self) -> Vec<String> {
        self.visits
            .lock()
            .expect("visit record poisoned")
            .iter()
            .map(|visit| visit.path.clone())
            .collect()
    }

    /// Most recently assigned path
    pub fn last_path(&self) -> Option<String> {
        self.visits
            .lock()
            .expect("visit record poisoned")
            .last()
            .map(|visit| visit.path.clone())
    }

    /// Number of assignments recorded
    pub fn len(&self) -> usize {
        self.visits.lock().expect("visit record poisoned").len()
    }

    /// Whether nothing was assigned yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Navigator for RecordingNavigator {
    fn assign(&mut self, path: &str) {
        self.visits
            .lock()
            .expect("visit record poisoned")
            .push(Visit {
                path: path.to_string(),
                at: Local::now(),
            });
    }
}

/// Navigator that discards assignments
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn assign(&mut self, _path: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_adapter() {
        let mut seen = Vec::new();
        {
            let mut navigator = |path: &str| seen.push(path.to_string());
            navigator.assign("/fr-FR/about");
        }
        assert_eq!(seen, vec!["/fr-FR/about"]);
    }

    #[test]
    fn test_recording_navigator_shares_record() {
        let recorder = RecordingNavigator::new();
        let mut handle = recorder.clone();
        handle.assign("/a");
        handle.assign("/b");

        assert_eq!(recorder.paths(), vec!["/a", "/b"]);
        assert_eq!(recorder.last_path().as_deref(), Some("/b"));
        assert_eq!(recorder.len(), 2);
    }

    #[test]
    fn test_noop_navigator() {
        let mut navigator = NoopNavigator;
        navigator.assign("/anywhere");
    }
}
