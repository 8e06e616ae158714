//! LanguagePicker - Picker State Controller
//!
//! Binds the observed page location, the language table and the dropdown
//! state together. Location updates are pushed in over an event channel
//! and applied on the host's event tick; every state transition is
//! mirrored out as a [`PickerEvent`] for the embedding UI.

use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};

use crate::domain::language::LanguageEntry;
use crate::domain::location::PageLocation;
use crate::eventing::picker_event::PickerEvent;
use crate::navigator::Navigator;
use crate::registry::LanguageRegistry;
use crate::routing;
use crate::state::picker_state::PickerState;

/// Stateful URL-locale binder driving a language-selection dropdown
pub struct LanguagePicker {
    /// Language table, shared with the embedding UI
    registry: Arc<LanguageRegistry>,
    /// Controller-owned UI state
    state: PickerState,
    /// Last observed location
    location: PageLocation,
    /// Host navigation facility
    navigator: Box<dyn Navigator>,
    /// Inbound location notifications
    location_tx: Sender<PageLocation>,
    location_rx: Receiver<PageLocation>,
    /// Outbound state-change events
    events_tx: Sender<PickerEvent>,
    events_rx: Receiver<PickerEvent>,
}

impl LanguagePicker {
    /// Create a picker observing `location`
    ///
    /// The active language is derived from the location immediately; the
    /// dropdown starts closed. No events are emitted for initialization.
    pub fn new(
        registry: Arc<LanguageRegistry>,
        location: impl Into<PageLocation>,
        navigator: impl Navigator + 'static,
    ) -> Self {
        let location = location.into();
        let (location_tx, location_rx) = crossbeam_channel::unbounded();
        let (events_tx, events_rx) = crossbeam_channel::unbounded();
        let current = detect_code(&registry, &location);

        Self {
            state: PickerState::new(current),
            registry,
            location,
            navigator: Box::new(navigator),
            location_tx,
            location_rx,
            events_tx,
            events_rx,
        }
    }

    /// Sender for upstream location-change notifications
    ///
    /// Clones freely. Pushed locations are applied, in order, on the next
    /// [`process_pending`](Self::process_pending) call.
    pub fn location_sender(&self) -> Sender<PageLocation> {
        self.location_tx.clone()
    }

    /// Receiver for outbound state-change events
    pub fn events(&self) -> Receiver<PickerEvent> {
        self.events_rx.clone()
    }

    /// Drain pending location notifications, applying each in order
    ///
    /// Call from the host's event tick. Returns the number of
    /// notifications applied.
    pub fn process_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(location) = self.location_rx.try_recv() {
            self.on_location_changed(location);
            applied += 1;
        }
        applied
    }

    /// Re-derive the active language from a new location
    pub fn on_location_changed(&mut self, location: impl Into<PageLocation>) {
        self.location = location.into();
        let code = detect_code(&self.registry, &self.location);
        if self.state.set_language(&code) {
            tracing::debug!(%code, "active language changed");
            self.emit(PickerEvent::LanguageChanged { code });
        }
    }

    /// Flip the dropdown open/closed
    pub fn toggle_dropdown(&mut self) {
        let open = self.state.toggle_dropdown();
        self.emit(PickerEvent::DropdownToggled { open });
    }

    /// Close the dropdown without selecting
    pub fn close_dropdown(&mut self) {
        if self.state.dropdown_open {
            self.state.close_dropdown();
            self.emit(PickerEvent::DropdownToggled { open: false });
        }
    }

    /// Select a language: close the dropdown, rewrite the live path and
    /// request a full navigation
    ///
    /// Unregistered codes are ignored. Without a usable pathname the
    /// selection degrades to a no-op navigation; the dropdown still
    /// closes.
    pub fn select_language(&mut self, code: &str) {
        self.close_dropdown();

        if !self.registry.is_registered(code) {
            tracing::warn!(%code, "ignoring selection of unregistered language");
            return;
        }

        let Some(target) = self.rewrite_target(code) else {
            tracing::debug!(%code, "location unavailable, skipping navigation");
            return;
        };

        tracing::info!(%code, to = %target, "navigating to language");
        self.navigator.assign(&target);
        self.emit(PickerEvent::navigation(target));
    }

    /// Code of the currently active language
    pub fn current_code(&self) -> &str {
        &self.state.current_code
    }

    /// Entry for the currently active language
    pub fn current_language(&self) -> &LanguageEntry {
        self.registry
            .get(&self.state.current_code)
            .expect("active code is registered")
    }

    /// Whether the dropdown is open
    pub fn dropdown_open(&self) -> bool {
        self.state.dropdown_open
    }

    /// Languages in dropdown display order
    pub fn languages(&self) -> impl Iterator<Item = &LanguageEntry> {
        self.registry.iter()
    }

    /// The language table backing this picker
    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    fn rewrite_target(&self, code: &str) -> Option<String> {
        let path = self.location.pathname()?;
        Some(routing::rewrite(&self.registry, path, code))
    }

    fn emit(&self, event: PickerEvent) {
        // Cannot fail while self holds a receiver clone.
        let _ = self.events_tx.send(event);
    }
}

fn detect_code(registry: &LanguageRegistry, location: &PageLocation) -> String {
    match location.pathname() {
        Some(path) => routing::detect(registry, path).to_string(),
        None => {
            tracing::debug!("location unavailable, using default language");
            registry.default_code().to_string()
        }
    }
}
