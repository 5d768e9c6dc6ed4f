use crate::domain::models::{HeaderUiState, NavigationEntry};
use dioxus::prelude::*;

/// Header state handle; every mutation re-renders the owning component
#[derive(Clone, Copy, PartialEq)]
pub struct HeaderState {
    pub ui: Signal<HeaderUiState>,
}

impl HeaderState {
    pub fn snapshot(&self) -> HeaderUiState {
        (self.ui)()
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.ui.write().toggle_mobile_menu();
    }

    pub fn toggle_user_menu(&mut self) {
        self.ui.write().toggle_user_menu();
    }

    /// Returns the path the router should move to
    pub fn select_entry(&mut self, entry: &NavigationEntry) -> &'static str {
        self.ui.write().select_entry(entry)
    }

    pub fn dismiss_mobile_menu(&mut self) {
        self.ui.write().dismiss_mobile_menu();
    }
}

/// Hook to manage header state, seeded once on mount
pub fn use_header_state(initial: HeaderUiState) -> HeaderState {
    let ui = use_signal(move || initial);
    HeaderState { ui }
}
