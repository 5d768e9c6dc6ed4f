use serde::{Deserialize, Serialize};

use crate::domain::models::NavigationEntry;
use crate::shared::logging;

/// Per-instance UI state of the navigation header.
///
/// Both menus start closed. Only the transitions below mutate it; nothing
/// here is persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderUiState {
    pub mobile_menu_open: bool,
    pub user_menu_open: bool,
}

impl HeaderUiState {
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
        logging::log_menu_toggle(logging::MenuKind::Mobile, self.mobile_menu_open);
    }

    pub fn toggle_user_menu(&mut self) {
        self.user_menu_open = !self.user_menu_open;
        logging::log_menu_toggle(logging::MenuKind::User, self.user_menu_open);
    }

    /// Records the selection of `entry` and returns the path to navigate to.
    /// An open drawer is closed; the user menu is left alone.
    pub fn select_entry(&mut self, entry: &NavigationEntry) -> &'static str {
        let closed_drawer = self.mobile_menu_open;
        self.mobile_menu_open = false;
        logging::log_entry_selected(entry.path, closed_drawer);
        entry.path
    }

    /// Backdrop click.
    pub fn dismiss_mobile_menu(&mut self) {
        if self.mobile_menu_open {
            self.mobile_menu_open = false;
            logging::log_backdrop_dismiss();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::NAVIGATION_ENTRIES;

    fn with_drawer_open() -> HeaderUiState {
        HeaderUiState {
            mobile_menu_open: true,
            user_menu_open: false,
        }
    }

    #[test]
    fn test_initial_state_is_closed() {
        let state = HeaderUiState::default();
        assert!(!state.mobile_menu_open);
        assert!(!state.user_menu_open);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut state = HeaderUiState::default();
        state.toggle_mobile_menu();
        assert!(state.mobile_menu_open);
        state.toggle_mobile_menu();
        assert_eq!(state, HeaderUiState::default());

        state.toggle_user_menu();
        assert!(state.user_menu_open);
        state.toggle_user_menu();
        assert_eq!(state, HeaderUiState::default());
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut state = HeaderUiState::default();
        state.toggle_user_menu();
        assert!(!state.mobile_menu_open);

        state.toggle_mobile_menu();
        assert!(state.user_menu_open);
        assert!(state.mobile_menu_open);

        state.toggle_user_menu();
        assert!(state.mobile_menu_open);
        assert!(!state.user_menu_open);
    }

    #[test]
    fn test_select_entry_closes_drawer_for_every_entry() {
        for entry in NAVIGATION_ENTRIES.iter() {
            let mut state = with_drawer_open();
            let path = state.select_entry(entry);
            assert_eq!(path, entry.path);
            assert!(!state.mobile_menu_open);
        }
    }

    #[test]
    fn test_select_entry_keeps_user_menu() {
        let mut state = HeaderUiState {
            mobile_menu_open: true,
            user_menu_open: true,
        };
        state.select_entry(&NAVIGATION_ENTRIES[2]);
        assert!(!state.mobile_menu_open);
        assert!(state.user_menu_open);
    }

    #[test]
    fn test_select_entry_with_drawer_closed_is_noop_on_state() {
        let mut state = HeaderUiState::default();
        let path = state.select_entry(&NAVIGATION_ENTRIES[1]);
        assert_eq!(path, "/analytics");
        assert_eq!(state, HeaderUiState::default());
    }

    #[test]
    fn test_backdrop_dismiss_closes_drawer_only() {
        let mut state = HeaderUiState {
            mobile_menu_open: true,
            user_menu_open: true,
        };
        state.dismiss_mobile_menu();
        assert!(!state.mobile_menu_open);
        assert!(state.user_menu_open);

        let mut state = with_drawer_open();
        state.dismiss_mobile_menu();
        assert!(!state.user_menu_open);
    }

    #[test]
    fn test_serializes_as_flags() {
        let json = serde_json::to_value(with_drawer_open()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "mobile_menu_open": true, "user_menu_open": false })
        );
    }
}
