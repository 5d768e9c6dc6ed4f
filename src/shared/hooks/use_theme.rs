use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::shared::errors::AppError;
use crate::shared::logging;

/// Colour scheme applied as a class on the document root
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Theme to use when nothing was stored
    pub fn system_default(is_dark_preferred: bool) -> Theme {
        if is_dark_preferred {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Root classes of the other themes, removed before `self` is applied
    pub fn stale_classes(self) -> impl Iterator<Item = &'static str> {
        Theme::ALL
            .into_iter()
            .filter(move |theme| *theme != self)
            .map(|theme| theme.as_str())
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(AppError::InvalidTheme(other.to_string())),
        }
    }
}

/// Handle returned by [`use_theme`]
#[derive(Clone, Copy)]
pub struct UseTheme {
    pub current: Signal<Theme>,
}

impl UseTheme {
    pub fn theme(&self) -> Theme {
        (self.current)()
    }

    /// Switch light <-> dark, apply it to the page and remember it
    pub fn toggle(&mut self) {
        let previous = self.theme();
        let next = previous.toggled();
        self.current.set(next);
        logging::log_theme_change(previous.as_str(), next.as_str());

        apply_theme_class(next);
        spawn(async move {
            save_theme(next).await;
        });
    }
}

/// Theme state for the app shell: restored from localStorage on mount,
/// falling back to `prefers-color-scheme`.
pub fn use_theme() -> UseTheme {
    let mut current = use_signal(|| Theme::Light);

    use_effect(move || {
        let theme = load_saved_theme()
            .unwrap_or_else(|| Theme::system_default(prefers_dark()));
        current.set(theme);
        apply_theme_class(theme);
    });

    UseTheme { current }
}

#[cfg(target_arch = "wasm32")]
fn load_saved_theme() -> Option<Theme> {
    use crate::shared::constants::THEME_STORAGE_KEY;

    let storage = web_sys::window()?.local_storage().ok()??;
    let saved = storage.get_item(THEME_STORAGE_KEY).ok()??;
    match saved.parse::<Theme>() {
        Ok(theme) => Some(theme),
        Err(e) => {
            logging::log_theme_rejected(&saved, &e.to_string());
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_saved_theme() -> Option<Theme> {
    None
}

#[cfg(target_arch = "wasm32")]
fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
fn prefers_dark() -> bool {
    false
}

/// Swap the theme class on `<html>`
#[cfg(target_arch = "wasm32")]
fn apply_theme_class(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };

    let classes = root.class_list();
    for stale in theme.stale_classes() {
        let _ = classes.remove_1(stale);
    }
    let _ = classes.add_1(theme.as_str());
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_theme_class(_theme: Theme) {
    // No-op on server
}

/// Save theme to localStorage
#[cfg(target_arch = "wasm32")]
pub async fn save_theme(theme: Theme) {
    use crate::shared::constants::THEME_STORAGE_KEY;

    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn save_theme(_theme: Theme) {
    // No-op on server
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_themes() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(Theme::Dark.as_str().parse::<Theme>().unwrap(), Theme::Dark);
    }

    #[test]
    fn test_parse_unknown_theme_is_error() {
        let err = "golden".parse::<Theme>().unwrap_err();
        assert!(matches!(err, AppError::InvalidTheme(ref v) if v == "golden"));
        assert_eq!(err.to_string(), "Invalid theme: golden");
    }

    #[test]
    fn test_toggled_is_involution() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
        assert!(Theme::Light.toggled().is_dark());
    }

    #[test]
    fn test_stale_classes_exclude_applied_theme() {
        assert_eq!(Theme::Dark.stale_classes().collect::<Vec<_>>(), vec!["light"]);
        assert_eq!(Theme::Light.stale_classes().collect::<Vec<_>>(), vec!["dark"]);
        for theme in Theme::ALL {
            assert!(theme.stale_classes().all(|class| class != theme.as_str()));
        }
    }

    #[test]
    fn test_system_default() {
        assert_eq!(Theme::system_default(true), Theme::Dark);
        assert_eq!(Theme::system_default(false), Theme::Light);
    }

    #[test]
    fn test_serde_uses_storage_names() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, Theme::Light);
    }
}
