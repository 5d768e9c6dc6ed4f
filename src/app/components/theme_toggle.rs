use dioxus::prelude::*;

use crate::app::components::Icon;
use crate::domain::models::IconGlyph;
use crate::shared::constants::THEME_TOGGLE_LABEL;

/// Theme toggle button of the header.
/// Holds no theme state: the host decides what a toggle means.
#[component]
pub fn ThemeToggle(on_toggle: Option<EventHandler<()>>) -> Element {
    rsx! {
        button {
            class: "c-header__icon-button c-theme-toggle",
            r#type: "button",
            aria_label: THEME_TOGGLE_LABEL,
            onclick: move |_| {
                if let Some(handler) = &on_toggle {
                    handler.call(());
                }
            },
            Icon { glyph: IconGlyph::Sun }
        }
    }
}
