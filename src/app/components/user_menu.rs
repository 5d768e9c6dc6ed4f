use dioxus::prelude::*;

use crate::app::components::Icon;
use crate::domain::models::{IconGlyph, UserIdentity};
use crate::shared::constants::{PROFILE_PATH, SETTINGS_PATH, USER_MENU_LABEL};

/// Account trigger and its dropdown.
///
/// The dropdown only closes through the trigger. Sign Out does nothing unless
/// the host passes `on_sign_out`.
#[component]
pub fn UserMenu(
    open: bool,
    user: UserIdentity,
    on_toggle: EventHandler<()>,
    on_navigate: EventHandler<String>,
    on_sign_out: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div { class: "c-user-menu",
            button {
                class: "c-header__icon-button c-user-menu__trigger",
                r#type: "button",
                aria_label: USER_MENU_LABEL,
                aria_expanded: "{open}",
                aria_haspopup: "true",
                onclick: move |_| on_toggle.call(()),
                Icon { glyph: IconGlyph::User }
                Icon { glyph: IconGlyph::ChevronDown }
            }

            if open {
                div { class: "c-user-menu__dropdown", role: "menu",
                    div { class: "c-user-menu__identity",
                        p { class: "c-user-menu__name", "{user.display_name}" }
                        p { class: "c-user-menu__email", "{user.email}" }
                    }

                    a {
                        class: "c-user-menu__item",
                        role: "menuitem",
                        href: PROFILE_PATH,
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_navigate.call(PROFILE_PATH.to_string());
                        },
                        Icon { glyph: IconGlyph::User }
                        "Profile"
                    }
                    a {
                        class: "c-user-menu__item",
                        role: "menuitem",
                        href: SETTINGS_PATH,
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_navigate.call(SETTINGS_PATH.to_string());
                        },
                        Icon { glyph: IconGlyph::Settings }
                        "Settings"
                    }

                    div { class: "c-user-menu__separator" }

                    button {
                        class: "c-user-menu__item c-user-menu__sign-out",
                        r#type: "button",
                        role: "menuitem",
                        onclick: move |_| {
                            if let Some(handler) = &on_sign_out {
                                handler.call(());
                            }
                        },
                        Icon { glyph: IconGlyph::LogOut }
                        "Sign Out"
                    }
                }
            }
        }
    }
}
