use dioxus::prelude::*;

use crate::app::components::{Icon, NavLink, NavLinkVariant, ThemeToggle, UserMenu};
use crate::app::layouts::MobileDrawer;
use crate::app::pages::routes::{request_navigation, Route};
use crate::domain::models::{
    HeaderUiState, IconGlyph, NavigationEntry, UserIdentity, NAVIGATION_ENTRIES,
};
use crate::shared::constants::{
    BRAND_HOME_LABEL, BRAND_NAME, HOME_PATH, MOBILE_DRAWER_ID, MOBILE_MENU_LABEL,
};
use crate::shared::hooks::{use_header_state, HeaderState};
use crate::shared::logging;

/// Router-connected header: reads the current route and sends link
/// activations to the navigator.
#[component]
pub fn NavigationHeader(
    on_toggle_theme: Option<EventHandler<()>>,
    on_sign_out: Option<EventHandler<()>>,
) -> Element {
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let current_path = route.to_string();

    rsx! {
        HeaderView {
            current_path: current_path,
            on_navigate: move |path: String| {
                if let Err(e) = request_navigation(navigator, &path) {
                    logging::log_navigation_failure(&path, &e.to_string());
                }
            },
            on_toggle_theme: on_toggle_theme,
            on_sign_out: on_sign_out,
        }
    }
}

/// Fixed top bar: brand, desktop entries, theme toggle, user menu and the
/// mobile drawer toggle.
///
/// `current_path` only drives highlighting; `on_navigate` receives every
/// path the user activates. A host that needs to drive the menus itself
/// passes its own `state`; otherwise the header seeds one from `initial_state`.
#[component]
pub fn HeaderView(
    current_path: String,
    on_navigate: EventHandler<String>,
    state: Option<HeaderState>,
    #[props(default)] initial_state: HeaderUiState,
    #[props(default)] user: UserIdentity,
    on_toggle_theme: Option<EventHandler<()>>,
    on_sign_out: Option<EventHandler<()>>,
) -> Element {
    let own_state = use_header_state(initial_state);
    let mut header = state.unwrap_or(own_state);
    let ui = header.snapshot();

    let select_entry = move |entry: NavigationEntry| {
        let path = header.select_entry(&entry);
        on_navigate.call(path.to_string());
    };

    rsx! {
        header { class: "c-header",
            div { class: "c-header__inner",
                a {
                    class: "c-header__brand",
                    href: HOME_PATH,
                    aria_label: BRAND_HOME_LABEL,
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        on_navigate.call(HOME_PATH.to_string());
                    },
                    span { class: "c-header__brand-mark",
                        Icon { glyph: IconGlyph::Sparkles }
                    }
                    span { class: "c-header__brand-name", "{BRAND_NAME}" }
                }

                nav { class: "c-header__nav", aria_label: "Main navigation",
                    ul { class: "c-header__nav-list",
                        for entry in NAVIGATION_ENTRIES {
                            li { key: "{entry.path}",
                                NavLink {
                                    entry: entry,
                                    active: entry.is_active(&current_path),
                                    variant: NavLinkVariant::Desktop,
                                    on_select: select_entry,
                                }
                            }
                        }
                    }
                }

                div { class: "c-header__actions",
                    ThemeToggle { on_toggle: on_toggle_theme }

                    UserMenu {
                        open: ui.user_menu_open,
                        user: user.clone(),
                        on_toggle: move |_| header.toggle_user_menu(),
                        on_navigate: on_navigate,
                        on_sign_out: on_sign_out,
                    }

                    button {
                        class: "c-header__icon-button c-header__mobile-toggle",
                        r#type: "button",
                        aria_label: MOBILE_MENU_LABEL,
                        aria_expanded: "{ui.mobile_menu_open}",
                        aria_controls: MOBILE_DRAWER_ID,
                        onclick: move |_| header.toggle_mobile_menu(),
                        if ui.mobile_menu_open {
                            Icon { glyph: IconGlyph::Close }
                        } else {
                            Icon { glyph: IconGlyph::Menu }
                        }
                    }
                }
            }

            if ui.mobile_menu_open {
                div {
                    class: "c-header__backdrop",
                    "aria-hidden": "true",
                    onclick: move |_| header.dismiss_mobile_menu(),
                }
                MobileDrawer {
                    current_path: current_path.clone(),
                    on_select: select_entry,
                }
            }
        }
    }
}
