use dioxus::prelude::*;

use crate::app::components::{NavLink, NavLinkVariant};
use crate::domain::models::{NavigationEntry, NAVIGATION_ENTRIES};
use crate::shared::constants::MOBILE_DRAWER_ID;

/// Narrow-viewport drawer listing every entry with its description.
/// Mounted by the header only while the drawer is open.
#[component]
pub fn MobileDrawer(current_path: String, on_select: EventHandler<NavigationEntry>) -> Element {
    rsx! {
        nav {
            id: MOBILE_DRAWER_ID,
            class: "c-mobile-drawer",
            aria_label: "Mobile navigation",
            ul { class: "c-mobile-drawer__list",
                for entry in NAVIGATION_ENTRIES {
                    li { key: "{entry.path}",
                        NavLink {
                            entry: entry,
                            active: entry.is_active(&current_path),
                            variant: NavLinkVariant::Mobile,
                            on_select: on_select,
                        }
                    }
                }
            }
        }
    }
}
