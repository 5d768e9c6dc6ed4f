use dioxus::prelude::*;

use crate::app::components::Icon;
use crate::domain::models::NavigationEntry;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavLinkVariant {
    /// Inline bar item: icon and label, description as tooltip
    Desktop,
    /// Drawer row: icon, label and description
    Mobile,
}

/// One navigation entry.
///
/// The click is routed through `on_select` instead of letting the browser
/// follow `href`, so the host router performs the transition and the header
/// can close its drawer first.
#[component]
pub fn NavLink(
    entry: NavigationEntry,
    active: bool,
    variant: NavLinkVariant,
    on_select: EventHandler<NavigationEntry>,
) -> Element {
    let class = match (variant, active) {
        (NavLinkVariant::Desktop, false) => "c-nav-link c-nav-link--desktop",
        (NavLinkVariant::Desktop, true) => "c-nav-link c-nav-link--desktop c-nav-link--active",
        (NavLinkVariant::Mobile, false) => "c-nav-link c-nav-link--mobile",
        (NavLinkVariant::Mobile, true) => "c-nav-link c-nav-link--mobile c-nav-link--active",
    };

    rsx! {
        a {
            class: "{class}",
            href: entry.path,
            title: entry.description,
            aria_current: if active { "page" },
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                on_select.call(entry);
            },
            Icon { glyph: entry.icon }
            if variant == NavLinkVariant::Mobile {
                span { class: "c-nav-link__text",
                    span { class: "c-nav-link__label", "{entry.label}" }
                    span { class: "c-nav-link__description", "{entry.description}" }
                }
            } else {
                span { class: "c-nav-link__label", "{entry.label}" }
            }
        }
    }
}
