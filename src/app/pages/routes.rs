use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::app::layouts::NavigationHeader;
use crate::domain::models::{active_entry, UserIdentity};
use crate::shared::errors::{AppError, Result};
use crate::shared::hooks::use_theme;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/analytics")]
    Analytics {},
    #[route("/reports")]
    Reports {},
    #[route("/settings")]
    Settings {},
    #[route("/profile")]
    Profile {},

    // Anything else still gets the header, with no entry highlighted
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Ask the router to move to `path`.
pub fn request_navigation(navigator: Navigator, path: &str) -> Result<()> {
    match navigator.push(path.to_string()) {
        None => Ok(()),
        Some(failure) => Err(AppError::Navigation(format!("{:?}", failure))),
    }
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Enterprise Insights Copilot shell initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    // Bundled by build.rs from assets/css
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let mut theme = use_theme();

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            NavigationHeader {
                on_toggle_theme: move |_| theme.toggle(),
            }

            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}

/// Placeholder body for a header destination
#[component]
fn EntryPage(path: &'static str) -> Element {
    let Some(entry) = active_entry(path) else {
        return rsx! {};
    };

    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "{entry.label}" }
            p { class: "c-page__description", "{entry.description}" }
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! { EntryPage { path: "/" } }
}

#[component]
fn Analytics() -> Element {
    rsx! { EntryPage { path: "/analytics" } }
}

#[component]
fn Reports() -> Element {
    rsx! { EntryPage { path: "/reports" } }
}

#[component]
fn Settings() -> Element {
    rsx! { EntryPage { path: "/settings" } }
}

#[component]
fn Profile() -> Element {
    let user = UserIdentity::default();

    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "Profile" }
            p { class: "c-page__description", "{user.display_name} · {user.email}" }
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(path = %path, "No page for route");

    rsx! {
        section { class: "c-page c-page--not-found",
            h1 { class: "c-page__title", "Page not found" }
            p { class: "c-page__description", "Nothing lives at {path}." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::NAVIGATION_ENTRIES;

    #[test]
    fn test_entry_paths_match_routes() {
        let routes = [
            Route::Home {},
            Route::Analytics {},
            Route::Reports {},
            Route::Settings {},
        ];
        for (route, entry) in routes.iter().zip(NAVIGATION_ENTRIES.iter()) {
            assert_eq!(route.to_string(), entry.path);
        }
        assert_eq!(Route::Profile {}.to_string(), "/profile");
    }

    #[test]
    fn test_entry_paths_parse_to_routes() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Home {});
        assert_eq!("/analytics".parse::<Route>().unwrap(), Route::Analytics {});
        assert_eq!("/reports".parse::<Route>().unwrap(), Route::Reports {});
        assert_eq!("/settings".parse::<Route>().unwrap(), Route::Settings {});
    }

    #[test]
    fn test_unknown_path_falls_through_to_not_found() {
        let route = "/unknown".parse::<Route>().unwrap();
        assert!(matches!(route, Route::NotFound { .. }));
        assert!(active_entry(&route.to_string()).is_none());
    }
}
