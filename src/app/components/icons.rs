use dioxus::prelude::*;

use crate::domain::models::IconGlyph;

/// Stroke paths on a 24x24 grid.
fn glyph_paths(glyph: IconGlyph) -> &'static [&'static str] {
    match glyph {
        IconGlyph::Home => &[
            "M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",
            "M9 22V12h6v10",
        ],
        IconGlyph::BarChart => &["M12 20V10", "M18 20V4", "M6 20v-4"],
        IconGlyph::FileText => &[
            "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z",
            "M14 2v6h6",
            "M16 13H8",
            "M16 17H8",
            "M10 9H8",
        ],
        IconGlyph::Settings => &[
            "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
            "M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 1 1-4 0v-.09A1.65 1.65 0 0 0 9 19.4a1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06A1.65 1.65 0 0 0 4.68 15a1.65 1.65 0 0 0-1.51-1H3a2 2 0 1 1 0-4h.09A1.65 1.65 0 0 0 4.6 9a1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06A1.65 1.65 0 0 0 9 4.68a1.65 1.65 0 0 0 1-1.51V3a2 2 0 1 1 4 0v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06A1.65 1.65 0 0 0 19.4 9a1.65 1.65 0 0 0 1.51 1H21a2 2 0 1 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z",
        ],
        IconGlyph::Sparkles => &[
            "M12 3l1.9 5.8L20 10l-6.1 1.2L12 17l-1.9-5.8L4 10l6.1-1.2z",
            "M19 17v4M17 19h4",
        ],
        IconGlyph::Sun => &[
            "M12 17a5 5 0 1 0 0-10 5 5 0 0 0 0 10z",
            "M12 1v2M12 21v2M4.22 4.22l1.42 1.42M18.36 18.36l1.42 1.42M1 12h2M21 12h2M4.22 19.78l1.42-1.42M18.36 5.64l1.42-1.42",
        ],
        IconGlyph::User => &[
            "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2",
            "M12 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
        ],
        IconGlyph::ChevronDown => &["M6 9l6 6 6-6"],
        IconGlyph::Menu => &["M3 12h18M3 6h18M3 18h18"],
        IconGlyph::Close => &["M18 6L6 18M6 6l12 12"],
        IconGlyph::LogOut => &[
            "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4",
            "M16 17l5-5-5-5",
            "M21 12H9",
        ],
    }
}

/// Decorative inline SVG icon, hidden from assistive technology.
#[component]
pub fn Icon(glyph: IconGlyph) -> Element {
    let name = glyph.as_str();

    rsx! {
        svg {
            class: "c-icon c-icon--{name}",
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in glyph_paths(glyph).iter() {
                path { d: *d }
            }
        }
    }
}
