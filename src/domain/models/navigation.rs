/// Glyphs drawn by the header. Rendered as inline SVG by `app::components::icons`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconGlyph {
    Home,
    BarChart,
    FileText,
    Settings,
    Sparkles,
    Sun,
    User,
    ChevronDown,
    Menu,
    Close,
    LogOut,
}

impl IconGlyph {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconGlyph::Home => "home",
            IconGlyph::BarChart => "bar-chart",
            IconGlyph::FileText => "file-text",
            IconGlyph::Settings => "settings",
            IconGlyph::Sparkles => "sparkles",
            IconGlyph::Sun => "sun",
            IconGlyph::User => "user",
            IconGlyph::ChevronDown => "chevron-down",
            IconGlyph::Menu => "menu",
            IconGlyph::Close => "close",
            IconGlyph::LogOut => "log-out",
        }
    }
}

/// A single top-level destination in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: IconGlyph,
    pub description: &'static str,
}

impl NavigationEntry {
    /// Exact match only: `/analytics/q3` does not activate `/analytics`.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path
    }
}

/// Header destinations, in display order.
pub const NAVIGATION_ENTRIES: [NavigationEntry; 4] = [
    NavigationEntry {
        label: "Home",
        path: "/",
        icon: IconGlyph::Home,
        description: "Dashboard overview",
    },
    NavigationEntry {
        label: "Analytics",
        path: "/analytics",
        icon: IconGlyph::BarChart,
        description: "Data insights and trends",
    },
    NavigationEntry {
        label: "Reports",
        path: "/reports",
        icon: IconGlyph::FileText,
        description: "Generated reports",
    },
    NavigationEntry {
        label: "Settings",
        path: "/settings",
        icon: IconGlyph::Settings,
        description: "Application settings",
    },
];

/// The entry highlighted for `current_path`, if any.
pub fn active_entry(current_path: &str) -> Option<&'static NavigationEntry> {
    NAVIGATION_ENTRIES
        .iter()
        .find(|entry| entry.is_active(current_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_are_fixed_in_order() {
        let pairs: Vec<(&str, &str)> = NAVIGATION_ENTRIES
            .iter()
            .map(|entry| (entry.label, entry.path))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Home", "/"),
                ("Analytics", "/analytics"),
                ("Reports", "/reports"),
                ("Settings", "/settings"),
            ]
        );
    }

    #[test]
    fn test_paths_are_distinct() {
        for (i, a) in NAVIGATION_ENTRIES.iter().enumerate() {
            for b in NAVIGATION_ENTRIES.iter().skip(i + 1) {
                assert_ne!(a.path, b.path);
            }
        }
    }

    #[test]
    fn test_active_entry_exact_match() {
        let active = active_entry("/analytics").unwrap();
        assert_eq!(active.label, "Analytics");

        let count = NAVIGATION_ENTRIES
            .iter()
            .filter(|entry| entry.is_active("/analytics"))
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_no_prefix_or_case_matching() {
        assert!(active_entry("/analytics/q3").is_none());
        assert!(active_entry("/Analytics").is_none());
        assert!(active_entry("/reports/").is_none());
        assert!(active_entry("").is_none());
    }

    #[test]
    fn test_unknown_route_has_no_active_entry() {
        assert!(active_entry("/unknown").is_none());
        assert!(NAVIGATION_ENTRIES.iter().all(|entry| !entry.is_active("/unknown")));
    }

    #[test]
    fn test_root_only_matches_home() {
        assert_eq!(active_entry("/").map(|entry| entry.label), Some("Home"));
    }
}
