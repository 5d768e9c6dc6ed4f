//! Fixed strings of the navigation shell.

/// Product name shown next to the brand mark.
pub const BRAND_NAME: &str = "Enterprise Insights Copilot";

/// Accessible name of the brand link.
pub const BRAND_HOME_LABEL: &str = "Enterprise Insights Copilot Home";

/// Target of the brand link.
pub const HOME_PATH: &str = "/";

pub const PROFILE_PATH: &str = "/profile";
pub const SETTINGS_PATH: &str = "/settings";

/// `id` of the mobile drawer, referenced by the toggle's `aria-controls`.
pub const MOBILE_DRAWER_ID: &str = "mobile-navigation";

pub const THEME_TOGGLE_LABEL: &str = "Toggle theme";
pub const USER_MENU_LABEL: &str = "User menu";
pub const MOBILE_MENU_LABEL: &str = "Toggle mobile menu";

/// localStorage key holding the selected theme.
pub const THEME_STORAGE_KEY: &str = "theme";
