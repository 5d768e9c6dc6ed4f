pub mod icons;
pub mod nav_link;
pub mod theme_toggle;
pub mod user_menu;

pub use icons::Icon;
pub use nav_link::{NavLink, NavLinkVariant};
pub use theme_toggle::ThemeToggle;
pub use user_menu::UserMenu;
