// Custom Dioxus hooks
pub mod use_header_state;
pub mod use_theme;

pub use use_header_state::{use_header_state, HeaderState};
pub use use_theme::{use_theme, Theme, UseTheme};
