// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod navigation;
pub mod header_state;
pub mod user;

pub use navigation::{active_entry, IconGlyph, NavigationEntry, NAVIGATION_ENTRIES};
pub use header_state::HeaderUiState;
pub use user::UserIdentity;
