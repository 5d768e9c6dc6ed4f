pub mod mobile_drawer;
pub mod navigation_header;

pub use mobile_drawer::MobileDrawer;
pub use navigation_header::{HeaderView, NavigationHeader};
