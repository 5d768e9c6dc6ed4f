//! Structured logging for the navigation shell
//!
//! Every header interaction emits one event with an `operation` field so a
//! session can be reconstructed from the logs. The subscriber is installed by
//! the server entry point (`init_tracing`); on the client the events go
//! through Dioxus' own logger.

/// Operations reported by the shell
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    MenuToggle,
    EntrySelected,
    BackdropDismiss,
    ThemeChange,
    Navigation,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::MenuToggle => "menu_toggle",
            LogOperation::EntrySelected => "entry_selected",
            LogOperation::BackdropDismiss => "backdrop_dismiss",
            LogOperation::ThemeChange => "theme_change",
            LogOperation::Navigation => "navigation",
        }
    }
}

/// Which of the two header menus changed
#[derive(Debug, Clone, Copy)]
pub enum MenuKind {
    Mobile,
    User,
}

impl MenuKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuKind::Mobile => "mobile",
            MenuKind::User => "user",
        }
    }
}

/// Log a menu flip
pub fn log_menu_toggle(menu: MenuKind, open: bool) {
    tracing::debug!(
        operation = LogOperation::MenuToggle.as_str(),
        menu = menu.as_str(),
        open = open,
        "Header menu toggled"
    );
}

/// Log a navigation entry activation
pub fn log_entry_selected(path: &str, closed_drawer: bool) {
    tracing::debug!(
        operation = LogOperation::EntrySelected.as_str(),
        path = path,
        closed_drawer = closed_drawer,
        "Navigation entry selected"
    );
}

/// Log a backdrop click that closed the drawer
pub fn log_backdrop_dismiss() {
    tracing::debug!(
        operation = LogOperation::BackdropDismiss.as_str(),
        "Mobile drawer dismissed by backdrop"
    );
}

/// Log a theme switch
pub fn log_theme_change(from: &str, to: &str) {
    tracing::info!(
        operation = LogOperation::ThemeChange.as_str(),
        from = from,
        to = to,
        "Theme changed"
    );
}

/// Log a stored theme value that could not be used
pub fn log_theme_rejected(value: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::ThemeChange.as_str(),
        value = value,
        error = error,
        "Ignoring stored theme"
    );
}

/// Log a navigation request the router refused
pub fn log_navigation_failure(path: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::Navigation.as_str(),
        path = path,
        error = error,
        "Navigation request failed"
    );
}

/// Install the fmt subscriber. `RUST_LOG` refines the default `INFO` level.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::MenuToggle.as_str(), "menu_toggle");
        assert_eq!(LogOperation::EntrySelected.as_str(), "entry_selected");
        assert_eq!(LogOperation::BackdropDismiss.as_str(), "backdrop_dismiss");
        assert_eq!(LogOperation::ThemeChange.as_str(), "theme_change");
        assert_eq!(LogOperation::Navigation.as_str(), "navigation");
    }

    #[test]
    fn test_menu_kind_as_str() {
        assert_eq!(MenuKind::Mobile.as_str(), "mobile");
        assert_eq!(MenuKind::User.as_str(), "user");
    }
}
