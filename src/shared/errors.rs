use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    #[error("Navigation failed: {0}")]
    Navigation(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
