//! Error types for the terminal frontend.

use thiserror::Error;

/// Result type for TUI operations.
pub type AppResult<T> = Result<T, AppError>;

/// Errors that can occur while running the terminal frontend.
#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal setup, drawing, or event I/O failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
