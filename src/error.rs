//! Domain error types for wheelpick
//!
//! Provides structured error types for the wheel engine:
//! - `WheelError` for option coercion, resolution, and configuration failures

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for wheelpick
#[derive(Debug, Error)]
pub enum WheelError {
    #[error("Option list is empty")]
    EmptyOptions,

    #[error("Value '{0}' is not numeric")]
    NotNumeric(String),

    #[error("Failed to parse config file {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for WheelError
pub type Result<T> = std::result::Result<T, WheelError>;

