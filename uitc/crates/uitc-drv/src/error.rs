//! Error handling module for the uitc driver.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the driver.

use thiserror::Error;
use uitc_lex::LexError;
use uitc_util::KeywordError;

/// Main error type for the uitc driver.
#[derive(Error, Debug)]
pub enum DrvError {
    /// Error when the configuration cannot be found, read or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The configured keyword list is unusable.
    #[error("Configuration error: {0}")]
    Keywords(#[from] KeywordError),

    /// The source contains a character no token can start with.
    #[error("{0}")]
    Lex(#[from] LexError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using DrvError.
pub type Result<T> = std::result::Result<T, DrvError>;
