//! Core error types for uitc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for building a keyword table from user-supplied words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeywordError {
    /// An entry in the list was the empty string
    #[error("Keyword list contains an empty entry at position {index}")]
    Empty { index: usize },

    /// An entry could never be produced by the identifier scanner
    #[error("Invalid keyword '{word}': must start with an ASCII letter and contain only ASCII letters, digits or '_'")]
    Malformed { word: String },
}

/// Result type alias for keyword table operations
pub type KeywordResult<T> = std::result::Result<T, KeywordError>;
