//! Lexical errors.

use thiserror::Error;
use uitc_util::Span;

/// Error raised while scanning.
///
/// Scanning stops at the first error; no tokens are returned alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// The character under the cursor cannot start any token.
    #[error("invalid character {ch:?} at column {}", .span.column())]
    InvalidCharacter {
        /// The offending character
        ch: char,
        /// Location of the offending character
        span: Span,
    },
}

impl LexError {
    /// Location of the error in the source.
    pub fn span(&self) -> Span {
        match self {
            Self::InvalidCharacter { span, .. } => *span,
        }
    }
}

/// Result type alias for lexing operations
pub type LexResult<T> = std::result::Result<T, LexError>;
