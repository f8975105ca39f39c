//! uitc-lex - Lexical Analyzer for the Uit expression language
//!
//! This crate turns a line of Uit source into the token sequence consumed by
//! the parser.
//!
//! # Example Usage
//!
//! ```
//! use uitc_lex::{tokenize, TokenKind};
//! use uitc_util::KeywordSet;
//!
//! let keywords = KeywordSet::default();
//! let tokens = tokenize("print (1 + 2) * 3", &keywords).unwrap();
//!
//! assert_eq!(tokens[0].kind(), TokenKind::Keyword);
//! assert_eq!(tokens[2].text(), Some("1"));
//! assert!(tokens.last().unwrap().is_eof());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Dispatch loop and sub-scanners
//! - [`cursor`] - Character cursor for source traversal
//! - [`error`] - Lexical errors
//!
//! # Token Categories
//!
//! - **Numbers**: runs of digits with at most one `.`: `42`, `3.14`, `1.`
//! - **Identifiers**: `[a-zA-Z][a-zA-Z0-9_]*` not in the keyword set
//! - **Keywords**: identifiers found in the [`KeywordSet`](uitc_util::KeywordSet)
//! - **Operators**: `+`, `-`, `*`, `/`, `%`, `^`, `=`
//! - **Grouping**: `(`, `)`
//! - **EOF**: end marker, always the last token
//!
//! Spaces and tabs separate tokens. Any other character is an
//! [`LexError::InvalidCharacter`] and ends the scan.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

mod edge_cases;

pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use lexer::Lexer;
pub use token::{Token, TokenKind};

use uitc_util::KeywordSet;

/// Scans `source` into tokens, ending with a single [`TokenKind::Eof`].
///
/// Fails on the first character that cannot start a token; no partial
/// result is returned.
pub fn tokenize(source: &str, keywords: &KeywordSet) -> LexResult<Vec<Token>> {
    Lexer::new(source, keywords).tokenize()
}
