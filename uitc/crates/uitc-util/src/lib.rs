//! uitc-util - Core Utilities and Foundation Types
//!
//! Types shared by every stage of the Uit toolchain:
//!
//! - [`span`] - Source locations attached to tokens and errors
//! - [`keywords`] - The reserved word table consulted by the lexer
//! - [`error`] - Error types for the utilities above

#![warn(missing_docs)]

pub mod error;
pub mod keywords;
pub mod span;

pub use error::{KeywordError, KeywordResult};
pub use keywords::{KeywordSet, DEFAULT_KEYWORDS};
pub use span::Span;
