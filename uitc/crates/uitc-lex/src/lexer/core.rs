//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use tracing::{debug, trace};
use uitc_util::{KeywordSet, Span};

use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};

/// Lexer for the Uit expression language.
///
/// The lexer looks at one character at a time and decides what to do with
/// it: skip it (space, tab), hand off to a sub-scanner (digits, letters),
/// emit a single-character operator, or fail. The first character that
/// fits none of these aborts the scan.
///
/// # Example
///
/// ```
/// use uitc_lex::{Lexer, TokenKind};
/// use uitc_util::KeywordSet;
///
/// let keywords = KeywordSet::default();
/// let tokens = Lexer::new("let x = 2 ^ 8", &keywords).tokenize().unwrap();
///
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Keyword,
///         TokenKind::Identifier,
///         TokenKind::Equal,
///         TokenKind::Number,
///         TokenKind::Caret,
///         TokenKind::Number,
///         TokenKind::Eof,
///     ]
/// );
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Reserved words consulted by the identifier sub-scan.
    pub(crate) keywords: &'a KeywordSet,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,

    /// Set once the end marker or an error has been produced.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str, keywords: &'a KeywordSet) -> Self {
        Self {
            cursor: Cursor::new(source),
            keywords,
            token_start: 0,
            finished: false,
        }
    }

    /// Scans the whole source.
    ///
    /// On success the returned vector ends with exactly one
    /// [`TokenKind::Eof`] token. On the first invalid character the tokens
    /// scanned so far are discarded and the error is returned.
    pub fn tokenize(mut self) -> LexResult<Vec<Token>> {
        debug!(len = self.cursor.source().len(), "tokenizing");

        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            trace!(%token, span = %token.span(), "token");
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        debug!(count = tokens.len(), "tokenized");
        Ok(tokens)
    }

    /// Returns the next token from the source code.
    ///
    /// Skips spaces and tabs, then dispatches on the current character.
    /// Once the end of input is reached this keeps returning
    /// [`TokenKind::Eof`].
    pub fn next_token(&mut self) -> LexResult<Token> {
        self.skip_whitespace();

        self.token_start = self.cursor.position();

        if self.cursor.is_at_end() {
            return Ok(Token::eof(self.token_start));
        }

        let token = match self.cursor.current_char() {
            c if c.is_ascii_digit() => self.lex_number(),
            c if c.is_ascii_alphabetic() => self.lex_identifier(),
            c => match TokenKind::from_operator(c) {
                Some(kind) => {
                    self.cursor.advance();
                    Token::without_text(kind, self.token_span())
                },
                None => return Err(self.invalid_character(c)),
            },
        };

        Ok(token)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.cursor.current_char(), ' ' | '\t') {
            self.cursor.advance();
        }
    }

    fn invalid_character(&self, ch: char) -> LexError {
        let span = Span::new(self.token_start, self.token_start + ch.len_utf8());
        debug!(?ch, %span, "invalid character");
        LexError::InvalidCharacter { ch, span }
    }

    /// Span from the start of the current token to the cursor.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(self.token_start, self.cursor.position())
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<Token>;

    /// Yields every token up to and including the end marker, or up to and
    /// including the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        self.finished = matches!(&result, Ok(token) if token.is_eof()) || result.is_err();
        Some(result)
    }
}

impl<'a> std::iter::FusedIterator for Lexer<'a> {}
