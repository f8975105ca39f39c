//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which keeps one character of
//! lookahead over the source text. The lexer is byte-oriented: every call to
//! [`Cursor::advance`] moves exactly one byte forward, and the only characters
//! the language accepts are ASCII.

/// Character reported once the cursor has run off the end of the source.
pub const EOF_CHAR: char = '\0';

/// A forward-only cursor over source text.
///
/// The cursor always holds the character under it, so the lexer can inspect
/// the current character without re-decoding. Its position never moves
/// backwards and never passes the end of the source.
///
/// # Example
///
/// ```
/// use uitc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("x+1");
///
/// assert_eq!(cursor.current_char(), 'x');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), '+');
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte offset of the current character.
    position: usize,

    /// Character at `position`, or [`EOF_CHAR`] past the end.
    current: char,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned on the first character of `source`.
    ///
    /// For empty input the cursor starts at the end.
    ///
    /// ```
    /// use uitc_lex::cursor::{Cursor, EOF_CHAR};
    ///
    /// let cursor = Cursor::new("");
    /// assert!(cursor.is_at_end());
    /// assert_eq!(cursor.current_char(), EOF_CHAR);
    /// ```
    pub fn new(source: &'a str) -> Self {
        let mut cursor = Self {
            source,
            position: 0,
            current: EOF_CHAR,
        };
        cursor.current = cursor.char_at(0);
        cursor
    }

    /// Returns the character under the cursor, or [`EOF_CHAR`] at the end.
    ///
    /// A NUL byte inside the source is also reported as `'\0'`; use
    /// [`is_at_end`](Self::is_at_end) to tell the two apart.
    #[inline]
    pub fn current_char(&self) -> char {
        self.current
    }

    /// Moves one byte forward.
    ///
    /// Saturates at the end of the source: once the cursor is at the end,
    /// further calls have no effect.
    #[inline]
    pub fn advance(&mut self) {
        if self.position < self.source.len() {
            self.position += 1;
        }
        self.current = self.char_at(self.position);
    }

    /// Returns true if every byte of the source has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the byte offset of the current character.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the full source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Returns the source text between `start` and the current position.
    ///
    /// Returns an empty string if the range does not fall on character
    /// boundaries, which cannot happen while only ASCII has been consumed.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.source.get(start..self.position).unwrap_or("")
    }

    fn char_at(&self, pos: usize) -> char {
        let Some(&b) = self.source.as_bytes().get(pos) else {
            return EOF_CHAR;
        };

        // Fast path for ASCII (the only bytes the lexer accepts)
        if b < 128 {
            return b as char;
        }

        // Decode the full character so errors can name it
        self.source
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}
