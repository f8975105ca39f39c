//! Number literal lexing.
//!
//! This module handles lexing of decimal literals.

use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// Consumes digits and at most one decimal point. A second `.` ends the
    /// literal without being consumed, so it is seen (and rejected) by the
    /// next dispatch.
    ///
    /// The text is kept verbatim: `1.` is a valid literal at this stage and
    /// no numeric value is computed.
    ///
    /// # Returns
    ///
    /// `Token` of kind `Number`
    pub fn lex_number(&mut self) -> Token {
        let mut seen_dot = false;

        loop {
            match self.cursor.current_char() {
                c if c.is_ascii_digit() => self.cursor.advance(),
                '.' if !seen_dot => {
                    seen_dot = true;
                    self.cursor.advance();
                },
                _ => break,
            }
        }

        let text = self.cursor.slice_from(self.token_start);
        Token::number(text, self.token_span())
    }
}
