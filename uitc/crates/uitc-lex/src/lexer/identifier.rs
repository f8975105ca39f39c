//! Identifier and keyword lexing.

use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// The dispatcher only calls this on an ASCII letter; the run continues
    /// through ASCII letters, digits and underscores. The text is then looked
    /// up in the keyword set by exact match.
    ///
    /// # Returns
    ///
    /// `Token` of kind `Keyword` or `Identifier`
    pub fn lex_identifier(&mut self) -> Token {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        let span = self.token_span();

        if self.keywords.contains(text) {
            Token::keyword(text, span)
        } else {
            Token::identifier(text, span)
        }
    }
}

#[inline]
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind};
    use uitc_util::{KeywordSet, Span};

    fn lex_ident_with(source: &str, keywords: &KeywordSet) -> Token {
        let mut lexer = crate::Lexer::new(source, keywords);
        lexer.lex_identifier()
    }

    fn lex_ident(source: &str) -> Token {
        lex_ident_with(source, &KeywordSet::default())
    }

    #[test]
    fn test_simple_identifier() {
        assert_eq!(lex_ident("foo"), Token::identifier("foo", Span::new(0, 3)));
    }

    #[test]
    fn test_identifier_with_digits_and_underscores() {
        assert_eq!(lex_ident("foo_bar_123").text(), Some("foo_bar_123"));
        assert_eq!(lex_ident("a__").text(), Some("a__"));
    }

    #[test]
    fn test_identifier_stops_at_operator() {
        let token = lex_ident("rate*2");
        assert_eq!(token.text(), Some("rate"));
        assert_eq!(token.span(), Span::new(0, 4));
    }

    #[test]
    fn test_keyword_let() {
        assert_eq!(lex_ident("let"), Token::keyword("let", Span::new(0, 3)));
    }

    #[test]
    fn test_keyword_print() {
        assert_eq!(lex_ident("print").kind(), TokenKind::Keyword);
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(lex_ident("lets").kind(), TokenKind::Identifier);
        assert_eq!(lex_ident("le").kind(), TokenKind::Identifier);
        assert_eq!(lex_ident("let_").kind(), TokenKind::Identifier);
    }

    #[test]
    fn test_keyword_match_is_case_sensitive() {
        assert_eq!(lex_ident("Let").kind(), TokenKind::Identifier);
        assert_eq!(lex_ident("PRINT").kind(), TokenKind::Identifier);
    }

    #[test]
    fn test_custom_keyword_set() {
        let keywords = KeywordSet::new(["var"]);
        assert_eq!(lex_ident_with("var", &keywords).kind(), TokenKind::Keyword);
        assert_eq!(
            lex_ident_with("let", &keywords).kind(),
            TokenKind::Identifier
        );
    }

    #[test]
    fn test_empty_keyword_set() {
        let keywords = KeywordSet::new(Vec::<&str>::new());
        assert_eq!(
            lex_ident_with("let", &keywords).kind(),
            TokenKind::Identifier
        );
    }
}
