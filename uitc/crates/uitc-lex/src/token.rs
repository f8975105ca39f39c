//! Token definitions.
//!
//! A [`Token`] is a [`TokenKind`] plus, for numbers, identifiers and
//! keywords, the exact source text it was scanned from. Operators and the
//! end marker never carry text.

use std::fmt;

use uitc_util::Span;

/// The classification of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Decimal literal such as `42` or `3.14`
    Number,
    /// Name that is not a reserved word
    Identifier,
    /// Reserved word
    Keyword,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `^`
    Caret,
    /// `=`
    Equal,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of input
    Eof,
}

impl TokenKind {
    /// Maps a single-character operator to its kind.
    ///
    /// ```
    /// use uitc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_operator('^'), Some(TokenKind::Caret));
    /// assert_eq!(TokenKind::from_operator('#'), None);
    /// ```
    pub fn from_operator(c: char) -> Option<Self> {
        let kind = match c {
            '+' => Self::Plus,
            '-' => Self::Minus,
            '*' => Self::Star,
            '/' => Self::Slash,
            '%' => Self::Percent,
            '^' => Self::Caret,
            '=' => Self::Equal,
            '(' => Self::LParen,
            ')' => Self::RParen,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns true for the kinds whose tokens carry source text.
    #[inline]
    pub fn has_text(self) -> bool {
        matches!(self, Self::Number | Self::Identifier | Self::Keyword)
    }

    /// Returns the name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Number => "Number",
            Self::Identifier => "Identifier",
            Self::Keyword => "Keyword",
            Self::Plus => "Plus",
            Self::Minus => "Minus",
            Self::Star => "Star",
            Self::Slash => "Slash",
            Self::Percent => "Percent",
            Self::Caret => "Caret",
            Self::Equal => "Equal",
            Self::LParen => "LParen",
            Self::RParen => "RParen",
            Self::Eof => "Eof",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scanned token.
///
/// Tokens are immutable; the constructors guarantee that text is present
/// exactly when [`TokenKind::has_text`] holds.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: Option<String>,
    span: Span,
}

impl Token {
    /// Creates a number token from its literal text.
    pub fn number(text: impl Into<String>, span: Span) -> Self {
        Self::with_text(TokenKind::Number, text.into(), span)
    }

    /// Creates an identifier token.
    pub fn identifier(text: impl Into<String>, span: Span) -> Self {
        Self::with_text(TokenKind::Identifier, text.into(), span)
    }

    /// Creates a keyword token.
    pub fn keyword(text: impl Into<String>, span: Span) -> Self {
        Self::with_text(TokenKind::Keyword, text.into(), span)
    }

    /// Creates a token that carries no text.
    ///
    /// Returns `None` if `kind` requires text.
    pub fn operator(kind: TokenKind, span: Span) -> Option<Self> {
        (!kind.has_text()).then(|| Self::without_text(kind, span))
    }

    pub(crate) fn without_text(kind: TokenKind, span: Span) -> Self {
        debug_assert!(!kind.has_text(), "{} tokens carry text", kind);
        Self {
            kind,
            text: None,
            span,
        }
    }

    /// Creates the end marker at `offset`.
    pub fn eof(offset: usize) -> Self {
        Self::without_text(TokenKind::Eof, Span::point(offset))
    }

    fn with_text(kind: TokenKind, text: String, span: Span) -> Self {
        Self {
            kind,
            text: Some(text),
            span,
        }
    }

    /// The token's kind.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The scanned text for numbers, identifiers and keywords.
    #[inline]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Where the token was found.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns true if this is the end marker.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) => write!(f, "{} {}", self.kind, text),
            None => write!(f, "{}", self.kind),
        }
    }
}
