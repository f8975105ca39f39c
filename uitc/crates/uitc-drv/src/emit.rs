//! Rendering of token dumps and lexical diagnostics.

use std::io::Write;

use serde::{Deserialize, Serialize};
use uitc_lex::{LexError, Token};

use crate::error::Result;

/// Token dump formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line: `Number 12`, `Plus`, `Eof`
    #[default]
    Text,
    /// A JSON array of `{kind, text, start, end}` objects
    Json,
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    start: usize,
    end: usize,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        let span = token.span();
        Self {
            kind: token.kind().name(),
            text: token.text(),
            start: span.start,
            end: span.end,
        }
    }
}

/// Writes `tokens` to `out` in the requested format.
pub fn write_tokens<W: Write>(tokens: &[Token], format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for token in tokens {
                writeln!(out, "{}", token)?;
            }
        },
        OutputFormat::Json => {
            let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        },
    }
    Ok(())
}

/// Formats a lexical error with the offending line and a caret under the
/// bad character.
///
/// ```text
/// error: invalid character '#' at column 5
///   |
///   | x + #
///   |     ^
/// ```
pub fn render_lex_error(source: &str, err: &LexError) -> String {
    let span = err.span();
    let width = source
        .get(span.start..span.end)
        .map_or(1, |s| s.chars().count().max(1));
    let padding = source
        .get(..span.start)
        .map_or(span.start, |s| s.chars().count());

    // Keep one display column per character so the caret lines up.
    let line: String = source
        .chars()
        .map(|c| match c {
            '\t' => ' ',
            c if c.is_control() => char::REPLACEMENT_CHARACTER,
            c => c,
        })
        .collect();

    format!(
        "error: {}\n  |\n  | {}\n  | {}{}",
        err,
        line,
        " ".repeat(padding),
        "^".repeat(width)
    )
}
