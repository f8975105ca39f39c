//! uitc-drv - Uit driver
//!
//! Reads Uit source from an expression argument, a file, or stdin, runs it
//! through the lexer, and writes the token stream. The `uitc` binary is a
//! thin wrapper around [`Session`].

pub mod config;
pub mod emit;
pub mod error;

use std::io::{Read, Write};
use std::path::PathBuf;

use tracing::{debug, info};
use uitc_lex::Token;
use uitc_util::KeywordSet;

pub use config::Config;
pub use emit::OutputFormat;
pub use error::{DrvError, Result};

/// Where the source text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceInput {
    /// Source passed inline on the command line.
    Expr(String),
    /// Source read from a file.
    File(PathBuf),
    /// Source read from standard input.
    Stdin,
}

impl SourceInput {
    /// Reads the source text.
    ///
    /// A single trailing line terminator is removed from file and stdin
    /// input; Uit source is one line and newlines are not valid tokens.
    pub fn read(&self) -> Result<String> {
        let text = match self {
            Self::Expr(expr) => return Ok(expr.clone()),
            Self::File(path) => {
                debug!(path = %path.display(), "reading source file");
                std::fs::read_to_string(path)?
            },
            Self::Stdin => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                text
            },
        };
        Ok(strip_line_terminator(text))
    }
}

fn strip_line_terminator(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// A configured lexing session.
#[derive(Debug, Clone)]
pub struct Session {
    keywords: KeywordSet,
    format: OutputFormat,
}

impl Session {
    /// Creates a session from a loaded configuration.
    ///
    /// `format` overrides the configured output format when given.
    pub fn new(config: &Config, format: Option<OutputFormat>) -> Result<Self> {
        let keywords = config.keyword_set()?;
        let format = format.unwrap_or(config.output.format);
        info!(keywords = keywords.len(), ?format, "session created");
        Ok(Self { keywords, format })
    }

    /// The reserved words this session recognises.
    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// The output format of [`emit`](Self::emit).
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Tokenizes `source` with this session's keywords.
    pub fn tokenize(&self, source: &str) -> Result<Vec<Token>> {
        Ok(uitc_lex::tokenize(source, &self.keywords)?)
    }

    /// Writes `tokens` to `out` in this session's format.
    pub fn emit<W: Write>(&self, tokens: &[Token], out: &mut W) -> Result<()> {
        emit::write_tokens(tokens, self.format, out)
    }

    /// Tokenizes `source` and writes the result to `out`.
    ///
    /// Nothing is written if tokenizing fails.
    pub fn run<W: Write>(&self, source: &str, out: &mut W) -> Result<()> {
        let tokens = self.tokenize(source)?;
        self.emit(&tokens, out)
    }
}
