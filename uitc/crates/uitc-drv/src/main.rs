//! uitc CLI - command-line front end for the Uit lexer.
//!
//! Parses arguments with clap, sets up logging, loads configuration and
//! dumps the token stream of the given source.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use uitc_drv::emit::render_lex_error;
use uitc_drv::{Config, DrvError, OutputFormat, Result, Session, SourceInput};

/// uitc - tools for the Uit expression language
#[derive(Parser, Debug)]
#[command(name = "uitc")]
#[command(author = "Uit Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tools for the Uit expression language", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "UITC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "UITC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "UITC_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of a source line
    ///
    /// Reads from --expr, FILE, or standard input, in that order.
    Tokens(TokensCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source file to tokenize
    file: Option<PathBuf>,

    /// Source text to tokenize
    #[arg(short, long, conflicts_with = "file")]
    expr: Option<String>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,
}

impl TokensCommand {
    fn input(&self) -> SourceInput {
        match (&self.expr, &self.file) {
            (Some(expr), _) => SourceInput::Expr(expr.clone()),
            (None, Some(path)) => SourceInput::File(path.clone()),
            (None, None) => SourceInput::Stdin,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.no_color) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize the logging system.
///
/// Logs go to stderr so stdout carries only the token dump. `RUST_LOG`
/// takes precedence over `--verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DrvError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Tokens(args) => execute_tokens(args, &config),
    }
}

/// Execute the tokens command.
///
/// Lexical errors are reported with a source excerpt and exit status 1.
fn execute_tokens(args: TokensCommand, config: &Config) -> Result<()> {
    let session = Session::new(config, args.format)?;
    let source = args.input().read()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match session.run(&source, &mut out) {
        Err(DrvError::Lex(err)) => {
            eprintln!("{}", render_lex_error(&source, &err));
            std::process::exit(1);
        },
        other => other,
    }
}
