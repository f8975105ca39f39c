//! CLI Interface E2E Tests
//!
//! These tests run the `uitc` binary and check its output, exit status and
//! configuration handling.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the uitc binary
fn uitc_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_uitc"))
}

/// A command isolated from any `uitc.toml` in the working tree or user config.
fn uitc_in(dir: &TempDir) -> Command {
    let mut cmd = Command::new(uitc_bin());
    cmd.current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
        .env("HOME", dir.path())
        .env_remove("RUST_LOG")
        .env_remove("UITC_CONFIG")
        .env_remove("UITC_VERBOSE");
    cmd
}

#[test]
fn test_cli_help() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    uitc_in(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("tokens")));
}

#[test]
fn test_cli_version() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    uitc_in(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_tokens_from_expr() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    uitc_in(&dir)
        .args(["tokens", "-e", "let x = (1 + 2.5) ^ 2"])
        .assert()
        .success()
        .stdout(
            "Keyword let\nIdentifier x\nEqual\nLParen\nNumber 1\nPlus\nNumber 2.5\nRParen\nCaret\nNumber 2\nEof\n",
        );
}

#[test]
fn test_tokens_from_file_strips_trailing_newline() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = dir.path().join("calc.uit");
    std::fs::write(&input, "a % b\n").unwrap();

    uitc_in(&dir)
        .arg("tokens")
        .arg(&input)
        .assert()
        .success()
        .stdout("Identifier a\nPercent\nIdentifier b\nEof\n");
}

#[test]
fn test_tokens_from_stdin() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    uitc_in(&dir)
        .arg("tokens")
        .write_stdin("print 42\r\n")
        .assert()
        .success()
        .stdout("Keyword print\nNumber 42\nEof\n");
}

#[test]
fn test_tokens_json_format() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let output = uitc_in(&dir)
        .args(["tokens", "-e", "n*2", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let kinds: Vec<_> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["kind"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(kinds, vec!["Identifier", "Star", "Number", "Eof"]);
}

#[test]
fn test_invalid_character_exits_with_error() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    uitc_in(&dir)
        .args(["tokens", "-e", "x + #"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains("error: invalid character '#' at column 5")
                .and(predicate::str::contains("  |     ^")),
        );
}

#[test]
fn test_second_decimal_point_is_fatal() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    uitc_in(&dir)
        .args(["tokens", "-e", "1.2.3"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid character '.' at column 4"));
}

#[test]
fn test_config_file_in_current_dir() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(
        dir.path().join("uitc.toml"),
        "[lexer]\nkeywords = [\"var\"]\n\n[output]\nformat = \"text\"\n",
    )
    .unwrap();

    uitc_in(&dir)
        .args(["tokens", "-e", "var let"])
        .assert()
        .success()
        .stdout("Keyword var\nIdentifier let\nEof\n");
}

#[test]
fn test_explicit_config_and_format_override() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "[output]\nformat = \"json\"\n").unwrap();

    uitc_in(&dir)
        .args(["--config"])
        .arg(&config)
        .args(["tokens", "-e", "1", "-F", "text"])
        .assert()
        .success()
        .stdout("Number 1\nEof\n");
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    uitc_in(&dir)
        .args(["--config", "missing.toml", "tokens", "-e", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_invalid_keyword_in_config() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(dir.path().join("uitc.toml"), "[lexer]\nkeywords = [\"\"]\n").unwrap();

    uitc_in(&dir)
        .args(["tokens", "-e", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty entry"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    uitc_in(&dir)
        .args(["--verbose", "--no-color", "tokens", "-e", "1"])
        .assert()
        .success()
        .stdout("Number 1\nEof\n")
        .stderr(predicate::str::contains("tokenizing"));
}
