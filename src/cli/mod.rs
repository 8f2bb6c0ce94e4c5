//! CLI module for mojicode
//!
//! ## Commands
//!
//! - `replace <TEXT>...` - Replace `:shortcode:` tokens with glyphs
//! - `revert <TEXT>...` - Replace known glyphs with `:shortcode:` tokens
//! - `list` - List available shortcodes
//! - `random [-n N]` - Print random glyphs
//! - `serve [-p PORT]` - Serve an HTML page listing the vocabulary
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::process;

use clap::{Parser, Subcommand};

use mojicode_core::Vocabulary;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Emoji shortcode substitution toolkit
#[derive(Parser, Debug)]
#[command(name = "mojicode")]
#[command(version = VERSION)]
#[command(about = "Replace, revert, list and sample emoji shortcodes", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replace `:shortcode:` tokens with glyphs (prints result)
    Replace {
        /// Text to transform; multiple args are joined with spaces
        #[arg(value_name = "TEXT", required = true)]
        text: Vec<String>,
    },

    /// Replace known glyphs with `:shortcode:` tokens (prints result)
    Revert {
        /// Text to transform; multiple args are joined with spaces
        #[arg(value_name = "TEXT", required = true)]
        text: Vec<String>,
    },

    /// List available shortcodes
    List,

    /// Print random glyphs
    Random {
        /// Number of glyphs to print
        #[arg(
            short = 'n',
            long = "count",
            value_name = "N",
            default_value_t = 1,
            allow_negative_numbers = true
        )]
        count: i64,
    },

    /// Serve a page listing the vocabulary over HTTP
    Serve {
        /// Port to listen on
        #[arg(short = 'p', long = "port", value_name = "PORT", default_value_t = 8000)]
        port: u16,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let vocab = Vocabulary::default();

    match cli.command {
        Command::Replace { text } => commands::replace_text(&vocab, &text),
        Command::Revert { text } => commands::revert_text(&vocab, &text),
        Command::List => commands::list_codes(&vocab),
        Command::Random { count } => commands::random_glyphs(&vocab, count),
        Command::Serve { port } => commands::serve(vocab, port),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_replace() {
        let cli = Cli::try_parse_from(["mojicode", "replace", "hi", ":fire:"]).unwrap();
        if let Command::Replace { text } = cli.command {
            assert_eq!(text, vec!["hi".to_string(), ":fire:".to_string()]);
        } else {
            panic!("Expected Replace command");
        }
    }

    #[test]
    fn test_cli_parse_revert() {
        let cli = Cli::try_parse_from(["mojicode", "revert", "🔥"]).unwrap();
        assert!(matches!(cli.command, Command::Revert { .. }));
    }

    #[test]
    fn test_cli_parse_list() {
        let cli = Cli::try_parse_from(["mojicode", "list"]).unwrap();
        assert!(matches!(cli.command, Command::List));
    }

    #[test]
    fn test_cli_parse_random_default_count() {
        let cli = Cli::try_parse_from(["mojicode", "random"]).unwrap();
        if let Command::Random { count } = cli.command {
            assert_eq!(count, 1);
        } else {
            panic!("Expected Random command");
        }
    }

    #[test]
    fn test_cli_parse_random_with_count() {
        let cli = Cli::try_parse_from(["mojicode", "random", "-n", "5"]).unwrap();
        if let Command::Random { count } = cli.command {
            assert_eq!(count, 5);
        } else {
            panic!("Expected Random command");
        }
    }

    #[test]
    fn test_cli_parse_random_negative_count() {
        let cli = Cli::try_parse_from(["mojicode", "random", "-n", "-3"]).unwrap();
        if let Command::Random { count } = cli.command {
            assert_eq!(count, -3);
        } else {
            panic!("Expected Random command");
        }
    }

    #[test]
    fn test_cli_parse_serve_default_port() {
        let cli = Cli::try_parse_from(["mojicode", "serve"]).unwrap();
        if let Command::Serve { port } = cli.command {
            assert_eq!(port, 8000);
        } else {
            panic!("Expected Serve command");
        }
    }

    #[test]
    fn test_cli_parse_serve_with_port() {
        let cli = Cli::try_parse_from(["mojicode", "serve", "--port", "9000"]).unwrap();
        if let Command::Serve { port } = cli.command {
            assert_eq!(port, 9000);
        } else {
            panic!("Expected Serve command");
        }
    }

    #[test]
    fn test_cli_replace_requires_text() {
        assert!(Cli::try_parse_from(["mojicode", "replace"]).is_err());
        assert!(Cli::try_parse_from(["mojicode", "revert"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["mojicode", "frobnicate"]).is_err());
    }
}
