//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use mojicode_core::Vocabulary;

use super::{CliError, CliResult, ExitCode};
use crate::server;

/// Join positional text arguments into one input string.
///
/// Multiple shell words arrive as separate args; they are joined with single
/// spaces, so quoting the whole text is optional.
fn join_args(args: &[String]) -> String {
    args.join(" ")
}

/// `replace`: shortcodes → glyphs.
pub fn replace_text(vocab: &Vocabulary, args: &[String]) -> CliResult<ExitCode> {
    println!("{}", vocab.replace_shortcodes(&join_args(args)));
    Ok(ExitCode::SUCCESS)
}

/// `revert`: glyphs → shortcodes.
pub fn revert_text(vocab: &Vocabulary, args: &[String]) -> CliResult<ExitCode> {
    println!("{}", vocab.revert_glyphs(&join_args(args)));
    Ok(ExitCode::SUCCESS)
}

/// `list`: print every registered code with its glyph.
pub fn list_codes(vocab: &Vocabulary) -> CliResult<ExitCode> {
    print!("{}", render_list(vocab));
    Ok(ExitCode::SUCCESS)
}

/// Render the `list` output: one `:code: \tglyph` line per entry, sorted by
/// code. Split out of [`list_codes`] so tests can assert on it directly.
pub fn render_list(vocab: &Vocabulary) -> String {
    let mut out = String::new();
    for code in vocab.codes() {
        if let Some(glyph) = vocab.glyph_for(code) {
            out.push_str(&format!(":{code}: \t{glyph}\n"));
        }
    }
    out
}

/// `random`: print `count` glyphs joined with spaces.
pub fn random_glyphs(vocab: &Vocabulary, count: i64) -> CliResult<ExitCode> {
    let glyphs = vocab
        .random_glyphs(count)
        .map_err(|e| CliError::failure(format!("Error: {e}")))?;
    println!("{}", glyphs.join(" "));
    Ok(ExitCode::SUCCESS)
}

/// `serve`: run the HTTP listener until interrupted.
///
/// The binary's `main` stays synchronous; the async runtime lives only for
/// the lifetime of this command.
pub fn serve(vocab: Vocabulary, port: u16) -> CliResult<ExitCode> {
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::failure(format!("Error starting async runtime: {e}")))?;

    runtime
        .block_on(server::serve(vocab, port))
        .map_err(|e| CliError::failure(format!("Error: {e}")))?;

    Ok(ExitCode::SUCCESS)
}
