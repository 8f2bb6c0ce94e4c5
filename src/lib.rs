#![forbid(unsafe_code)]
//! mojicode: emoji shortcode tooling.
//!
//! Converts between `:shortcode:` notation and literal emoji glyphs over a
//! fixed vocabulary, in both directions, and exposes the vocabulary through
//! a subcommand CLI and a read-only HTML page.
//!
//! The conversions themselves live in [`mojicode_core`]; this crate adds the
//! thin IO surfaces on top:
//!
//! - `cli` - clap subcommand dispatch (`replace`, `revert`, `list`,
//!   `random`, `serve`)
//! - `server` - the axum listener behind `serve`
//!
//! ## Panic Policy
//!
//! Production code uses `Result` with `?` / `map_err`; the `cli` module
//! enforces `#![deny(clippy::unwrap_used)]`. `.expect("INVARIANT: ...")` is
//! reserved for true invariants. Tests may unwrap freely.

pub mod cli;
pub mod server;

pub use mojicode_core::{DEFAULT_VOCABULARY, Entry, SampleError, VocabError, Vocabulary};
