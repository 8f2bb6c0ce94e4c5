#![forbid(unsafe_code)]
//! Provide the vocabulary table and substitution engine for mojicode.
//!
//! This crate is intentionally small and dependency-light. It contains the
//! code↔glyph vocabulary and the deterministic text transformations built on
//! top of it, so that the CLI and the HTTP layer share exactly one source of
//! truth.
//!
//! ## Notes
//!
//! - This is a "semantic core" crate: **no IO**, no global state, no
//!   CLI/HTTP-specific types. The only non-determinism lives in the
//!   convenience sampling wrapper, which draws from the thread-local RNG;
//!   everything else is a pure function of (vocabulary, input).
//! - A [`Vocabulary`] is constructed once and read-only afterwards. All
//!   operations take `&self`, so a table can be shared freely across threads.

pub mod engine;
pub mod vocab;

pub use engine::SampleError;
pub use vocab::{DEFAULT_VOCABULARY, Entry, VocabError, Vocabulary};
