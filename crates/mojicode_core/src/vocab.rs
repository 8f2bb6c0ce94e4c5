//! Vocabulary table: the canonical code↔glyph mapping.
//!
//! This module is registry-first: the built-in vocabulary lives in a `const`
//! table ([`DEFAULT_VOCABULARY`]) and callers work with an explicitly
//! constructed [`Vocabulary`] value rather than an ambient global, so
//! differently-configured tables can coexist (useful for testing).
//!
//! ## Notes
//! - Codes are **case-sensitive** and restricted to `[A-Za-z0-9_+-]`, which
//!   is also the forward-substitution token grammar.
//! - Glyphs are non-empty strings of one or more Unicode scalar values. A
//!   single glyph may span several code points (e.g. `heart` carries a
//!   variation selector).
//! - The reverse (glyph→code) index is derived from the forward table at
//!   construction time; the two are one immutable unit. If two codes map to
//!   the same glyph, the **last-registered** code wins in the reverse index,
//!   and the glyph keeps its first-registration position in the rewrite
//!   order (see [`crate::engine`]).

use std::collections::HashMap;

use regex::Regex;
use thiserror::Error;

/// A single code/glyph pairing in the built-in table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// Short identifier written between colons, e.g. `"fire"` in `:fire:`.
    pub code: &'static str,
    /// Replacement glyph: one or more Unicode scalar values.
    pub glyph: &'static str,
}

const fn entry(code: &'static str, glyph: &'static str) -> Entry {
    Entry { code, glyph }
}

/// Built-in vocabulary: 21 common shortcodes.
pub const DEFAULT_VOCABULARY: &[Entry] = &[
    entry("smile", "😄"),
    entry("grin", "😁"),
    entry("joy", "😂"),
    entry("thumbsup", "👍"),
    entry("thumbsdown", "👎"),
    // U+2764 U+FE0F: two scalars, the second is the emoji variation selector
    entry("heart", "\u{2764}\u{fe0f}"),
    entry("sparkles", "✨"),
    entry("fire", "🔥"),
    entry("star", "⭐"),
    entry("100", "💯"),
    entry("check", "✅"),
    entry("x", "❌"),
    entry("rocket", "🚀"),
    entry("party", "🥳"),
    entry("thinking", "🤔"),
    entry("sob", "😭"),
    entry("pray", "🙏"),
    entry("ok_hand", "👌"),
    entry("clap", "👏"),
    entry("wave", "👋"),
    entry("tada", "🎉"),
];

/// Token grammar for forward substitution: `:` + code charset + `:`.
///
/// The capture group holds the inner code. Matches are found left-to-right,
/// non-overlapping, with a maximal run of allowed characters between the
/// colons.
const TOKEN_PATTERN: &str = r":([A-Za-z0-9_+-]+):";

/// Check a code against the shortcode charset (`[A-Za-z0-9_+-]+`).
///
/// Must stay in sync with [`TOKEN_PATTERN`]: a code that passes here is
/// exactly a code that can be written as a `:code:` token.
fn is_valid_code(code: &str) -> bool {
    !code.is_empty()
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-'))
}

/// Represent vocabulary construction errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VocabError {
    /// The code is empty or uses characters outside `[A-Za-z0-9_+-]`.
    #[error("invalid shortcode {0:?}: codes must be non-empty and use only [A-Za-z0-9_+-]")]
    InvalidCode(String),
    /// The glyph for this code is the empty string.
    #[error("empty glyph for shortcode {0:?}")]
    EmptyGlyph(String),
    /// The code was registered twice; the table is keyed by code.
    #[error("duplicate shortcode {0:?}")]
    DuplicateCode(String),
}

/// An immutable code↔glyph table plus its derived reverse index.
///
/// Constructed once (via [`Vocabulary::new`] or [`Vocabulary::default`]) and
/// never mutated afterwards. All queries and transformations take `&self`.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Entries in registration order.
    pub(crate) entries: Vec<(String, String)>,
    /// code → index into `entries`.
    pub(crate) by_code: HashMap<String, usize>,
    /// Derived (glyph, code) pairs driving reverse substitution, in
    /// first-registration order, deduplicated by glyph (last code wins).
    pub(crate) reverse: Vec<(String, String)>,
    /// glyph → index into `reverse`.
    pub(crate) by_glyph: HashMap<String, usize>,
    /// Compiled `:code:` token pattern.
    pub(crate) token: Regex,
}

impl Vocabulary {
    /// Build a vocabulary from (code, glyph) pairs.
    ///
    /// ## Errors
    ///
    /// Returns a [`VocabError`] if a code is empty or outside the shortcode
    /// charset, a glyph is empty, or a code is registered twice. Duplicate
    /// *glyphs* are allowed; see the module docs for the reverse-index
    /// tie-break.
    pub fn new<I>(pairs: I) -> Result<Self, VocabError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut entries: Vec<(String, String)> = Vec::new();
        let mut by_code: HashMap<String, usize> = HashMap::new();

        for (code, glyph) in pairs {
            if !is_valid_code(&code) {
                return Err(VocabError::InvalidCode(code));
            }
            if glyph.is_empty() {
                return Err(VocabError::EmptyGlyph(code));
            }
            if by_code.contains_key(&code) {
                return Err(VocabError::DuplicateCode(code));
            }
            by_code.insert(code.clone(), entries.len());
            entries.push((code, glyph));
        }

        // Derive the reverse index in one pass: a repeated glyph keeps its
        // original slot but takes the later code.
        let mut reverse: Vec<(String, String)> = Vec::new();
        let mut by_glyph: HashMap<String, usize> = HashMap::new();
        for (code, glyph) in &entries {
            match by_glyph.get(glyph) {
                Some(&slot) => reverse[slot].1 = code.clone(),
                None => {
                    by_glyph.insert(glyph.clone(), reverse.len());
                    reverse.push((glyph.clone(), code.clone()));
                }
            }
        }

        let token = Regex::new(TOKEN_PATTERN).expect("INVARIANT: shortcode token pattern compiles");

        tracing::debug!(
            entries = entries.len(),
            reverse = reverse.len(),
            "constructed vocabulary"
        );

        Ok(Self {
            entries,
            by_code,
            reverse,
            by_glyph,
            token,
        })
    }

    /// Look up the glyph for a code. Case-sensitive.
    pub fn glyph_for(&self, code: &str) -> Option<&str> {
        self.by_code.get(code).map(|&i| self.entries[i].1.as_str())
    }

    /// Look up the code for an exact glyph string, via the reverse index.
    ///
    /// If two codes share this glyph, the last-registered code is returned.
    pub fn code_for(&self, glyph: &str) -> Option<&str> {
        self.by_glyph.get(glyph).map(|&i| self.reverse[i].1.as_str())
    }

    /// Return every registered code, sorted lexicographically.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.entries.iter().map(|(c, _)| c.as_str()).collect();
        codes.sort_unstable();
        codes
    }

    /// Iterate (code, glyph) pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(c, g)| (c.as_str(), g.as_str()))
    }

    /// Number of registered codes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Vocabulary {
    /// Build the built-in table ([`DEFAULT_VOCABULARY`]).
    fn default() -> Self {
        Self::new(
            DEFAULT_VOCABULARY
                .iter()
                .map(|e| (e.code.to_string(), e.glyph.to_string())),
        )
        .expect("INVARIANT: built-in vocabulary table is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(c, g)| (c.to_string(), g.to_string()))
            .collect()
    }

    #[test]
    fn default_table_resolves_both_ways() {
        let vocab = Vocabulary::default();
        assert_eq!(vocab.glyph_for("fire"), Some("🔥"));
        assert_eq!(vocab.code_for("🔥"), Some("fire"));
        assert_eq!(vocab.glyph_for("Fire"), None, "lookup is case-sensitive");
    }

    #[test]
    fn codes_are_sorted_and_complete() {
        let vocab = Vocabulary::default();
        let codes = vocab.codes();
        assert_eq!(codes.len(), 21);
        assert_eq!(codes.first(), Some(&"100"));
        assert!(codes.contains(&"x"));
        assert!(codes.contains(&"thinking"));
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn duplicate_glyph_last_registration_wins() {
        let vocab = Vocabulary::new(pairs(&[("plus", "➕"), ("add", "➕")])).unwrap();
        assert_eq!(vocab.code_for("➕"), Some("add"));
        // Forward lookups are untouched by the tie-break.
        assert_eq!(vocab.glyph_for("plus"), Some("➕"));
        assert_eq!(vocab.glyph_for("add"), Some("➕"));
    }

    #[test]
    fn duplicate_code_is_rejected() {
        let err = Vocabulary::new(pairs(&[("fire", "🔥"), ("fire", "🧯")])).unwrap_err();
        assert_eq!(err, VocabError::DuplicateCode("fire".to_string()));
    }

    #[test]
    fn invalid_codes_are_rejected() {
        for bad in ["", "has space", "colon:code", "émoji"] {
            let err = Vocabulary::new(pairs(&[(bad, "🔥")])).unwrap_err();
            assert_eq!(err, VocabError::InvalidCode(bad.to_string()), "code {bad:?}");
        }
    }

    #[test]
    fn empty_glyph_is_rejected() {
        let err = Vocabulary::new(pairs(&[("ghost", "")])).unwrap_err();
        assert_eq!(err, VocabError::EmptyGlyph("ghost".to_string()));
    }

    #[test]
    fn empty_vocabulary_is_allowed() {
        let vocab = Vocabulary::new(Vec::new()).unwrap();
        assert!(vocab.is_empty());
        assert_eq!(vocab.len(), 0);
        assert!(vocab.codes().is_empty());
    }

    #[test]
    fn charset_accepts_plus_minus_underscore() {
        let vocab = Vocabulary::new(pairs(&[("a+b-c_1", "🔣")])).unwrap();
        assert_eq!(vocab.glyph_for("a+b-c_1"), Some("🔣"));
    }
}
