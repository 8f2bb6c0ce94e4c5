//! Substitution engine: forward/reverse rewriting and random sampling.
//!
//! The operations here are total: there is no malformed input, only known
//! and unknown tokens/glyphs, and unknown ones pass through verbatim.
//!
//! ## Notes
//! - Forward substitution is a single left-to-right, non-overlapping scan of
//!   the `:code:` token grammar.
//! - Reverse substitution deliberately rewrites the **whole text once per
//!   reverse-index pair, in table order**, not as a combined single-pass
//!   scan. When one glyph is a literal substring of another, the pair
//!   processed first claims the span; a later pair cannot match inside text
//!   already rewritten, because `:code:` is never itself a registered glyph.
//!   This ordering is part of the contract, not an accident.

use rand::Rng;
use thiserror::Error;

use crate::vocab::Vocabulary;

/// Represent the one domain error of the engine: sampling needs entries.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SampleError {
    /// At least one glyph was requested from a table with no entries.
    #[error("cannot sample glyphs from an empty vocabulary")]
    EmptyVocabulary,
}

impl Vocabulary {
    /// Replace every known `:code:` token with its glyph.
    ///
    /// Tokens with an unknown code are emitted unchanged, colons included.
    /// A colon-delimited span whose inner text falls outside the shortcode
    /// charset is not a token at all and passes through verbatim.
    ///
    /// ```rust
    /// use mojicode_core::Vocabulary;
    ///
    /// let vocab = Vocabulary::default();
    /// assert_eq!(vocab.replace_shortcodes("ship it :rocket:"), "ship it 🚀");
    /// assert_eq!(vocab.replace_shortcodes(":notacode:"), ":notacode:");
    /// ```
    pub fn replace_shortcodes(&self, text: &str) -> String {
        self.token
            .replace_all(text, |caps: &regex::Captures<'_>| {
                match self.glyph_for(&caps[1]) {
                    Some(glyph) => glyph.to_string(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }

    /// Replace every occurrence of a known glyph with its `:code:` spelling.
    ///
    /// The text is rewritten once per reverse-index pair, in table order
    /// (see the module docs for why the order matters on overlapping
    /// glyphs). Characters outside the vocabulary, including unmapped
    /// pictographs, pass through unchanged.
    ///
    /// ```rust
    /// use mojicode_core::Vocabulary;
    ///
    /// let vocab = Vocabulary::default();
    /// assert_eq!(vocab.revert_glyphs("Great 👍🔥"), "Great :thumbsup::fire:");
    /// ```
    pub fn revert_glyphs(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (glyph, code) in &self.reverse {
            if out.contains(glyph.as_str()) {
                out = out.replace(glyph.as_str(), &format!(":{code}:"));
            }
        }
        out
    }

    /// Draw `count` glyphs from the thread-local RNG.
    ///
    /// See [`Vocabulary::random_glyphs_with`] for the contract.
    pub fn random_glyphs(&self, count: i64) -> Result<Vec<&str>, SampleError> {
        self.random_glyphs_with(count, &mut rand::thread_rng())
    }

    /// Draw `count` glyphs uniformly at random, **with replacement**.
    ///
    /// Each draw is independent and weighted per entry: if two codes map to
    /// the same glyph, that glyph is twice as likely. `count < 1` yields an
    /// empty vec, never an error.
    ///
    /// ## Errors
    ///
    /// [`SampleError::EmptyVocabulary`] if `count >= 1` and the table has no
    /// entries.
    pub fn random_glyphs_with<R: Rng + ?Sized>(
        &self,
        count: i64,
        rng: &mut R,
    ) -> Result<Vec<&str>, SampleError> {
        if count < 1 {
            return Ok(Vec::new());
        }
        if self.entries.is_empty() {
            return Err(SampleError::EmptyVocabulary);
        }
        let mut out = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let (_, glyph) = &self.entries[rng.gen_range(0..self.entries.len())];
            out.push(glyph.as_str());
        }
        Ok(out)
    }
}
