//! Game configuration
//!
//! Settings come from the command line once at startup: which dictionary to
//! read, the word length, and how patterns are printed.

use crate::core::{CandidateSet, prune_to_fixed_length};
use crate::dictionary::load_from_file;
use crate::output::GlyphStyle;
use anyhow::{Context, Result, bail};
use std::path::PathBuf;

/// Word length used when none is given
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Read a word length typed at a prompt
///
/// An empty answer picks [`DEFAULT_WORD_LENGTH`].
///
/// # Errors
///
/// Returns an error if the answer is not a whole number.
pub fn parse_word_length(answer: &str) -> Result<usize> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(DEFAULT_WORD_LENGTH);
    }
    answer
        .parse()
        .with_context(|| format!("Not a word length: {answer}"))
}

/// Settings for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub dictionary: PathBuf,
    pub word_length: usize,
    pub glyphs: GlyphStyle,
}

impl GameConfig {
    #[must_use]
    pub fn new(dictionary: impl Into<PathBuf>, word_length: usize) -> Self {
        Self {
            dictionary: dictionary.into(),
            word_length,
            glyphs: GlyphStyle::default(),
        }
    }

    #[must_use]
    pub fn with_glyphs(mut self, glyphs: GlyphStyle) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Read the dictionary and prune it to the configured length
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the word length is 0, or
    /// no word of that length exists in the dictionary.
    pub fn load_candidates(&self) -> Result<CandidateSet> {
        let raw = load_from_file(&self.dictionary).with_context(|| {
            format!("Failed to read dictionary {}", self.dictionary.display())
        })?;

        let candidates = prune_to_fixed_length(raw, self.word_length)?;
        if candidates.is_empty() {
            bail!(
                "Dictionary {} has no words of length {}",
                self.dictionary.display(),
                self.word_length
            );
        }

        log::info!(
            "{} unique words of length {}",
            candidates.len(),
            self.word_length
        );
        Ok(candidates)
    }
}
