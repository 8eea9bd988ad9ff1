//! Candidate word set
//!
//! The words still consistent with every pattern revealed so far, all of the
//! session's fixed length.

use super::{AbsurdleError, Word};
use std::collections::BTreeSet;
use std::collections::btree_set;

/// Set of unique candidate words sharing one fixed length
///
/// Iterates alphabetically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    word_length: usize,
    words: BTreeSet<Word>,
}

impl CandidateSet {
    /// Create an empty set for words of `word_length` characters
    #[must_use]
    pub const fn new(word_length: usize) -> Self {
        Self {
            word_length,
            words: BTreeSet::new(),
        }
    }

    /// Add a word
    ///
    /// Returns `false` if the word has the wrong length or is already present.
    pub fn insert(&mut self, word: Word) -> bool {
        word.len() == self.word_length && self.words.insert(word)
    }

    /// The fixed length every member has
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Members in alphabetical order
    pub fn iter(&self) -> btree_set::Iter<'_, Word> {
        self.words.iter()
    }

    /// Take the members out, leaving the set empty
    pub(crate) fn take_words(&mut self) -> BTreeSet<Word> {
        std::mem::take(&mut self.words)
    }

    /// Replace the members wholesale
    ///
    /// Callers guarantee every word already has the right length.
    pub(crate) fn replace_words(&mut self, words: BTreeSet<Word>) {
        debug_assert!(words.iter().all(|w| w.len() == self.word_length));
        self.words = words;
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Word;
    type IntoIter = btree_set::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Keep the unique words of exactly `length` characters
///
/// # Errors
/// Returns [`AbsurdleError::InvalidLength`] if `length` is 0.
///
/// # Examples
/// ```
/// use absurdle::core::prune_to_fixed_length;
///
/// let words = prune_to_fixed_length(["cat", "cats", "dog", "dot", "cat"], 3).unwrap();
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["cat", "dog", "dot"]);
/// ```
pub fn prune_to_fixed_length<I, S>(raw_words: I, length: usize) -> Result<CandidateSet, AbsurdleError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    if length < 1 {
        return Err(AbsurdleError::InvalidLength(length));
    }

    let mut candidates = CandidateSet::new(length);
    for raw in raw_words {
        candidates.insert(Word::new(raw));
    }
    Ok(candidates)
}
