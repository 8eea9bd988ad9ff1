//! Word representation
//!
//! A Word keeps its text exactly as loaded (no case folding) together with its
//! characters, so patterns can be computed position by position for any
//! alphabet.

use rustc_hash::FxHashMap;
use std::fmt;

/// An immutable dictionary word or guess
///
/// Length is measured in `char`s, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
    chars: Box<[char]>,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Examples
    /// ```
    /// use absurdle::core::Word;
    ///
    /// let word = Word::new("Crane");
    /// assert_eq!(word.text(), "Crane");
    /// assert_eq!(word.len(), 5);
    /// ```
    pub fn new(text: impl Into<String>) -> Self {
        let text: String = text.into();
        let chars = text.chars().collect();
        Self { text, chars }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the characters of the word
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Count of each character in the word
    ///
    /// Seeds the unused-letter pool for pattern calculation.
    #[inline]
    #[must_use]
    pub fn char_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Word {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_keeps_case() {
        let word = Word::new("CrAnE");
        assert_eq!(word.text(), "CrAnE");
        assert_ne!(word, Word::new("crane"));
    }

    #[test]
    fn word_length_counts_chars() {
        assert_eq!(Word::new("crane").len(), 5);
        assert_eq!(Word::new("café").len(), 4);
        assert!(Word::new("").is_empty());
    }

    #[test]
    fn word_chars() {
        let word = Word::new("speed");
        assert_eq!(word.chars(), &['s', 'p', 'e', 'e', 'd']);
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("speed");
        let counts = word.char_counts();
        assert_eq!(counts.get(&'s'), Some(&1));
        assert_eq!(counts.get(&'p'), Some(&1));
        assert_eq!(counts.get(&'e'), Some(&2));
        assert_eq!(counts.get(&'d'), Some(&1));
        assert_eq!(counts.get(&'z'), None);
    }

    #[test]
    fn word_char_counts_all_same() {
        let counts = Word::new("aaaaa").char_counts();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&'a'), Some(&5));
    }

    #[test]
    fn word_ordering_is_alphabetical() {
        let mut words = vec![Word::new("dot"), Word::new("cat"), Word::new("dog")];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["cat", "dog", "dot"]);
    }

    #[test]
    fn word_display() {
        assert_eq!(format!("{}", Word::new("crane")), "crane");
    }
}
