//! Dictionary loading
//!
//! A dictionary is any text file of whitespace-separated words. Loading keeps
//! every token as written; pruning to one word length happens later in
//! [`crate::core::prune_to_fixed_length`].

use std::fs;
use std::io;
use std::path::Path;

/// Load all words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use absurdle::dictionary::load_from_file;
///
/// let words = load_from_file("dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_str(&content);
    log::info!("Read {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Split text into words on any whitespace
///
/// # Examples
/// ```
/// use absurdle::dictionary::words_from_str;
///
/// let words = words_from_str("cat dog\n  dot\tcat\n");
/// assert_eq!(words, ["cat", "dog", "dot", "cat"]);
/// ```
#[must_use]
pub fn words_from_str(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}
