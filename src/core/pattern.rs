//! Feedback pattern calculation and representation
//!
//! A pattern holds one [`Tile`] per guess position. Its canonical string is
//! the concatenation of tile codes (e.g. `"GAPAG"`), and patterns order
//! exactly like those strings.

use super::{Tile, Word};
use std::fmt;

/// Feedback pattern for one guess against one word
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern(Box<[Tile]>);

impl Pattern {
    /// Build a pattern from explicit tiles
    #[must_use]
    pub fn from_tiles(tiles: impl Into<Box<[Tile]>>) -> Self {
        Self(tiles.into())
    }

    /// All-exact pattern of the given length
    #[must_use]
    pub fn perfect(len: usize) -> Self {
        Self(vec![Tile::Exact; len].into_boxed_slice())
    }

    /// Calculate the pattern shown when `guess` is played and `target` is the answer
    ///
    /// Both words must have the same length; callers check this before scoring.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the unused-letter pool
    /// 2. Second pass, left to right: an unresolved position is present if the pool
    ///    still holds its letter (consuming one), absent otherwise
    ///
    /// # Examples
    /// ```
    /// use absurdle::core::{Pattern, Word};
    ///
    /// let pattern = Pattern::calculate(&Word::new("eerie"), &Word::new("erase"));
    /// assert_eq!(pattern.to_string(), "GAPAG");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        debug_assert_eq!(
            guess.len(),
            target.len(),
            "guess and target must have equal length"
        );

        let mut tiles = vec![Tile::Absent; guess.len()];
        let mut unused = target.char_counts();

        // First pass: exact position matches
        for ((tile, g), t) in tiles.iter_mut().zip(guess.chars()).zip(target.chars()) {
            if g == t {
                *tile = Tile::Exact;
                if let Some(count) = unused.get_mut(t) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: leftmost unresolved occurrence claims the letter first
        for (tile, g) in tiles.iter_mut().zip(guess.chars()) {
            if *tile == Tile::Exact {
                continue;
            }
            if let Some(count) = unused.get_mut(g)
                && *count > 0
            {
                *tile = Tile::Present;
                *count -= 1;
            }
        }

        Self(tiles.into_boxed_slice())
    }

    /// Tiles in guess order
    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every tile is exact
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&tile| tile == Tile::Exact)
    }

    /// Count the tiles of one kind
    #[must_use]
    pub fn count(&self, tile: Tile) -> usize {
        self.0.iter().filter(|&&t| t == tile).count()
    }

    /// Canonical code string, e.g. `"GAPAG"`
    #[must_use]
    pub fn to_codes(&self) -> String {
        self.0.iter().map(|tile| tile.code()).collect()
    }

    /// Emoji string, e.g. `"🟩⬜🟨⬜🟩"`
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|tile| tile.glyph()).collect()
    }

    /// Parse a pattern from codes or glyphs, e.g. `"GPA"` or `"🟩🟨⬜"`
    ///
    /// Returns `None` for an empty string or any unknown symbol.
    ///
    /// # Examples
    /// ```
    /// use absurdle::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GPA").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let tiles: Option<Vec<Tile>> = s.chars().map(Tile::from_char).collect();
        tiles
            .filter(|tiles| !tiles.is_empty())
            .map(Self::from_tiles)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_codes())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}
