//! Tile feedback symbols
//!
//! Each tile has a one-letter code and a display glyph:
//! - `A` / ⬜ = Absent (no unmatched occurrence left in the word)
//! - `G` / 🟩 = Exact (right letter, right position)
//! - `P` / 🟨 = Present (letter occurs elsewhere)
//!
//! Tiles are ordered `Absent < Exact < Present`, the byte order of their codes.
//! Patterns compare tile by tile with this order, which makes the tie-break
//! between equally large groups the same as comparing pattern code strings.

/// Feedback for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tile {
    Absent,
    Exact,
    Present,
}

impl Tile {
    /// All tiles in ascending order
    pub const ALL: [Self; 3] = [Self::Absent, Self::Exact, Self::Present];

    /// One-letter code used in pattern strings
    #[inline]
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Absent => 'A',
            Self::Exact => 'G',
            Self::Present => 'P',
        }
    }

    /// Emoji glyph used in transcripts
    #[inline]
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Exact => '🟩',
            Self::Present => '🟨',
        }
    }

    /// Parse a tile from a code letter or glyph
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for exact
    /// - 'P'/'p'/'Y'/'y'/🟨 for present
    /// - 'A'/'a'/'X'/'x'/'-'/'_'/⬜/⬛ for absent
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Exact),
            'P' | 'p' | 'Y' | 'y' | '🟨' => Some(Self::Present),
            'A' | 'a' | 'X' | 'x' | '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}
