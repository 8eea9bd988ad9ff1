//! Core domain types for the adversarial game
//!
//! Words, tiles, patterns and the candidate set. Everything here is pure and
//! does no I/O or logging.

mod candidates;
mod error;
mod pattern;
mod tile;
mod word;

pub use candidates::{CandidateSet, prune_to_fixed_length};
pub use error::AbsurdleError;
pub use pattern::Pattern;
pub use tile::Tile;
pub use word::Word;
