//! Error type for the adversarial game core
//!
//! Every variant is a precondition violation. Nothing here is retried; the
//! caller decides whether to re-prompt.

use std::fmt;

/// Errors raised by pruning, selection and the game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbsurdleError {
    /// Requested word length is below 1
    InvalidLength(usize),
    /// `apply` was called with no candidates left
    EmptyCandidateSet,
    /// Guess length differs from the session's word length
    GuessLengthMismatch { expected: usize, actual: usize },
    /// A guess arrived after the game already ended
    GameFinished,
    /// Undo requested with no turns played
    NothingToUndo,
}

impl fmt::Display for AbsurdleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word length must be at least 1, got {len}")
            }
            Self::EmptyCandidateSet => write!(f, "Candidate set is empty"),
            Self::GuessLengthMismatch { expected, actual } => {
                write!(f, "Guess must be exactly {expected} letters, got {actual}")
            }
            Self::GameFinished => write!(f, "The game is already finished"),
            Self::NothingToUndo => write!(f, "Nothing to undo"),
        }
    }
}

impl std::error::Error for AbsurdleError {}
