//! Game session
//!
//! Owns the candidate set across guesses, records the transcript and decides
//! when the game is over. A game ends only when a revealed pattern is all
//! exact, never just because one candidate is left.

use crate::adversary;
use crate::core::{AbsurdleError, CandidateSet, Pattern, Word};

/// Whether a game still accepts guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Finished,
}

/// One played guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Check whether a transcript ends the game
///
/// An empty transcript is never finished; otherwise the last pattern decides.
#[must_use]
pub fn is_finished(patterns: &[Pattern]) -> bool {
    patterns.last().is_some_and(Pattern::is_perfect)
}

/// An adversarial game over one candidate set
#[derive(Debug, Clone)]
pub struct Game {
    initial: CandidateSet,
    candidates: CandidateSet,
    turns: Vec<Turn>,
    snapshots: Vec<CandidateSet>,
}

impl Game {
    /// Start a game over `candidates`
    #[must_use]
    pub fn new(candidates: CandidateSet) -> Self {
        log::debug!(
            "New game: {} candidates of length {}",
            candidates.len(),
            candidates.word_length()
        );
        Self {
            initial: candidates.clone(),
            candidates,
            turns: Vec::new(),
            snapshots: Vec::new(),
        }
    }

    /// Play one guess and return the recorded turn
    ///
    /// # Errors
    /// - [`AbsurdleError::GameFinished`] once an all-exact pattern was revealed
    /// - any error from [`adversary::apply`]
    ///
    /// The game is unchanged on error.
    pub fn guess(&mut self, guess: &str) -> Result<Turn, AbsurdleError> {
        if self.is_finished() {
            return Err(AbsurdleError::GameFinished);
        }

        let guess = Word::new(guess);
        let before = self.candidates.clone();
        let pattern = adversary::apply(&guess, &mut self.candidates)?;

        log::debug!(
            "{guess} -> {pattern}: {} -> {} candidates",
            before.len(),
            self.candidates.len()
        );

        let turn = Turn {
            guess,
            pattern,
            candidates_before: before.len(),
            candidates_after: self.candidates.len(),
        };
        self.snapshots.push(before);
        self.turns.push(turn.clone());

        if self.is_finished() {
            log::info!("Game finished after {} guesses", self.turns.len());
        }

        Ok(turn)
    }

    /// Take back the last guess
    ///
    /// # Errors
    /// Returns [`AbsurdleError::NothingToUndo`] if no guess was played.
    pub fn undo(&mut self) -> Result<Turn, AbsurdleError> {
        let (Some(turn), Some(snapshot)) = (self.turns.pop(), self.snapshots.pop()) else {
            return Err(AbsurdleError::NothingToUndo);
        };
        log::debug!("Undid {}", turn.guess);
        self.candidates = snapshot;
        Ok(turn)
    }

    /// Start over with the initial candidates
    pub fn restart(&mut self) {
        self.candidates = self.initial.clone();
        self.turns.clear();
        self.snapshots.clear();
        log::debug!("Game restarted with {} candidates", self.candidates.len());
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        if self.is_finished() {
            GameState::Finished
        } else {
            GameState::InProgress
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.turns.last().is_some_and(|turn| turn.pattern.is_perfect())
    }

    /// Patterns revealed so far, oldest first
    #[must_use]
    pub fn transcript(&self) -> Vec<Pattern> {
        self.turns.iter().map(|turn| turn.pattern.clone()).collect()
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    #[must_use]
    pub fn initial_size(&self) -> usize {
        self.initial.len()
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.candidates.word_length()
    }
}
