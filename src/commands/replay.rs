//! Non-interactive replay
//!
//! Plays a fixed list of guesses and reports the patterns revealed.

use crate::core::AbsurdleError;
use crate::game::{Game, Turn};

/// Result of replaying a list of guesses
#[derive(Debug)]
pub struct ReplayResult {
    pub turns: Vec<Turn>,
    pub finished: bool,
    /// Guesses left over after the game finished
    pub unused: usize,
    pub remaining_candidates: usize,
}

/// Play `guesses` in order, stopping once a pattern is all exact
///
/// # Errors
///
/// Returns the first guess error (e.g. a wrong-length guess). Turns played
/// before it stay in `game`.
pub fn replay<S: AsRef<str>>(game: &mut Game, guesses: &[S]) -> Result<ReplayResult, AbsurdleError> {
    let mut turns = Vec::new();

    for (played, guess) in guesses.iter().enumerate() {
        if game.is_finished() {
            let unused = guesses.len() - played;
            log::warn!("Game finished; ignoring {unused} remaining guesses");
            return Ok(ReplayResult {
                turns,
                finished: true,
                unused,
                remaining_candidates: game.candidates().len(),
            });
        }
        turns.push(game.guess(guess.as_ref())?);
    }

    Ok(ReplayResult {
        turns,
        finished: game.is_finished(),
        unused: 0,
        remaining_candidates: game.candidates().len(),
    })
}
