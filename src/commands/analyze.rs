//! Partition analysis
//!
//! Shows how one guess would split the candidate set, without playing it.

use crate::adversary::{self, Group};
use crate::core::{AbsurdleError, CandidateSet, Word};

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Word,
    pub total_candidates: usize,
    /// Groups ranked best first; the first is what the adversary would reveal
    pub groups: Vec<Group>,
}

impl AnalysisResult {
    /// Size of the group the adversary would keep
    #[must_use]
    pub fn largest_group(&self) -> usize {
        self.groups.first().map_or(0, Group::len)
    }
}

/// Rank every pattern `guess` could produce against `candidates`
///
/// # Errors
///
/// Returns an error if the candidate set is empty or the guess has the wrong length.
pub fn analyze_guess(guess: &str, candidates: &CandidateSet) -> Result<AnalysisResult, AbsurdleError> {
    let guess = Word::new(guess);
    let groups = adversary::partition(&guess, candidates)?;

    log::debug!("{guess} splits {} candidates into {} groups", candidates.len(), groups.len());

    Ok(AnalysisResult {
        guess,
        total_candidates: candidates.len(),
        groups,
    })
}
