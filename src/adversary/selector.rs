//! Choosing the most ambiguous pattern for a guess

use super::partition::{Group, PartitionMap};
use crate::core::{AbsurdleError, CandidateSet, Pattern, Word};

/// Check the preconditions shared by [`apply`] and [`partition`]
fn validate(guess: &Word, candidates: &CandidateSet) -> Result<(), AbsurdleError> {
    if candidates.is_empty() {
        return Err(AbsurdleError::EmptyCandidateSet);
    }
    if guess.len() != candidates.word_length() {
        return Err(AbsurdleError::GuessLengthMismatch {
            expected: candidates.word_length(),
            actual: guess.len(),
        });
    }
    Ok(())
}

/// Reveal the pattern for `guess` that keeps the most candidates
///
/// Groups every candidate by its pattern against `guess`, picks the largest
/// group (smallest pattern string on ties), narrows `candidates` to it and
/// returns its pattern.
///
/// # Errors
/// - [`AbsurdleError::EmptyCandidateSet`] if `candidates` is empty
/// - [`AbsurdleError::GuessLengthMismatch`] if the guess has the wrong length
///
/// `candidates` is left untouched on error.
///
/// # Examples
/// ```
/// use absurdle::adversary::apply;
/// use absurdle::core::{Word, prune_to_fixed_length};
///
/// let mut candidates = prune_to_fixed_length(["allee", "erase"], 5).unwrap();
/// let pattern = apply(&Word::new("eerie"), &mut candidates).unwrap();
///
/// assert_eq!(pattern.to_string(), "GAPAG");
/// assert_eq!(candidates.len(), 1);
/// assert!(candidates.contains(&Word::new("erase")));
/// ```
pub fn apply(guess: &Word, candidates: &mut CandidateSet) -> Result<Pattern, AbsurdleError> {
    validate(guess, candidates)?;

    let partition = PartitionMap::build(guess, candidates.take_words());

    // A non-empty input always yields at least one group
    let Group { pattern, words } = partition
        .into_largest()
        .ok_or(AbsurdleError::EmptyCandidateSet)?;

    candidates.replace_words(words);
    Ok(pattern)
}

/// Rank every group `guess` would produce, best first, without narrowing
///
/// The first group is the one [`apply`] would pick.
///
/// # Errors
/// Same preconditions as [`apply`].
pub fn partition(guess: &Word, candidates: &CandidateSet) -> Result<Vec<Group>, AbsurdleError> {
    validate(guess, candidates)?;

    let words = candidates.iter().cloned().collect();
    Ok(PartitionMap::build(guess, words).into_ranked())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prune_to_fixed_length;

    fn candidates(list: &[&str]) -> CandidateSet {
        let len = list.first().map_or(5, |w| w.chars().count());
        prune_to_fixed_length(list.iter().copied(), len).unwrap()
    }

    fn texts(set: &CandidateSet) -> Vec<&str> {
        set.iter().map(Word::text).collect()
    }

    #[test]
    fn singleton_groups_pick_smallest_pattern() {
        // board: GAGGG, beard: GGGGG, heard: AGGGG
        let mut set = candidates(&["board", "beard", "heard"]);
        let pattern = apply(&Word::new("beard"), &mut set).unwrap();

        assert_eq!(pattern.to_string(), "AGGGG");
        assert_eq!(texts(&set), ["heard"]);
    }

    #[test]
    fn prefers_larger_group_over_exact_match() {
        // board and bzard both give GAGGG against beard; beard alone is GGGGG
        let mut set = candidates(&["board", "beard", "bzard"]);
        let pattern = apply(&Word::new("beard"), &mut set).unwrap();

        assert_eq!(pattern.to_string(), "GAGGG");
        assert_eq!(texts(&set), ["board", "bzard"]);
    }

    #[test]
    fn duplicate_letters() {
        let mut set = candidates(&["allee", "erase"]);
        let pattern = apply(&Word::new("eerie"), &mut set).unwrap();

        assert_eq!(pattern.to_string(), "GAPAG");
        assert_eq!(texts(&set), ["erase"]);
    }

    #[test]
    fn tie_between_equal_groups() {
        let mut set = candidates(&["dxcye", "dzcwe", "cxyde", "czwde"]);
        let pattern = apply(&Word::new("abcde"), &mut set).unwrap();

        assert_eq!(pattern.to_string(), "AAGPG");
        assert_eq!(texts(&set), ["dxcye", "dzcwe"]);
    }

    #[test]
    fn empty_set_is_rejected_untouched() {
        let mut set = CandidateSet::new(5);
        let before = set.clone();

        assert_eq!(
            apply(&Word::new("xxxxx"), &mut set),
            Err(AbsurdleError::EmptyCandidateSet)
        );
        assert_eq!(set, before);
    }

    #[test]
    fn wrong_length_is_rejected_untouched() {
        let mut set = candidates(&["crane", "slate"]);
        let before = set.clone();

        assert_eq!(
            apply(&Word::new("cranes"), &mut set),
            Err(AbsurdleError::GuessLengthMismatch {
                expected: 5,
                actual: 6
            })
        );
        assert_eq!(set, before);
    }

    #[test]
    fn shrinks_to_subset_with_matching_pattern() {
        let original = candidates(&[
            "crane", "slate", "irate", "crate", "grate", "trace", "plate", "brine",
        ]);
        for guess in ["crane", "zzzzz", "eerie", "tacos"] {
            let guess = Word::new(guess);
            let mut set = original.clone();
            let pattern = apply(&guess, &mut set).unwrap();

            assert!(!set.is_empty());
            assert!(set.len() <= original.len());
            for word in &set {
                assert!(original.contains(word));
                assert_eq!(Pattern::calculate(&guess, word), pattern);
            }
        }
    }

    #[test]
    fn deterministic() {
        let original = candidates(&["crane", "slate", "irate", "crate", "grate", "plate"]);
        let guess = Word::new("trace");

        let mut first = original.clone();
        let p1 = apply(&guess, &mut first).unwrap();
        for _ in 0..10 {
            let mut again = original.clone();
            let p2 = apply(&guess, &mut again).unwrap();
            assert_eq!(p1, p2);
            assert_eq!(first, again);
        }
    }

    #[test]
    fn perfect_pattern_leaves_only_the_guess() {
        let mut set = candidates(&["abc"]);
        let pattern = apply(&Word::new("abc"), &mut set).unwrap();
        assert!(pattern.is_perfect());
        assert_eq!(texts(&set), ["abc"]);
    }

    #[test]
    fn partition_agrees_with_apply() {
        let original = candidates(&["crane", "slate", "irate", "crate", "grate", "plate"]);
        let guess = Word::new("trace");

        let ranked = partition(&guess, &original).unwrap();
        let total: usize = ranked.iter().map(Group::len).sum();
        assert_eq!(total, original.len());

        let mut set = original.clone();
        let pattern = apply(&guess, &mut set).unwrap();
        assert_eq!(ranked[0].pattern, pattern);
        assert_eq!(ranked[0].words.iter().collect::<Vec<_>>(), set.iter().collect::<Vec<_>>());
    }

    #[test]
    fn partition_validates() {
        assert_eq!(
            partition(&Word::new("abc"), &CandidateSet::new(3)),
            Err(AbsurdleError::EmptyCandidateSet)
        );
    }
}
