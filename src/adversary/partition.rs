//! Grouping candidates by the pattern a guess would produce
//!
//! Given a guess and a set of candidates, builds the map pattern → words and
//! ranks its groups: larger groups first, smaller pattern string on ties.

use crate::core::{Pattern, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Candidate count from which patterns are computed on the rayon pool
pub const PARALLEL_THRESHOLD: usize = 2048;

/// One group of a partition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub pattern: Pattern,
    pub words: BTreeSet<Word>,
}

impl Group {
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Compare two groups by adversarial preference
///
/// `Less` means `a` is preferred: it is larger, or equally large with a
/// smaller pattern.
#[must_use]
pub fn rank(a: (&Pattern, usize), b: (&Pattern, usize)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

/// Candidates grouped by the pattern they produce for one guess
#[derive(Debug, Default)]
pub struct PartitionMap {
    groups: FxHashMap<Pattern, BTreeSet<Word>>,
}

impl PartitionMap {
    /// Group `words` by their pattern against `guess`
    ///
    /// Large inputs are scored in parallel; grouping into ordered sets makes
    /// the result independent of scheduling.
    #[must_use]
    pub fn build(guess: &Word, words: BTreeSet<Word>) -> Self {
        let scored: Vec<(Pattern, Word)> = if words.len() >= PARALLEL_THRESHOLD {
            words
                .into_par_iter()
                .map(|word| (Pattern::calculate(guess, &word), word))
                .collect()
        } else {
            words
                .into_iter()
                .map(|word| (Pattern::calculate(guess, &word), word))
                .collect()
        };

        let mut groups: FxHashMap<Pattern, BTreeSet<Word>> = FxHashMap::default();
        for (pattern, word) in scored {
            groups.entry(pattern).or_default().insert(word);
        }

        Self { groups }
    }

    /// Number of distinct patterns
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Words grouped under `pattern`, if any
    #[must_use]
    pub fn group(&self, pattern: &Pattern) -> Option<&BTreeSet<Word>> {
        self.groups.get(pattern)
    }

    /// Total words across all groups
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.groups.values().map(BTreeSet::len).sum()
    }

    /// The winning group, without consuming the map
    #[must_use]
    pub fn largest(&self) -> Option<(&Pattern, &BTreeSet<Word>)> {
        self.groups
            .iter()
            .min_by(|(pa, ga), (pb, gb)| rank((*pa, ga.len()), (*pb, gb.len())))
    }

    /// Consume the map, keeping only the winning group
    #[must_use]
    pub fn into_largest(self) -> Option<Group> {
        self.groups
            .into_iter()
            .min_by(|(pa, ga), (pb, gb)| rank((pa, ga.len()), (pb, gb.len())))
            .map(|(pattern, words)| Group { pattern, words })
    }

    /// All groups, best first
    #[must_use]
    pub fn into_ranked(self) -> Vec<Group> {
        let mut groups: Vec<Group> = self
            .groups
            .into_iter()
            .map(|(pattern, words)| Group { pattern, words })
            .collect();
        groups.sort_by(|a, b| rank((&a.pattern, a.len()), (&b.pattern, b.len())));
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> BTreeSet<Word> {
        list.iter().map(|&w| Word::new(w)).collect()
    }

    fn pattern(codes: &str) -> Pattern {
        Pattern::parse(codes).unwrap()
    }

    #[test]
    fn each_word_lands_in_exactly_one_group() {
        let input = words(&["board", "beard", "heard", "bread", "bored", "hoard"]);
        let guess = Word::new("beard");
        let map = PartitionMap::build(&guess, input.clone());

        assert_eq!(map.total_words(), input.len());

        let mut union = BTreeSet::new();
        for group in map.into_ranked() {
            for word in &group.words {
                assert_eq!(Pattern::calculate(&guess, word), group.pattern);
            }
            let before = union.len();
            union.extend(group.words.iter().cloned());
            assert_eq!(union.len(), before + group.len());
        }
        assert_eq!(union, input);
    }

    #[test]
    fn all_same_pattern() {
        let map = PartitionMap::build(&Word::new("zzzzz"), words(&["aaaaa", "bbbbb", "ccccc"]));
        assert_eq!(map.len(), 1);
        assert_eq!(map.group(&pattern("AAAAA")).map(BTreeSet::len), Some(3));
    }

    #[test]
    fn largest_prefers_size() {
        // slate and plate share a pattern against crane, crate stands alone
        let map = PartitionMap::build(&Word::new("crane"), words(&["slate", "plate", "crate"]));
        let (winner, group) = map.largest().unwrap();
        assert_eq!(winner, &pattern("AAGAG"));
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn rank_breaks_ties_by_pattern() {
        let a = pattern("AAGPG");
        let b = pattern("AAPGG");
        assert_eq!(rank((&a, 2), (&b, 2)), Ordering::Less);
        assert_eq!(rank((&b, 2), (&a, 2)), Ordering::Greater);
        assert_eq!(rank((&b, 3), (&a, 2)), Ordering::Less);
    }

    #[test]
    fn ranked_order() {
        let map = PartitionMap::build(
            &Word::new("abcde"),
            words(&["dxcye", "dzcwe", "cxyde", "czwde", "abcde"]),
        );
        let ranked: Vec<(String, usize)> = map
            .into_ranked()
            .into_iter()
            .map(|g| (g.pattern.to_codes(), g.len()))
            .collect();
        assert_eq!(
            ranked,
            [
                ("AAGPG".to_string(), 2),
                ("AAPGG".to_string(), 2),
                ("GGGGG".to_string(), 1)
            ]
        );
    }

    #[test]
    fn parallel_path_matches_sequential() {
        let mut big = BTreeSet::new();
        for a in 'a'..='m' {
            for b in 'a'..='m' {
                for c in 'a'..='m' {
                    big.insert(Word::new(format!("{a}{b}{c}")));
                }
            }
        }
        assert!(big.len() >= PARALLEL_THRESHOLD);

        let guess = Word::new("abc");
        let parallel = PartitionMap::build(&guess, big.clone()).into_ranked();

        let mut sequential: FxHashMap<Pattern, BTreeSet<Word>> = FxHashMap::default();
        for word in big {
            sequential
                .entry(Pattern::calculate(&guess, &word))
                .or_default()
                .insert(word);
        }

        assert_eq!(parallel.len(), sequential.len());
        for group in parallel {
            assert_eq!(sequential.get(&group.pattern), Some(&group.words));
        }
    }

    #[test]
    fn empty_input() {
        let map = PartitionMap::build(&Word::new("abc"), BTreeSet::new());
        assert!(map.is_empty());
        assert!(map.largest().is_none());
        assert!(map.into_largest().is_none());
    }
}
