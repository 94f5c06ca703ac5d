//! Closest-match selection over a dictionary.
//!
//! The matcher scores every candidate with a [`DistanceFunction`] and keeps
//! the first candidate with the smallest score. A word found verbatim in the
//! dictionary is returned without scoring anything, and a best score above
//! `limit` leaves the word unchanged.

use rayon::prelude::*;

use crate::spelling::distance::DistanceFunction;

/// The winning dictionary entry of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Position in the dictionary.
    pub index: usize,
    /// Distance from the typed word, always within the limit.
    pub distance: usize,
}

/// Find the dictionary entry closest to `word`, if one is within `limit`.
///
/// An exact match is reported with distance 0 and short-circuits the scan.
/// Ties go to the earliest entry in dictionary order.
pub fn closest_match<S, D>(
    word: &str,
    dictionary: &[S],
    distance: &D,
    limit: usize,
) -> Option<Candidate>
where
    S: AsRef<str>,
    D: DistanceFunction + ?Sized,
{
    if let Some(index) = dictionary.iter().position(|c| c.as_ref() == word) {
        return Some(Candidate { index, distance: 0 });
    }

    dictionary
        .iter()
        .enumerate()
        .map(|(index, candidate)| Candidate {
            index,
            distance: distance.compute(word, candidate.as_ref(), limit),
        })
        // `min_by_key` keeps the first of several equal minima.
        .min_by_key(|candidate| candidate.distance)
        .filter(|candidate| candidate.distance <= limit)
}

/// Same as [`closest_match`], scoring candidates on the rayon thread pool.
///
/// All scores are collected in dictionary order before the minimum is taken,
/// so the result is identical to the sequential scan.
pub fn closest_match_parallel<S, D>(
    word: &str,
    dictionary: &[S],
    distance: &D,
    limit: usize,
) -> Option<Candidate>
where
    S: AsRef<str> + Sync,
    D: DistanceFunction + Sync + ?Sized,
{
    if let Some(index) = dictionary
        .par_iter()
        .position_first(|c| c.as_ref() == word)
    {
        return Some(Candidate { index, distance: 0 });
    }

    let scores: Vec<usize> = dictionary
        .par_iter()
        .map(|candidate| distance.compute(word, candidate.as_ref(), limit))
        .collect();

    scores
        .into_iter()
        .enumerate()
        .map(|(index, distance)| Candidate { index, distance })
        .min_by_key(|candidate| candidate.distance)
        .filter(|candidate| candidate.distance <= limit)
}

/// Return the dictionary word closest to `word`, or `word` itself when no
/// entry is within `limit`.
///
/// # Examples
///
/// ```
/// use typist::spelling::{autocorrect, EditDistance};
///
/// let dictionary = ["cat", "dog", "bird"];
/// assert_eq!(autocorrect("cta", &dictionary, &EditDistance, 2), "cat");
/// assert_eq!(autocorrect("zebra", &dictionary, &EditDistance, 2), "zebra");
/// ```
pub fn autocorrect<'a, S, D>(word: &'a str, dictionary: &'a [S], distance: &D, limit: usize) -> &'a str
where
    S: AsRef<str>,
    D: DistanceFunction + ?Sized,
{
    match closest_match(word, dictionary, distance, limit) {
        Some(candidate) => dictionary[candidate.index].as_ref(),
        None => word,
    }
}

/// Parallel counterpart of [`autocorrect`] with the same result.
pub fn autocorrect_parallel<'a, S, D>(
    word: &'a str,
    dictionary: &'a [S],
    distance: &D,
    limit: usize,
) -> &'a str
where
    S: AsRef<str> + Sync,
    D: DistanceFunction + Sync + ?Sized,
{
    match closest_match_parallel(word, dictionary, distance, limit) {
        Some(candidate) => dictionary[candidate.index].as_ref(),
        None => word,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::spelling::levenshtein::EditDistance;
    use crate::spelling::substitution::SubstitutionDistance;

    #[test]
    fn test_exact_match_wins() {
        let dictionary = ["dog", "dig", "dug"];
        assert_eq!(autocorrect("dig", &dictionary, &EditDistance, 0), "dig");
        assert_eq!(
            closest_match("dig", &dictionary, &EditDistance, 0),
            Some(Candidate { index: 1, distance: 0 })
        );
    }

    #[test]
    fn test_exact_match_skips_scoring() {
        let calls = Cell::new(0);
        let counting = |a: &str, b: &str, limit: usize| {
            calls.set(calls.get() + 1);
            EditDistance.compute(a, b, limit)
        };

        let dictionary = ["inside", "outside"];
        assert_eq!(autocorrect("outside", &dictionary, &counting, 3), "outside");
        assert_eq!(calls.get(), 0);

        assert_eq!(autocorrect("outsde", &dictionary, &counting, 3), "outside");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_tie_goes_to_first_candidate() {
        let dictionary = ["cat", "cot", "bat"];
        assert_eq!(autocorrect("bit", &dictionary, &SubstitutionDistance, 1), "bat");

        let dictionary = ["bot", "bat"];
        assert_eq!(autocorrect("bit", &dictionary, &SubstitutionDistance, 1), "bot");

        let dictionary = ["bat", "bot"];
        assert_eq!(autocorrect("bit", &dictionary, &SubstitutionDistance, 1), "bat");
    }

    #[test]
    fn test_limit_is_inclusive() {
        let dictionary = ["cats"];
        assert_eq!(autocorrect("scat", &dictionary, &EditDistance, 2), "cats");
        assert_eq!(autocorrect("scat", &dictionary, &EditDistance, 1), "scat");
    }

    #[test]
    fn test_no_match_returns_word() {
        let dictionary = ["apple", "banana"];
        assert_eq!(autocorrect("zzz", &dictionary, &EditDistance, 1), "zzz");
        assert_eq!(closest_match("zzz", &dictionary, &EditDistance, 1), None);
    }

    #[test]
    fn test_empty_dictionary() {
        let dictionary: [&str; 0] = [];
        assert_eq!(autocorrect("word", &dictionary, &EditDistance, 5), "word");
        assert_eq!(autocorrect("", &dictionary, &EditDistance, 0), "");
        assert_eq!(
            autocorrect_parallel("word", &dictionary, &EditDistance, 5),
            "word"
        );
    }

    #[test]
    fn test_limit_zero_only_exact() {
        let dictionary = ["cat", "hat"];
        assert_eq!(autocorrect("bat", &dictionary, &EditDistance, 0), "bat");
        assert_eq!(autocorrect("bat", &dictionary, &SubstitutionDistance, 0), "bat");
        assert_eq!(autocorrect("hat", &dictionary, &EditDistance, 0), "hat");
    }

    #[test]
    fn test_empty_word() {
        let dictionary = ["a", "ab"];
        assert_eq!(autocorrect("", &dictionary, &EditDistance, 1), "a");
        assert_eq!(autocorrect("", &dictionary, &EditDistance, 0), "");
    }

    #[test]
    fn test_owned_dictionary() {
        let dictionary = vec!["speed".to_string(), "spread".to_string()];
        assert_eq!(autocorrect("sped", &dictionary, &EditDistance, 1), "speed");
    }

    #[test]
    fn test_dyn_distance_function() {
        let distance: &dyn DistanceFunction = &SubstitutionDistance;
        let dictionary = ["rose", "nose"];
        assert_eq!(autocorrect("rise", &dictionary, distance, 1), "rose");
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let dictionary: Vec<String> = (0..500).map(|i| format!("word{i}")).collect();
        for word in ["word42", "wrd42", "word4x2", "xyz", "word", "wor1d99"] {
            for limit in 0..4 {
                assert_eq!(
                    autocorrect(word, &dictionary, &EditDistance, limit),
                    autocorrect_parallel(word, &dictionary, &EditDistance, limit),
                    "{word} (limit {limit})"
                );
            }
        }
    }
}
