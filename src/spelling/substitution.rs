//! Substitution-count distance.
//!
//! A weak, fast approximation of edit distance: the difference in length
//! plus the number of mismatched positions in the overlapping prefix. It
//! does not model insertions or deletions, so a single dropped letter near
//! the front of a word is scored as a run of substitutions.

use crate::spelling::distance::{DistanceFunction, exceeded};

/// Length delta plus positional mismatches, scanned from the front.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubstitutionDistance;

impl DistanceFunction for SubstitutionDistance {
    fn compute(&self, a: &str, b: &str, limit: usize) -> usize {
        substitution_distance(a, b, limit)
    }

    fn name(&self) -> &'static str {
        "substitution"
    }
}

/// Count substitutions needed to turn `a` into `b`, plus their length delta.
///
/// The scan stops as soon as the running total exceeds `limit` and reports
/// `limit + 1`. Exhausting either string is checked before the budget, so a
/// length delta that alone exceeds `limit` may be returned as is.
pub fn substitution_distance(a: &str, b: &str, limit: usize) -> usize {
    let mut total = a.chars().count().abs_diff(b.chars().count());
    let mut a_chars = a.chars();
    let mut b_chars = b.chars();

    loop {
        let (Some(x), Some(y)) = (a_chars.next(), b_chars.next()) else {
            return total;
        };
        if total > limit {
            return exceeded(limit);
        }
        if x != y {
            total += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitution_distance() {
        assert_eq!(substitution_distance("ab", "abc", 5), 1);
        assert_eq!(substitution_distance("cat", "cot", 5), 1);
        assert_eq!(substitution_distance("same", "same", 0), 0);
        assert_eq!(substitution_distance("nice", "rice", 10), 1);
        assert_eq!(substitution_distance("range", "rungs", 10), 2);
        assert_eq!(substitution_distance("pill", "pillage", 10), 3);
        assert_eq!(substitution_distance("roses", "arose", 10), 5);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(substitution_distance("", "", 0), 0);
        assert_eq!(substitution_distance("", "abc", 5), 3);
        assert_eq!(substitution_distance("abcd", "", 5), 4);
        // Exhaustion wins over the budget check.
        assert_eq!(substitution_distance("", "abc", 0), 3);
    }

    #[test]
    fn test_pruning() {
        // Stops after the second mismatch pushes the total past the limit.
        assert_eq!(substitution_distance("abcd", "wxyz", 1), 2);
        assert_eq!(substitution_distance("abcdefgh", "zzzzzzzz", 2), 3);
        assert!(substitution_distance("rose", "hello", 1) > 1);
    }

    #[test]
    fn test_ignores_alignment() {
        // One insertion at the front shifts every position.
        assert_eq!(substitution_distance("string", "sstring", 10), 6);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(substitution_distance("café", "cafe", 5), 1);
        assert_eq!(substitution_distance("naïve", "naive", 5), 1);
        assert_eq!(substitution_distance("über", "uber", 5), 1);
    }

    #[test]
    fn test_trait_impl() {
        assert_eq!(SubstitutionDistance.compute("ab", "abc", 5), 1);
        assert_eq!(SubstitutionDistance.name(), "substitution");
    }
}
