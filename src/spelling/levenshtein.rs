//! Levenshtein distance calculation for autocorrect.
//!
//! Two interchangeable strategies share one contract: the result is the exact
//! number of single-character insertions, deletions, and substitutions
//! whenever that number is at most `limit`, and some value greater than
//! `limit` otherwise. Bounding the search by `limit` is what keeps the
//! recursive strategy practical.

use std::cmp::min;

use crate::spelling::distance::{DistanceFunction, exceeded};

/// Recursive edit distance that abandons a path once its cost passes the limit.
///
/// Worst-case branching grows with `limit`, not with the length of the words,
/// which makes it a good fit for the small budgets used when autocorrecting
/// typed words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditDistance;

impl DistanceFunction for EditDistance {
    fn compute(&self, a: &str, b: &str, limit: usize) -> usize {
        edit_distance(a, b, limit)
    }

    fn name(&self) -> &'static str {
        "edit"
    }
}

/// Edit distance from `a` to `b`, exact up to `limit`.
pub fn edit_distance(a: &str, b: &str, limit: usize) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    bounded_edit(&a_chars, &b_chars, 0, limit)
}

fn bounded_edit(mut a: &[char], mut b: &[char], cost: usize, limit: usize) -> usize {
    loop {
        match (a.split_first(), b.split_first()) {
            (None, _) => return cost + b.len(),
            (_, None) => return cost + a.len(),
            (Some((x, a_rest)), Some((y, b_rest))) if x == y => {
                // Matching heads never cost anything.
                a = a_rest;
                b = b_rest;
            }
            (Some((_, a_rest)), Some((_, b_rest))) => {
                if cost > limit {
                    return exceeded(limit);
                }

                let insertion = bounded_edit(a, b_rest, cost + 1, limit);
                let deletion = bounded_edit(a_rest, b, cost + 1, limit);
                let substitution = bounded_edit(a_rest, b_rest, cost + 1, limit);

                return min(min(insertion, deletion), substitution);
            }
        }
    }
}

/// Iterative edit distance over a two-row table, with early exit.
///
/// Returns exactly what [`EditDistance`] returns whenever the distance is
/// within `limit`, and `limit + 1` otherwise. Cost is proportional to the
/// product of the word lengths rather than to the budget, so this is the
/// better choice for long words or large limits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableEditDistance;

impl DistanceFunction for TableEditDistance {
    fn compute(&self, a: &str, b: &str, limit: usize) -> usize {
        table_edit_distance(a, b, limit)
    }

    fn name(&self) -> &'static str {
        "table"
    }
}

/// Calculate Levenshtein distance with a maximum threshold for early termination.
#[allow(clippy::needless_range_loop)]
pub fn table_edit_distance(a: &str, b: &str, limit: usize) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let len1 = a_chars.len();
    let len2 = b_chars.len();

    // The length difference alone is a lower bound.
    if len1.abs_diff(len2) > limit {
        return exceeded(limit);
    }

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    // Use only two rows for space optimization
    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;
        let mut min_in_row = i;

        for j in 1..=len2 {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };

            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );

            min_in_row = min(min_in_row, curr_row[j]);
        }

        // Row minima never decrease, so the final cell cannot come back under.
        if min_in_row > limit {
            return exceeded(limit);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[len2];
    if distance <= limit {
        distance
    } else {
        exceeded(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("", "", 0), 0);
        assert_eq!(edit_distance("", "a", 1), 1);
        assert_eq!(edit_distance("a", "", 1), 1);
        assert_eq!(edit_distance("a", "a", 0), 0);
        assert_eq!(edit_distance("ab", "ac", 1), 1);
        assert_eq!(edit_distance("abc", "def", 3), 3);
        assert_eq!(edit_distance("kitten", "sitting", 3), 3);
        assert_eq!(edit_distance("kitten", "sitting", 10), 3);
        assert_eq!(edit_distance("search", "serach", 2), 2); // transposition
        assert_eq!(edit_distance("cats", "scat", 5), 2);
        assert_eq!(edit_distance("purng", "camps", 5), 5);
    }

    #[test]
    fn test_edit_distance_over_limit() {
        assert!(edit_distance("kitten", "sitting", 2) > 2);
        assert!(edit_distance("abc", "def", 0) > 0);
        assert!(edit_distance("ckiteus", "kittens", 1) > 1);
    }

    #[test]
    fn test_edit_distance_limit_zero() {
        for (a, b) in [("a", "b"), ("cat", "cot"), ("abcd", "abce"), ("xy", "yx")] {
            assert_eq!(edit_distance(a, b, 0), 1, "{a} -> {b}");
        }
        assert_eq!(edit_distance("same", "same", 0), 0);
    }

    #[test]
    fn test_edit_distance_long_words_small_limit() {
        // Pruning keeps this fast despite 40 mismatching characters.
        let a = "a".repeat(40);
        let b = "b".repeat(40);
        assert!(edit_distance(&a, &b, 2) > 2);
    }

    #[test]
    fn test_table_edit_distance() {
        assert_eq!(table_edit_distance("kitten", "sitting", 3), 3);
        assert_eq!(table_edit_distance("kitten", "sitting", 2), 3);
        assert_eq!(table_edit_distance("search", "search", 0), 0);
        assert_eq!(table_edit_distance("a", "abc", 1), 2);
        assert_eq!(table_edit_distance("a", "ab", 1), 1);
        assert_eq!(table_edit_distance("", "abc", 3), 3);
        assert_eq!(table_edit_distance("", "abc", 2), 3);
        assert_eq!(table_edit_distance("abc", "", 5), 3);
    }

    #[test]
    fn test_strategies_agree_within_limit() {
        let pairs = [
            ("kitten", "sitting"),
            ("search", "serach"),
            ("hello", "helo"),
            ("world", "wrold"),
            ("quick", "quikc"),
            ("", "abc"),
            ("cats", "scat"),
            ("flaw", "lawn"),
            ("intention", "execution"),
        ];

        for (a, b) in pairs {
            for limit in 0..6 {
                let recursive = edit_distance(a, b, limit);
                let table = table_edit_distance(a, b, limit);
                if recursive <= limit || table <= limit {
                    assert_eq!(recursive, table, "{a} -> {b} (limit {limit})");
                } else {
                    assert!(recursive > limit && table > limit);
                }
            }
        }
    }

    #[test]
    fn test_unicode() {
        assert_eq!(edit_distance("café", "cafe", 2), 1);
        assert_eq!(table_edit_distance("café", "cafe", 2), 1);
        assert_eq!(edit_distance("日本語", "日本", 2), 1);
    }

    #[test]
    fn test_trait_impls() {
        assert_eq!(EditDistance.compute("kitten", "sitting", 3), 3);
        assert_eq!(TableEditDistance.compute("kitten", "sitting", 3), 3);
        assert_eq!(EditDistance.name(), "edit");
        assert_eq!(TableEditDistance.name(), "table");
    }
}
