//! Pluggable distance functions for the autocorrect matcher.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::spelling::levenshtein::{EditDistance, TableEditDistance};
use crate::spelling::substitution::SubstitutionDistance;

/// A bounded dissimilarity measure between two words.
///
/// `compute` must return the exact score whenever that score is at most
/// `limit`. Once the score provably exceeds `limit`, an implementation may
/// stop early and return any value greater than `limit`; callers only use
/// such values for thresholding, never for ranking.
pub trait DistanceFunction {
    /// Compute the distance from `a` to `b` under the given budget.
    fn compute(&self, a: &str, b: &str, limit: usize) -> usize;

    /// Short name used in logs and CLI output.
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// Any `Fn(&str, &str, usize) -> usize` can be used as a distance function.
impl<F> DistanceFunction for F
where
    F: Fn(&str, &str, usize) -> usize,
{
    fn compute(&self, a: &str, b: &str, limit: usize) -> usize {
        self(a, b, limit)
    }
}

/// The value reported for any distance beyond `limit`.
#[inline]
pub(crate) fn exceeded(limit: usize) -> usize {
    limit.saturating_add(1)
}

/// The built-in distance functions, selectable by name.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceKind {
    /// Length delta plus positional substitutions.
    Substitution,
    /// Recursive Levenshtein distance with pruning.
    #[default]
    Edit,
    /// Two-row dynamic-programming Levenshtein distance with early exit.
    Table,
}

impl DistanceKind {
    /// All built-in kinds, in declaration order.
    pub const ALL: [DistanceKind; 3] = [
        DistanceKind::Substitution,
        DistanceKind::Edit,
        DistanceKind::Table,
    ];

    /// Borrow the implementation behind this kind.
    pub fn function(&self) -> &'static (dyn DistanceFunction + Sync) {
        match self {
            DistanceKind::Substitution => &SubstitutionDistance,
            DistanceKind::Edit => &EditDistance,
            DistanceKind::Table => &TableEditDistance,
        }
    }
}

impl DistanceFunction for DistanceKind {
    fn compute(&self, a: &str, b: &str, limit: usize) -> usize {
        self.function().compute(a, b, limit)
    }

    fn name(&self) -> &'static str {
        self.function().name()
    }
}

impl fmt::Display for DistanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(DistanceFunction::name(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_dispatch() {
        assert_eq!(DistanceKind::Substitution.compute("cat", "cot", 5), 1);
        assert_eq!(DistanceKind::Edit.compute("kitten", "sitting", 3), 3);
        assert_eq!(DistanceKind::Table.compute("kitten", "sitting", 3), 3);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(DistanceKind::Substitution.to_string(), "substitution");
        assert_eq!(DistanceKind::Edit.to_string(), "edit");
        assert_eq!(DistanceKind::Table.to_string(), "table");
        assert_eq!(DistanceKind::default(), DistanceKind::Edit);
    }

    #[test]
    fn test_kind_serde() {
        let json = serde_json::to_string(&DistanceKind::Substitution).unwrap();
        assert_eq!(json, "\"substitution\"");

        let kind: DistanceKind = serde_json::from_str("\"table\"").unwrap();
        assert_eq!(kind, DistanceKind::Table);
    }

    #[test]
    fn test_closure_as_distance_function() {
        let length_only = |a: &str, b: &str, _limit: usize| a.len().abs_diff(b.len());
        assert_eq!(length_only.compute("abc", "a", 10), 2);
        assert_eq!(DistanceFunction::name(&length_only), "custom");
    }

    #[test]
    fn test_exceeded_saturates() {
        assert_eq!(exceeded(0), 1);
        assert_eq!(exceeded(usize::MAX), usize::MAX);
    }
}
