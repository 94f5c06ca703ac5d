//! Closest-match autocorrect for typed words.
//!
//! A typed word is compared against an ordered word list with a pluggable
//! [`DistanceFunction`]; the first candidate with the smallest distance wins
//! if it is within the caller's edit budget, otherwise the word is kept.

pub mod autocorrect;
pub mod corrector;
pub mod dictionary;
pub mod distance;
pub mod levenshtein;
pub mod substitution;

// Re-export commonly used types
pub use autocorrect::*;
pub use corrector::*;
pub use dictionary::*;
pub use distance::*;
pub use levenshtein::*;
pub use substitution::*;
