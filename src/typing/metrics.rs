//! Accuracy and speed of a typed passage.

use std::time::Duration;

use crate::error::{Result, TypistError};

/// Characters per "word" when computing words per minute.
pub const CHARS_PER_WORD: f64 = 5.0;

/// Percentage of typed words that match the reference word at the same
/// position.
///
/// Only the prefix of `reference` that was typed counts: extra reference
/// words are ignored, while extra typed words count as mistakes. Two empty
/// inputs score 100; exactly one empty input scores 0.
pub fn accuracy(typed: &str, reference: &str) -> f64 {
    let typed_words: Vec<&str> = typed.split_whitespace().collect();
    let reference_words: Vec<&str> = reference.split_whitespace().collect();

    match (typed_words.is_empty(), reference_words.is_empty()) {
        (true, true) => return 100.0,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {}
    }

    let correct = typed_words
        .iter()
        .zip(&reference_words)
        .filter(|(typed, reference)| typed == reference)
        .count();

    correct as f64 / typed_words.len() as f64 * 100.0
}

/// Words per minute, counting every five characters as one word.
pub fn wpm(typed: &str, elapsed: Duration) -> Result<f64> {
    if elapsed.is_zero() {
        return Err(TypistError::invalid_argument(
            "elapsed time must be positive",
        ));
    }

    let words = typed.chars().count() as f64 / CHARS_PER_WORD;
    Ok(words / (elapsed.as_secs_f64() / 60.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_accuracy() {
        assert_close(accuracy("Cute Dog!", "Cute Dog."), 50.0);
        assert_close(accuracy("A Cute Dog!", "Cute Dog."), 0.0);
        assert_close(accuracy("cute Dog.", "Cute Dog."), 50.0);
        assert_close(accuracy("Cute Dog. I say!", "Cute Dog."), 50.0);
        assert_close(accuracy("Cute", "Cute Dog."), 100.0);
        assert_close(accuracy("", "Cute Dog."), 0.0);
        assert_close(accuracy("Cute Dog.", ""), 0.0);
        assert_close(accuracy("", ""), 100.0);
        assert_close(accuracy("   ", "\t"), 100.0);
    }

    #[test]
    fn test_wpm() {
        assert_close(wpm("12345", Duration::from_secs(3)).unwrap(), 20.0);
        assert_close(wpm("a b c", Duration::from_secs(20)).unwrap(), 3.0);
        assert_close(wpm("", Duration::from_secs(10)).unwrap(), 0.0);
    }

    #[test]
    fn test_wpm_zero_elapsed() {
        assert!(wpm("hello", Duration::ZERO).is_err());
    }
}
