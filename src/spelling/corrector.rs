//! Word-list backed autocorrector with configurable distance and budget.

use std::fs;
use std::path::Path;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::autocorrect::{Candidate, closest_match, closest_match_parallel};
use crate::spelling::dictionary::WordList;
use crate::spelling::distance::DistanceKind;

/// Configuration for the autocorrector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocorrectConfig {
    /// Distance function used to score candidates.
    pub distance: DistanceKind,
    /// Maximum accepted distance (inclusive).
    pub limit: usize,
    /// Whether to score candidates on the rayon thread pool.
    pub parallel: bool,
}

impl Default for AutocorrectConfig {
    fn default() -> Self {
        AutocorrectConfig {
            distance: DistanceKind::Edit,
            limit: 2,
            parallel: false,
        }
    }
}

impl AutocorrectConfig {
    /// Load a configuration from a JSON file. Missing fields take their
    /// default values.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }
}

/// Outcome of correcting a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    /// The word as typed.
    pub original: String,
    /// The replacement, or the original when nothing qualified.
    pub corrected: String,
    /// Distance to the replacement, if one was applied.
    pub distance: Option<usize>,
}

impl Correction {
    fn unchanged(word: &str) -> Self {
        Correction {
            original: word.to_string(),
            corrected: word.to_string(),
            distance: None,
        }
    }

    /// Check whether the word was replaced.
    pub fn is_changed(&self) -> bool {
        self.distance.is_some()
    }
}

/// Autocorrector bound to a word list and a configuration.
#[derive(Debug, Clone)]
pub struct Autocorrector {
    dictionary: WordList,
    config: AutocorrectConfig,
}

impl Autocorrector {
    /// Create a new autocorrector over the built-in word list.
    pub fn new() -> Self {
        Self::with_dictionary(WordList::builtin())
    }

    /// Create a new autocorrector with a custom word list.
    pub fn with_dictionary(dictionary: WordList) -> Self {
        Self::with_config(dictionary, AutocorrectConfig::default())
    }

    /// Create a new autocorrector with a custom word list and configuration.
    pub fn with_config(dictionary: WordList, config: AutocorrectConfig) -> Self {
        Autocorrector { dictionary, config }
    }

    /// Update the configuration.
    pub fn set_config(&mut self, config: AutocorrectConfig) {
        self.config = config;
    }

    /// Current configuration.
    pub fn config(&self) -> &AutocorrectConfig {
        &self.config
    }

    /// The candidate word list.
    pub fn dictionary(&self) -> &WordList {
        &self.dictionary
    }

    /// Check if a word is in the word list verbatim.
    pub fn is_known(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Correct a single word.
    pub fn correct(&self, word: &str) -> Correction {
        if self.dictionary.contains(word) {
            return Correction::unchanged(word);
        }

        let distance = self.config.distance.function();
        let limit = self.config.limit;
        let words = self.dictionary.words();

        trace!(
            "scoring '{}' against {} candidates ({}, limit {})",
            word,
            words.len(),
            distance.name(),
            limit
        );

        let best = if self.config.parallel {
            closest_match_parallel(word, words, distance, limit)
        } else {
            closest_match(word, words, distance, limit)
        };

        match best {
            Some(Candidate { index, distance }) => {
                let corrected = &words[index];
                debug!("corrected '{word}' -> '{corrected}' (distance {distance})");
                Correction {
                    original: word.to_string(),
                    corrected: corrected.clone(),
                    distance: Some(distance),
                }
            }
            None => Correction::unchanged(word),
        }
    }

    /// Correct every whitespace-separated word of `text`.
    pub fn correct_words(&self, text: &str) -> Vec<Correction> {
        text.split_whitespace().map(|word| self.correct(word)).collect()
    }

    /// Correct `text` and join the result with single spaces.
    pub fn correct_text(&self, text: &str) -> String {
        self.correct_words(text)
            .into_iter()
            .map(|correction| correction.corrected)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Autocorrector {
    fn default() -> Self {
        Self::new()
    }
}
