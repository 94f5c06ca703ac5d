//! Ordered word lists used as autocorrect candidates.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;

/// Common English words shipped with the crate.
const BUILTIN_WORDS: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we",
    "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their",
    "what", "so", "up", "out", "if", "about", "who", "get", "which", "go", "me", "when", "make",
    "can", "like", "time", "no", "just", "him", "know", "take", "people", "into", "year",
    "your", "good", "some", "could", "them", "see", "other", "than", "then", "now", "look",
    "only", "come", "its", "over", "think", "also", "back", "after", "use", "two", "how", "our",
    "work", "first", "well", "way", "even", "new", "want", "because", "any", "these", "give",
    "day", "most", "us", "cat", "cats", "dog", "dogs", "bat", "hat", "word", "words", "type",
    "typing", "speed", "fast", "quick", "brown", "fox", "jumps", "lazy", "hello", "world",
    "spell", "correct", "keyboard", "letter", "sentence", "paragraph", "minute", "accuracy",
];

/// An ordered list of known-valid words.
///
/// Order is preserved because the autocorrect matcher breaks ties in favour
/// of the earliest candidate. Words are stored verbatim; case folding and
/// punctuation stripping are the caller's responsibility. Adding a word that
/// is already present is a no-op, since a later duplicate can never win a
/// tie against the earlier one.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    /// Words in insertion order
    words: Vec<String>,
    /// Set of all words for fast lookup
    word_set: HashSet<String>,
}

impl WordList {
    /// Create a new empty word list.
    pub fn new() -> Self {
        WordList {
            words: Vec::new(),
            word_set: HashSet::new(),
        }
    }

    /// The built-in list of common English words.
    pub fn builtin() -> Self {
        BUILTIN_WORDS.iter().copied().collect()
    }

    /// Append a word, keeping the first occurrence of duplicates.
    pub fn push<S: Into<String>>(&mut self, word: S) {
        let word = word.into();
        if self.word_set.insert(word.clone()) {
            self.words.push(word);
        }
    }

    /// Check if a word is present verbatim.
    pub fn contains(&self, word: &str) -> bool {
        self.word_set.contains(word)
    }

    /// Words in dictionary order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Iterate over the words in dictionary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Get the number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Load a word list from a text file with one word per line.
    ///
    /// Lines are trimmed and blank lines skipped.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut list = WordList::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                list.push(word);
            }
        }

        Ok(list)
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = WordList::new();
        for word in iter {
            list.push(word);
        }
        list
    }
}

impl<S: Into<String>> Extend<S> for WordList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.push(word);
        }
    }
}

impl AsRef<[String]> for WordList {
    fn as_ref(&self) -> &[String] {
        &self.words
    }
}
