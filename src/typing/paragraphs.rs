//! Paragraph selection for typing tests.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::{Result, TypistError};

/// Return the `k`-th (0-based) paragraph accepted by `select`, or an empty
/// string if fewer than `k + 1` paragraphs qualify.
pub fn choose<'a, S, F>(paragraphs: &'a [S], select: F, k: usize) -> &'a str
where
    S: AsRef<str>,
    F: Fn(&str) -> bool,
{
    paragraphs
        .iter()
        .map(<S as AsRef<str>>::as_ref)
        .filter(|paragraph| select(paragraph))
        .nth(k)
        .unwrap_or("")
}

/// Build a selector accepting paragraphs that mention any of `topics`.
///
/// Paragraphs are lowercased and split into words with punctuation removed
/// before the comparison, so `"Nice pup!"` matches the topic `"pup"`.
/// Topics must already be lowercase.
///
/// # Examples
///
/// ```
/// use typist::typing::{about, choose};
///
/// let about_dogs = about(&["dog", "dogs", "pup", "puppy"]).unwrap();
/// let paragraphs = ["Cute Dog!", "That is a cat.", "Nice pup."];
/// assert_eq!(choose(&paragraphs, &about_dogs, 0), "Cute Dog!");
/// assert_eq!(choose(&paragraphs, &about_dogs, 1), "Nice pup.");
/// ```
pub fn about<S: AsRef<str>>(topics: &[S]) -> Result<impl Fn(&str) -> bool + use<S>> {
    let mut words = HashSet::with_capacity(topics.len());
    for topic in topics {
        let topic = topic.as_ref();
        if topic.to_lowercase() != topic {
            return Err(TypistError::invalid_argument(format!(
                "topics should be lowercase, got '{topic}'"
            )));
        }
        words.insert(topic.to_string());
    }

    Ok(move |paragraph: &str| {
        let lowered = paragraph.to_lowercase();
        lowered.unicode_words().any(|word| words.contains(word))
    })
}

/// Read the non-empty, trimmed lines of a file.
pub fn lines_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }

    Ok(lines)
}
