//! Multiplayer typing races: progress reports and per-word timings.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TypistError};

/// A progress update sent to the race server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub id: String,
    pub progress: f64,
}

/// Send the fraction of `prompt` typed correctly so far and return it.
///
/// Progress counts the words of the correctly typed prefix; the first
/// mistake ends the prefix. An empty prompt counts as complete.
pub fn report_progress<S, T, F>(typed: &[S], prompt: &[T], user_id: &str, mut send: F) -> f64
where
    S: AsRef<str>,
    T: AsRef<str>,
    F: FnMut(ProgressReport),
{
    let progress = if prompt.is_empty() {
        1.0
    } else {
        let correct = typed
            .iter()
            .map(<S as AsRef<str>>::as_ref)
            .zip(prompt.iter().map(<T as AsRef<str>>::as_ref))
            .take_while(|(typed, expected)| typed == expected)
            .count();
        correct as f64 / prompt.len() as f64
    };

    send(ProgressReport {
        id: user_id.to_string(),
        progress,
    });
    progress
}

/// Words typed in a race and how long each player took on each of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    words: Vec<String>,
    times: Vec<Vec<f64>>,
}

impl Game {
    /// Create a game, checking that every player has one time per word.
    pub fn new(words: Vec<String>, times: Vec<Vec<f64>>) -> Result<Self> {
        if let Some((player, player_times)) = times
            .iter()
            .enumerate()
            .find(|(_, player_times)| player_times.len() != words.len())
        {
            return Err(TypistError::game(format!(
                "player {player} has {} times for {} words",
                player_times.len(),
                words.len()
            )));
        }

        Ok(Game { words, times })
    }

    /// All words, in the order they were typed.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Per-player, per-word times.
    pub fn times(&self) -> &[Vec<f64>] {
        &self.times
    }

    /// Number of players.
    pub fn player_count(&self) -> usize {
        self.times.len()
    }

    /// The word at `word_index`.
    pub fn word_at(&self, word_index: usize) -> Option<&str> {
        self.words.get(word_index).map(String::as_str)
    }

    /// Time `player` took to type the word at `word_index`.
    pub fn time(&self, player: usize, word_index: usize) -> Option<f64> {
        self.times.get(player)?.get(word_index).copied()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "game({:?}, {:?})", self.words, self.times)
    }
}

/// Turn each player's timestamps into the time spent on each word.
///
/// Every player's list starts with the moment they began typing, followed
/// by the moment they finished each word.
pub fn time_per_word<S: AsRef<str>>(
    timestamps_per_player: &[Vec<f64>],
    words: &[S],
) -> Result<Game> {
    let times = timestamps_per_player
        .iter()
        .map(|timestamps| {
            timestamps
                .windows(2)
                .map(|pair| pair[1] - pair[0])
                .collect()
        })
        .collect();
    let words = words.iter().map(|word| word.as_ref().to_string()).collect();

    Game::new(words, times)
}

/// For each player, the words they typed strictly faster than everyone
/// else. Ties go to the player with the lower index.
pub fn fastest_words(game: &Game) -> Vec<Vec<String>> {
    let mut fastest = vec![Vec::new(); game.player_count()];

    for (word_index, word) in game.words.iter().enumerate() {
        let mut best: Option<(usize, f64)> = None;
        for (player, times) in game.times.iter().enumerate() {
            let time = times[word_index];
            if best.is_none_or(|(_, best_time)| time < best_time) {
                best = Some((player, time));
            }
        }

        if let Some((player, _)) = best {
            fastest[player].push(word.clone());
        }
    }

    fastest
}

/// Describe which words each player typed fastest, one line per player.
pub fn fastest_words_report<S: AsRef<str>>(
    timestamps_per_player: &[Vec<f64>],
    words: &[S],
) -> Result<String> {
    let game = time_per_word(timestamps_per_player, words)?;
    let report = fastest_words(&game)
        .iter()
        .enumerate()
        .map(|(player, words)| {
            format!(
                "Player {} typed these fastest: {}\n",
                player + 1,
                words.join(",")
            )
        })
        .collect();

    Ok(report)
}

/// Recorded race: the words and each player's timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceLog {
    pub words: Vec<String>,
    pub timestamps: Vec<Vec<f64>>,
}

impl RaceLog {
    /// Load a race log from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let log = serde_json::from_str(&content)?;
        Ok(log)
    }

    /// Convert the timestamps into a [`Game`].
    pub fn to_game(&self) -> Result<Game> {
        time_per_word(&self.timestamps, &self.words)
    }
}
