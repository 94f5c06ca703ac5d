//! Command line argument parsing for Typist CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::spelling::{AutocorrectConfig, DistanceKind};

/// Typist - closest-match autocorrect and typing tests
#[derive(Parser, Debug, Clone)]
#[command(name = "typist")]
#[command(about = "Closest-match autocorrect and typing tests")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Typist Contributors")]
#[command(long_about = None)]
pub struct TypistArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Autocorrect configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "TYPIST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TypistArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Autocorrect words against a word list
    Correct(CorrectArgs),

    /// Compute the distance between two words
    Distance(DistanceArgs),

    /// Run an interactive typing test
    Test(TestArgs),

    /// Report the fastest words of a recorded race
    Race(RaceArgs),
}

/// Distance settings shared by commands that score words.
#[derive(Parser, Debug, Clone, Default)]
pub struct MatchArgs {
    /// Distance function
    #[arg(short, long)]
    pub distance: Option<DistanceKind>,

    /// Maximum accepted distance
    #[arg(short, long)]
    pub limit: Option<usize>,
}

impl MatchArgs {
    /// Apply these flags on top of a base configuration.
    pub fn apply(&self, mut config: AutocorrectConfig) -> AutocorrectConfig {
        if let Some(distance) = self.distance {
            config.distance = distance;
        }
        if let Some(limit) = self.limit {
            config.limit = limit;
        }
        config
    }
}

/// Arguments for autocorrecting words
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Words to correct
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Word list file, one word per line (default: built-in list)
    #[arg(short, long = "words", value_name = "WORDS_FILE")]
    pub words_file: Option<PathBuf>,

    #[command(flatten)]
    pub matching: MatchArgs,

    /// Score candidates in parallel
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for computing a distance
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    /// Typed word
    #[arg(value_name = "FROM")]
    pub from: String,

    /// Target word
    #[arg(value_name = "TO")]
    pub to: String,

    #[command(flatten)]
    pub matching: MatchArgs,
}

/// Arguments for the typing test
#[derive(Parser, Debug, Clone)]
pub struct TestArgs {
    /// Only use paragraphs mentioning one of these (lowercase) topics
    #[arg(value_name = "TOPIC")]
    pub topics: Vec<String>,

    /// Paragraph file, one paragraph per line
    #[arg(
        short,
        long,
        value_name = "PARAGRAPHS_FILE",
        default_value = "data/sample_paragraphs.txt"
    )]
    pub paragraphs: PathBuf,
}

/// Arguments for race reports
#[derive(Parser, Debug, Clone)]
pub struct RaceArgs {
    /// Race log file (JSON with "words" and "timestamps")
    #[arg(value_name = "RACE_FILE")]
    pub race_file: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
