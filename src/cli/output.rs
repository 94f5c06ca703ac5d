//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TypistArgs};
use crate::error::Result;
use crate::spelling::Correction;

/// Result structure for word correction.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionResults {
    pub distance: String,
    pub limit: usize,
    pub dictionary_words: usize,
    pub corrections: Vec<Correction>,
}

/// Result structure for a single distance computation.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResult {
    pub from: String,
    pub to: String,
    pub distance_function: String,
    pub limit: usize,
    pub distance: usize,
    pub within_limit: bool,
}

/// Result of one typed paragraph.
#[derive(Debug, Serialize, Deserialize)]
pub struct TypingRound {
    pub paragraph: String,
    pub typed: String,
    pub words_per_minute: f64,
    pub accuracy: f64,
}

/// Summary of a typing test session.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TypingSummary {
    pub rounds: Vec<TypingRound>,
}

/// Result structure for a race report.
#[derive(Debug, Serialize, Deserialize)]
pub struct RaceReport {
    pub players: usize,
    pub fastest_words: Vec<Vec<String>>,
    pub report: String,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &TypistArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &TypistArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    for line in human_lines(&value) {
        println!("{line}");
    }

    Ok(())
}

/// Render a result as human-readable lines.
fn human_lines(value: &serde_json::Value) -> Vec<String> {
    let Some(obj) = value.as_object() else {
        return vec![format_value(value)];
    };

    if let Some(corrections) = obj.get("corrections").and_then(|c| c.as_array()) {
        return corrections
            .iter()
            .map(|correction| {
                let original = correction.get("original").map(format_value).unwrap_or_default();
                let corrected = correction.get("corrected").map(format_value).unwrap_or_default();
                match correction.get("distance").and_then(|d| d.as_u64()) {
                    Some(distance) => format!("{original} -> {corrected} (distance {distance})"),
                    None => format!("{original} (unchanged)"),
                }
            })
            .collect();
    }

    if let Some(rounds) = obj.get("rounds").and_then(|r| r.as_array()) {
        return rounds
            .iter()
            .enumerate()
            .map(|(i, round)| {
                let wpm = round.get("words_per_minute").and_then(|w| w.as_f64());
                let accuracy = round.get("accuracy").and_then(|a| a.as_f64());
                format!(
                    "Round {}: {:.1} WPM, {:.1}% accuracy",
                    i + 1,
                    wpm.unwrap_or(0.0),
                    accuracy.unwrap_or(0.0)
                )
            })
            .collect();
    }

    if let Some(report) = obj.get("report").and_then(|r| r.as_str()) {
        return report.lines().map(str::to_string).collect();
    }

    obj.iter()
        .map(|(key, val)| format!("{key}: {}", format_value(val)))
        .collect()
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TypistArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}
