//! Command implementations for Typist CLI.

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::spelling::*;
use crate::typing::*;

/// Execute a CLI command.
pub fn execute_command(args: TypistArgs) -> Result<()> {
    match &args.command {
        Command::Correct(correct_args) => correct_words(correct_args.clone(), &args),
        Command::Distance(distance_args) => compute_distance(distance_args.clone(), &args),
        Command::Test(test_args) => run_test(test_args.clone(), &args),
        Command::Race(race_args) => report_race(race_args.clone(), &args),
    }
}

/// Load the autocorrect configuration named on the command line, if any.
fn load_config(cli_args: &TypistArgs) -> Result<AutocorrectConfig> {
    match &cli_args.config {
        Some(path) => {
            debug!("Loading configuration from: {}", path.display());
            AutocorrectConfig::load_from_file(path)
        }
        None => Ok(AutocorrectConfig::default()),
    }
}

/// Largest limit at which the recursive edit distance stays fast.
const RECURSIVE_EDIT_LIMIT: usize = 8;

/// Warning for configurations where the recursive edit distance blows up.
fn slow_limit_warning(config: &AutocorrectConfig) -> Option<String> {
    (config.distance == DistanceKind::Edit && config.limit > RECURSIVE_EDIT_LIMIT).then(|| {
        format!(
            "limit {} is slow with the recursive edit distance; consider --distance table",
            config.limit
        )
    })
}

/// Autocorrect the given words.
fn correct_words(args: CorrectArgs, cli_args: &TypistArgs) -> Result<()> {
    let mut config = args.matching.apply(load_config(cli_args)?);
    if args.parallel {
        config.parallel = true;
    }
    if let Some(warning) = slow_limit_warning(&config) {
        warn!("{warning}");
    }

    let dictionary = match &args.words_file {
        Some(path) => {
            info!("Loading word list from: {}", path.display());
            WordList::load_from_file(path)?
        }
        None => WordList::builtin(),
    };
    info!(
        "Correcting {} words against {} candidates ({}, limit {})",
        args.words.len(),
        dictionary.len(),
        config.distance,
        config.limit
    );

    let corrector = Autocorrector::with_config(dictionary, config);
    let corrections = args
        .words
        .iter()
        .map(|word| corrector.correct(word))
        .collect();

    output_result(
        "Corrections",
        &CorrectionResults {
            distance: corrector.config().distance.to_string(),
            limit: corrector.config().limit,
            dictionary_words: corrector.dictionary().len(),
            corrections,
        },
        cli_args,
    )
}

/// Compute the distance between two words.
fn compute_distance(args: DistanceArgs, cli_args: &TypistArgs) -> Result<()> {
    let config = args.matching.apply(load_config(cli_args)?);
    if let Some(warning) = slow_limit_warning(&config) {
        warn!("{warning}");
    }
    let distance = config.distance.compute(&args.from, &args.to, config.limit);

    output_result(
        "Distance",
        &DistanceResult {
            distance_function: config.distance.to_string(),
            limit: config.limit,
            distance,
            within_limit: distance <= config.limit,
            from: args.from,
            to: args.to,
        },
        cli_args,
    )
}

/// Run the interactive typing test on stdin/stdout.
fn run_test(args: TestArgs, cli_args: &TypistArgs) -> Result<()> {
    info!("Loading paragraphs from: {}", args.paragraphs.display());
    let paragraphs = lines_from_file(&args.paragraphs)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = run_typing_test(
        &paragraphs,
        &args.topics,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )?;

    output_result("Typing test summary", &summary, cli_args)
}

/// Drive a typing test: show paragraphs, time the typed answers, and score
/// them until the paragraphs run out or the user quits.
pub fn run_typing_test<R: BufRead, W: Write>(
    paragraphs: &[String],
    topics: &[String],
    input: &mut R,
    output: &mut W,
) -> Result<TypingSummary> {
    let topic_filter = if topics.is_empty() {
        None
    } else {
        Some(about(topics)?)
    };
    let select = |paragraph: &str| topic_filter.as_ref().is_none_or(|about| about(paragraph));

    let mut summary = TypingSummary::default();
    for i in 0.. {
        let reference = choose(paragraphs, select, i);
        if reference.is_empty() {
            writeln!(output, "No more paragraphs about {topics:?} are available.")?;
            break;
        }

        writeln!(output, "Type the following paragraph and then press enter/return.")?;
        writeln!(
            output,
            "If you only type part of it, you will be scored only on that part.\n"
        )?;
        writeln!(output, "{reference}\n")?;
        output.flush()?;

        let start = Instant::now();
        let typed = match read_line(input)? {
            Some(typed) if !typed.is_empty() => typed,
            _ => {
                writeln!(output, "Goodbye.")?;
                break;
            }
        };
        let elapsed = start.elapsed().max(Duration::from_millis(1));

        let round = TypingRound {
            words_per_minute: wpm(&typed, elapsed)?,
            accuracy: accuracy(&typed, reference),
            paragraph: reference.to_string(),
            typed,
        };
        writeln!(output, "\nNice work!")?;
        writeln!(output, "Words per minute: {:.2}", round.words_per_minute)?;
        writeln!(output, "Accuracy:         {:.2}", round.accuracy)?;
        summary.rounds.push(round);

        writeln!(
            output,
            "\nPress enter/return for the next paragraph or type q to quit."
        )?;
        output.flush()?;
        match read_line(input)? {
            Some(answer) if answer.trim() != "q" => {}
            _ => break,
        }
    }

    Ok(summary)
}

/// Read one line without its terminator, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Report which words each player typed fastest.
fn report_race(args: RaceArgs, cli_args: &TypistArgs) -> Result<()> {
    info!("Loading race log from: {}", args.race_file.display());
    let log = RaceLog::load_from_file(&args.race_file)?;
    let game = log.to_game()?;
    debug!("Loaded {game}");

    let fastest = fastest_words(&game);
    let report = fastest_words_report(&log.timestamps, &log.words)?;

    output_result(
        "Race report",
        &RaceReport {
            players: game.player_count(),
            fastest_words: fastest,
            report,
        },
        cli_args,
    )
}
