use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use log::debug;

use geodle::puzzle::{
    CandidatePool, DailySession, FileStore, GuessOutcome, GuessResult, KeyValueStore,
    MemoryStore, PuzzleConfig, RejectReason,
};

#[derive(Parser)]
#[command(name = "geodle")]
#[command(about = "Daily geography guessing puzzle")]
struct Cli {
    /// Country dataset in REST Countries v3.1 JSON format
    #[arg(long)]
    countries: PathBuf,

    /// Directory holding saved progress and statistics
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Play the puzzle for this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Submit these guesses instead of reading from stdin
    #[arg(long = "guess")]
    guesses: Vec<String>,

    /// Print the share text once the game is over
    #[arg(long)]
    share: bool,

    /// Print statistics and exit
    #[arg(long)]
    stats: bool,

    /// Keep progress in memory only
    #[arg(long)]
    memory: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn,geodle=info"))
        .init();

    let cli = Cli::parse();
    let pool = CandidatePool::load_file(&cli.countries)?;
    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());

    if cli.memory {
        run(cli, pool, date, MemoryStore::new())
    } else {
        let dir = match &cli.data_dir {
            Some(dir) => dir.clone(),
            None => data_dir(),
        };
        let store = FileStore::new(&dir)
            .with_context(|| format!("Failed to open data directory: {}", dir.display()))?;
        run(cli, pool, date, store)
    }
}

/// Platform data directory, falling back to `./save_data`
fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "geodle")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

fn run<S: KeyValueStore>(cli: Cli, pool: CandidatePool, date: NaiveDate, store: S) -> Result<()> {
    let mut session = DailySession::start(pool, date, store, PuzzleConfig::default());

    if cli.stats {
        println!("{}", session.stats().summary());
        return Ok(());
    }

    let Some(clues) = session.clues() else {
        println!("Loading atlas... no countries available.");
        return Ok(());
    };

    println!("GEODLE - {}", date.format("%-m/%-d/%Y"));
    println!(
        "Continent: {} | Population: {} | First letter: {}",
        clues.continent,
        clues.population,
        clues.first_letter.unwrap_or('?')
    );
    print_history(&session);

    if cli.guesses.is_empty() {
        play_interactive(&mut session)?;
    } else {
        for guess in &cli.guesses {
            if session.game().is_over() {
                break;
            }
            handle_input(&mut session, guess);
        }
    }

    if let Some(message) = session.result_message() {
        println!("{}", message);
    }
    if cli.share {
        if let Some(text) = session.share_text() {
            println!();
            println!("{}", text);
        }
    }
    println!("{}", session.stats().summary());
    Ok(())
}

fn play_interactive<S: KeyValueStore>(session: &mut DailySession<S>) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !session.game().is_over() {
        print!(
            "Guess {}/{}> ",
            session.game().attempts_used() + 1,
            session.game().attempt_budget()
        );
        io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read guess")?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        handle_input(session, input);
    }
    Ok(())
}

fn handle_input<S: KeyValueStore>(session: &mut DailySession<S>, input: &str) {
    match session.submit_name(input) {
        None => {
            let names: Vec<&str> = session
                .suggestions(input)
                .iter()
                .map(|c| c.name.as_str())
                .collect();
            if names.is_empty() {
                println!("Unknown country: {}", input);
            } else {
                println!("Unknown country: {} (did you mean: {}?)", input, names.join(", "));
            }
        }
        Some(GuessOutcome::Rejected(reason)) => {
            debug!("Guess {} rejected: {:?}", input, reason);
            match reason {
                RejectReason::Duplicate => println!("Already guessed {}", input),
                RejectReason::GameOver => println!("The game is over"),
                RejectReason::NotReady => println!("No puzzle loaded"),
            }
        }
        Some(outcome) => {
            if let Some(result) = outcome.result() {
                print_guess_line(result);
            }
        }
    }
}

fn print_history<S: KeyValueStore>(session: &DailySession<S>) {
    for result in session.game().guesses() {
        print_guess_line(result);
    }
}

fn print_guess_line(result: &GuessResult) {
    println!(
        "{} {:<24} {:>6.0} km {}",
        result.country.flag_emoji(),
        result.country.name,
        result.distance_km,
        result.direction
    );
}
