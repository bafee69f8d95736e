//! Capitaly simulator.
//!
//! # Usage
//!
//! ```bash
//! # Prompt for the game description file
//! capitaly
//!
//! # Run a file, reproducing a random game
//! capitaly game.txt --seed 1234
//!
//! # Full outcome as JSON
//! capitaly game.txt --json
//! ```
//!
//! Logs go to stderr (`RUST_LOG` overrides the level); the report goes
//! to stdout.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use capitaly::{load_config, Game};

#[derive(Parser)]
#[command(name = "capitaly")]
#[command(about = "Simulate a game of Capitaly and report who finished second to last")]
#[command(version)]
struct Cli {
    /// Game description file. Prompted for when omitted.
    file: Option<PathBuf>,

    /// Seed for the dice when the file has no roll line
    #[arg(long)]
    seed: Option<u64>,

    /// Give up after this many turns
    #[arg(long)]
    max_turns: Option<u32>,

    /// Print the full outcome as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let path = match cli.file {
        Some(path) => path,
        None => match prompt_for_file() {
            Ok(path) => path,
            Err(e) => {
                tracing::error!("Failed to read file name: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    let seed = cli.seed.unwrap_or_else(rand::random);
    let mut config = match load_config(&path, seed) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid game description: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let capitaly::Dice::Random { seed } = config.dice {
        tracing::info!(seed, "rolling random dice");
    }
    if let Some(limit) = cli.max_turns {
        config = config.with_max_turns(limit);
    }

    let outcome = match Game::new(config).and_then(|mut game| game.run()) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("Simulation failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&outcome) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!("Failed to serialize outcome: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        match &outcome.second_to_last {
            Some(name) => println!("{name} finished second to last!"),
            None => println!("{} won; nobody finished second to last.", outcome.winner),
        }
    }

    ExitCode::SUCCESS
}

fn prompt_for_file() -> std::io::Result<PathBuf> {
    println!("Game configuration file: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(PathBuf::from(line.trim()))
}
