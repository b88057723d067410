//! dungeon - A text dungeon crawl: three random monsters, loot and a shop
//!
//! Narration goes to stdout, prompts are read from stdin. Logs go to stderr
//! and are filtered by `RUST_LOG` (default `warn`).

use clap::Parser;
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use dungeon_core::config::{load_constants, PacingConstants};
use dungeon_core::{default_constants, ConfigError, Console, Game, GameConstants, RunOutcome};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dungeon")]
#[command(about = "Fight through a dungeon of randomly generated monsters")]
struct Cli {
    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// TOML file overriding the default game constants
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Skip the pauses between messages
    #[arg(long)]
    fast: bool,
}

impl Cli {
    fn constants(&self) -> Result<GameConstants, ConfigError> {
        let mut constants = match &self.config {
            Some(path) => load_constants(path)?,
            None => default_constants(),
        };
        if self.fast {
            constants.pacing = PacingConstants::instant();
        }
        Ok(constants)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let constants = match cli.constants() {
        Ok(constants) => constants,
        Err(error) => {
            let path = cli
                .config
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            tracing::error!(%path, %error, "Configuration error");
            eprintln!("Error loading config from '{}': {}", path, error);
            return ExitCode::FAILURE;
        }
    };

    let seed = cli.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, fast = cli.fast, "starting run");

    let styled = io::stdout().is_tty();
    if let Err(error) = print_banner(&mut io::stdout(), seed, styled) {
        tracing::error!(%error, "failed to write to stdout");
        return ExitCode::FAILURE;
    }

    let console = Console::new(io::stdin().lock(), io::stdout());
    let mut game = Game::new(constants, ChaCha8Rng::seed_from_u64(seed), console);

    let outcome = match game.run() {
        Ok(outcome) => outcome,
        Err(error) => {
            tracing::error!(%error, "console I/O failed");
            return ExitCode::FAILURE;
        }
    };

    if let Err(error) = print_verdict(&mut io::stdout(), outcome, styled) {
        tracing::warn!(%error, "failed to write verdict");
    }

    // Victory and defeat both count as a completed run
    ExitCode::SUCCESS
}

fn print_banner(out: &mut impl Write, seed: u64, styled: bool) -> io::Result<()> {
    let title = "~~ Into the Dungeon ~~";
    let seed_line = format!("(seed {})", seed);
    if styled {
        writeln!(out, "{}", title.bold().cyan())?;
        writeln!(out, "{}\n", seed_line.dark_grey())
    } else {
        writeln!(out, "{}", title)?;
        writeln!(out, "{}\n", seed_line)
    }
}

fn verdict_text(outcome: RunOutcome) -> String {
    match outcome {
        RunOutcome::Cleared => "*** VICTORY ***".to_string(),
        RunOutcome::Slain { encounter } => format!("*** DEFEAT in encounter {} ***", encounter),
    }
}

fn print_verdict(out: &mut impl Write, outcome: RunOutcome, styled: bool) -> io::Result<()> {
    let text = verdict_text(outcome);
    if !styled {
        return writeln!(out, "\n{}", text);
    }
    match outcome {
        RunOutcome::Cleared => writeln!(out, "\n{}", text.bold().green()),
        RunOutcome::Slain { .. } => writeln!(out, "\n{}", text.bold().red()),
    }
}
