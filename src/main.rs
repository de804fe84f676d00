//! Hangman - CLI
//!
//! Terminal hangman with difficulty modes and efficiency-based scoring.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangman::{
    commands::{PlaySetup, ScoreRequest, list_modes, resolve_mode_or_default, run_play, score_word},
    config::{Config, DEFAULT_CONFIG_PATH},
    core::{ModeCatalog, ScoringEngine},
    output::{print_config_notices, print_modes, print_score_result, print_session_summary},
    session::StdConsole,
    wordlists::WordSource,
};
use std::path::{Path, PathBuf};
use tracing::{Level, warn};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the word before you run out of mistakes",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Mode name (casual, normal, insane; easy, hard with --pooled). Asks if omitted
    #[arg(short, long, global = true)]
    mode: Option<String>,

    /// File with one secret word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Settings file, created with defaults if missing
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Use the EASY/HARD modes, each with its own word pool
    #[arg(long, global = true)]
    pooled: bool,

    /// Show debug diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play,

    /// List the available modes
    Modes,

    /// Show what a win on a word would score
    Score {
        /// The secret word
        word: String,

        /// Mistakes still left when the word is solved (default: full budget)
        #[arg(short, long)]
        remaining: Option<u32>,

        /// Solved with a single whole-word guess
        #[arg(long)]
        word_guess: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let loaded = Config::load_or_default(&cli.config);
    print_config_notices(&loaded.notices);
    let config = loaded.config;

    let catalog = if cli.pooled {
        ModeCatalog::pooled()?
    } else {
        ModeCatalog::standard(&config)?
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(
            cli.mode.as_deref(),
            cli.words.as_deref(),
            cli.pooled,
            catalog,
            &config,
        ),
        Commands::Modes => {
            warn_ignored(cli.words.as_deref(), cli.mode.as_deref(), "modes");
            print_modes(&list_modes(&catalog));
            Ok(())
        }
        Commands::Score {
            word,
            remaining,
            word_guess,
        } => {
            warn_ignored(cli.words.as_deref(), None, "score");
            run_score_command(word, remaining, word_guess, cli.mode.as_deref(), &catalog, &config)
        }
    }
}

fn run_play_command(
    mode_name: Option<&str>,
    words_path: Option<&Path>,
    pooled: bool,
    catalog: ModeCatalog,
    config: &Config,
) -> Result<()> {
    if pooled && words_path.is_some() {
        warn!("--words is ignored with --pooled, each mode draws from its own pool");
    }
    let words = if pooled {
        WordSource::builtin()
    } else {
        WordSource::load(words_path)
    };

    let mode = mode_name.map(|name| resolve_mode_or_default(&catalog, name).clone());

    let setup = PlaySetup {
        catalog,
        words,
        scoring: ScoringEngine::from_config(config),
        mode,
    };

    let summary = run_play(setup, rand::rng(), &mut StdConsole::stdio())?;
    print_session_summary(&summary);
    Ok(())
}

fn run_score_command(
    word: String,
    remaining: Option<u32>,
    by_word: bool,
    mode_name: Option<&str>,
    catalog: &ModeCatalog,
    config: &Config,
) -> Result<()> {
    let mode = mode_name.map_or_else(
        || catalog.default_mode(),
        |name| resolve_mode_or_default(catalog, name),
    );

    let request = ScoreRequest {
        remaining,
        by_word,
        ..ScoreRequest::new(word)
    };
    let result = score_word(request, mode, &ScoringEngine::from_config(config))
        .map_err(|e| anyhow::anyhow!(e))?;

    print_score_result(&result);
    Ok(())
}

fn warn_ignored(words: Option<&Path>, mode: Option<&str>, command: &str) {
    if words.is_some() {
        warn!("--words has no effect on {command}, ignoring it");
    }
    if mode.is_some() {
        warn!("--mode has no effect on {command}, ignoring it");
    }
}
