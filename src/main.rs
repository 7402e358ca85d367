//! Wordle - CLI
//!
//! Terminal Wordle with TUI and simple line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordle_game::{
    commands::{reset_stats, run_simple, score_guess, show_stats},
    config::{GameConfig, WordMode, resolve_data_dir},
    core::Word,
    game::{DEFAULT_MAX_ROWS, GameSession},
    logging,
    storage::FileStore,
    wordlists::WordList,
};

#[derive(Parser)]
#[command(name = "wordle", about = "Guess the hidden five-letter word", version, author)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use the word of the day instead of a random word
    #[arg(long, global = true)]
    daily: bool,

    /// Number of guesses per game (1-10)
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ROWS)]
    rows: usize,

    /// Path to a custom word list (one word per line)
    #[arg(short = 'w', long, global = true)]
    word_list: Option<PathBuf>,

    /// Player profile to load and save
    #[arg(short, long, global = true, default_value = "default")]
    profile: String,

    /// Directory for saved games, statistics and logs
    #[arg(long, global = true, env = "WORDLE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Force the solution of every game
    #[arg(long, global = true, hide = true)]
    solution: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Show statistics for the profile
    Stats {
        /// Clear the statistics instead
        #[arg(long)]
        reset: bool,
    },

    /// Evaluate a guess against a solution
    Score {
        /// The guessed word
        guess: String,

        /// The hidden word
        solution: String,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Score { guess, solution } => {
            score_guess(&guess, &solution)?;
            Ok(())
        }
        command => run_with_profile(&cli, command),
    }
}

fn run_with_profile(cli: &Cli, command: Commands) -> Result<()> {
    let words = load_word_list(cli.word_list.as_deref())?;
    let config = build_config(cli, &words)?;
    let _guard = logging::init(&config.log_dir(), cli.verbose)?;

    let store = FileStore::new(config.profile_dir()).with_context(|| {
        format!("failed to open profile at {}", config.profile_dir().display())
    })?;

    match command {
        Commands::Stats { reset: true } => {
            reset_stats(&store).context("failed to reset statistics")
        }
        Commands::Stats { reset: false } => {
            show_stats(&store, config.max_rows);
            Ok(())
        }
        Commands::Simple => run_simple_command(store, words, config),
        Commands::Play | Commands::Score { .. } => run_play_command(store, words, config),
    }
}

fn load_word_list(path: Option<&Path>) -> Result<WordList> {
    match path {
        None => Ok(WordList::embedded()),
        Some(path) => WordList::from_file(path)
            .with_context(|| format!("failed to load word list {}", path.display())),
    }
}

fn build_config(cli: &Cli, words: &WordList) -> Result<GameConfig> {
    let solution = cli
        .solution
        .as_deref()
        .map(Word::new)
        .transpose()
        .context("invalid --solution")?;

    let config = GameConfig {
        max_rows: cli.rows,
        mode: if cli.daily {
            WordMode::Daily
        } else {
            WordMode::Random
        },
        profile: cli.profile.clone(),
        data_dir: resolve_data_dir(cli.data_dir.as_deref()),
        solution,
    };
    config.validate(words)?;
    Ok(config)
}

fn open_session(
    store: FileStore,
    words: WordList,
    config: GameConfig,
) -> Result<GameSession<FileStore>> {
    let today = chrono::Local::now().date_naive();
    GameSession::open(store, words, config, today).context("failed to open game session")
}

fn run_simple_command(store: FileStore, words: WordList, config: GameConfig) -> Result<()> {
    let mut session = open_session(store, words, config)?;
    run_simple(&mut session).context("simple mode failed")
}

fn run_play_command(store: FileStore, words: WordList, config: GameConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(open_session(store, words, config)?);
    run_tui(app)
}
