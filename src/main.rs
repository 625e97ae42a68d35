//! Word Scramble - CLI
//!
//! Word game with TUI and CLI modes: build words from the letters of a random root word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use word_scramble::{
    commands::{analyze_root, check_words, run_simple, run_survey},
    config::GameConfig,
    dictionary::{DEFAULT_LANGUAGE, WordListDictionary},
    game::Game,
    output::{print_analysis_result, print_check_result, print_survey_statistics},
    wordlists::WordSource,
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word list (one word per line); defaults to the bundled list
    #[arg(short, long, global = true)]
    roots: Option<PathBuf>,

    /// Dictionary word list (one word per line); defaults to the bundled English list
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Dictionary language
    #[arg(short, long, global = true, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Seed for reproducible root word picks
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Check words against a given root word
    Check {
        /// The root word
        root: String,

        /// Candidate words, submitted in order
        words: Vec<String>,
    },

    /// List every word that can be made from a root word
    Analyze {
        /// Root word to analyze
        root: String,
    },

    /// Count the words each root word yields
    Survey {
        /// Limit number of root words to survey
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            roots: self.roots.clone(),
            dictionary: self.dictionary.clone(),
            language: self.language.clone(),
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.config();

    let dictionary = config
        .load_dictionary()
        .context("Failed to load dictionary")?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config, &dictionary),
        Commands::Simple => run_simple_command(&config, &dictionary),
        Commands::Check { root, words } => {
            let result = check_words(&root, &words, &dictionary, &config.language)
                .with_context(|| format!("Invalid root word '{root}'"))?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Analyze { root } => {
            let result = analyze_root(&root, &dictionary, &config.language)
                .with_context(|| format!("Invalid root word '{root}'"))?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Survey { limit } => {
            let source = load_source(&config)?;
            let stats = run_survey(&source, &dictionary, &config.language, limit, true);
            print_survey_statistics(&stats);
            Ok(())
        }
    }
}

fn load_source(config: &GameConfig) -> Result<WordSource> {
    config
        .load_word_source()
        .context("Failed to load root words")
}

fn run_simple_command(config: &GameConfig, dictionary: &WordListDictionary) -> Result<()> {
    let source = load_source(config)?;
    let mut game = Game::new(&source, dictionary, &config.language, config.rng());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_simple(&mut game, stdin.lock(), &mut stdout).context("I/O error in simple mode")
}

fn run_play_command(config: &GameConfig, dictionary: &WordListDictionary) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let source = load_source(config)?;
    let game = Game::new(&source, dictionary, &config.language, config.rng());
    run_tui(App::new(game))
}
