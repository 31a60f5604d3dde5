//! Word Hunt - CLI
//!
//! Interactive word list explorer with regex search and Scrabble-style subset
//! anagrams.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordhunt::{
    commands::{DEFAULT_MAX_LETTERS, QueryConfig, run_once, run_shell},
    query::{QueryEngine, Request},
    wordlists::{DEFAULT_WORDLIST, WordStore},
};

#[derive(Parser)]
#[command(
    name = "wordhunt",
    about = "Explore a word list with regular expressions and Scrabble-style anagrams",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line
    #[arg(short = 'w', long, global = true, env = "WORDHUNT_WORDLIST", default_value = DEFAULT_WORDLIST)]
    wordlist: PathBuf,

    /// Longest letter set accepted by scrab (work doubles per letter)
    #[arg(long, global = true, env = "WORDHUNT_MAX_LETTERS", default_value_t = DEFAULT_MAX_LETTERS)]
    max_letters: usize,

    /// Print all results at once instead of a screen at a time
    #[arg(long, global = true)]
    no_pager: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive query shell (default)
    Shell,

    /// Print words matching a regular expression anywhere in the word
    Search {
        /// The pattern to search for
        pattern: String,
    },

    /// Print words that can be spelled from a subset of the given letters
    Scrab {
        /// Available letters, repeats allowed
        letters: String,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let store = WordStore::load(&cli.wordlist)
        .with_context(|| format!("cannot start without a word list ({})", cli.wordlist.display()))?;
    let engine = QueryEngine::new(&store);
    info!(
        words = store.len(),
        signatures = engine.index().len(),
        "index ready"
    );

    let config = QueryConfig {
        max_letters: cli.max_letters,
        paging: !cli.no_pager,
    };

    // Default to the shell if no command given
    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => run_shell(&engine, &config),
        Commands::Search { pattern } => run_once(&engine, &Request::Pattern(pattern), &config),
        Commands::Scrab { letters } => run_once(&engine, &Request::Scrab(letters), &config),
    }
}
