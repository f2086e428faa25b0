//! wordhand - a turn-based word-tile game
//!
//! Deal a hand of letters, spell words from it, score Scrabble-style.

mod app;
mod config;
mod game;
mod tui;

use anyhow::Context;
use app::Session;
use clap::Parser;
use config::GameConfig;
use game::{RngLetters, WordList};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tui::LineConsole;

#[derive(Parser)]
#[command(name = "wordhand")]
#[command(about = "Spell words from a random hand of letter tiles")]
struct Args {
    /// Word list, one word per line
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Tiles per hand
    #[arg(long, default_value_t = game::HAND_SIZE)]
    hand_size: u32,

    /// Seed for reproducible deals
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "wordhand=debug" } else { "wordhand=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let word_list = config::resolve_word_list(args.words.as_deref())?;
    let config = GameConfig::new(word_list).with_hand_size(args.hand_size);
    config.validate()?;

    println!("Loading word list from file...");
    let dictionary = WordList::load(&config.word_list)
        .with_context(|| "cannot start a session without a word list")?;
    println!("   {} words loaded.", dictionary.len());

    let letters = match args.seed {
        Some(seed) => RngLetters::seeded(seed),
        None => RngLetters::from_os(),
    };
    let mut session = Session::new(
        &dictionary,
        config.dealer(),
        config.scoring(),
        letters,
        config.hand_size,
    );

    let mut console = LineConsole::stdio();
    let stats = session.run(&mut console)?;
    tracing::info!(
        hands = stats.hands_played,
        total = stats.total_score,
        "session ended"
    );
    Ok(())
}
