//! Wordle - CLI
//!
//! Guess a secret 5 to 8 letter word, in the terminal or a full-screen TUI.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use wordle_game::{
    commands::run_game,
    config::Cli,
    game::GameSession,
    interactive::{App, run_tui},
    logging,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose).context("Failed to initialize logging")?;

    let size = cli.word_size();
    let source = cli.word_source();
    let words = source
        .load(size)
        .with_context(|| format!("Failed to load {size}-letter word list"))?;

    let session = GameSession::random(&words, &mut rand::rng());

    if cli.tui {
        let mut app = App::new(source);
        app.start_session(session);
        return run_tui(app);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_game(session, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
