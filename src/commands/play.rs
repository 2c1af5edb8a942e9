//! Line-mode game
//!
//! Prompts for guesses on a reader, prints colored feedback to a writer,
//! and stops once the session is won or lost.

use crate::game::{GameSession, Outcome};
use crate::interactive::input::read_guess;
use crate::output::{LinePresenter, write_intro, write_outcome};
use anyhow::{Context, Result};
use log::info;
use std::io::{BufRead, Write};

/// Play one session to the end
///
/// # Errors
///
/// Returns an error if terminal I/O fails or input ends mid-game.
pub fn run_game<R: BufRead, W: Write>(
    mut session: GameSession,
    reader: &mut R,
    out: &mut W,
) -> Result<Outcome> {
    write_intro(out, &session).context("Failed to write game banner")?;

    while !session.is_over() {
        let guess = read_guess(reader, out, session.word_size())?;

        let mut presenter = LinePresenter::new(&mut *out);
        session.submit(&guess, &mut presenter)?;
        presenter.finish().context("Failed to print guess")?;
    }

    write_outcome(out, &session).context("Failed to write game result")?;
    info!(
        "Game finished: {:?} after {} of {} attempts",
        session.outcome(),
        session.attempts_used(),
        session.attempts_allowed()
    );

    Ok(session.outcome())
}
