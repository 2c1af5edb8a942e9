//! Line-mode display of a game

use super::formatters::{format_guess, share_grid};
use crate::core::{ScoreResult, Word};
use crate::game::{GameSession, Outcome, Presenter};
use colored::Colorize;
use std::io::{self, Write};

/// Prints each scored guess as `Guess <n>: ` followed by colored letters
///
/// Write failures are held until [`LinePresenter::finish`].
pub struct LinePresenter<'a, W: Write> {
    out: &'a mut W,
    error: Option<io::Error>,
}

impl<'a, W: Write> LinePresenter<'a, W> {
    #[must_use]
    pub fn new(out: &'a mut W) -> Self {
        Self { out, error: None }
    }

    /// Report the first write failure, if any
    ///
    /// # Errors
    ///
    /// Returns the first I/O error hit while printing guesses.
    pub fn finish(self) -> io::Result<()> {
        self.error.map_or(Ok(()), Err)
    }
}

impl<W: Write> Presenter for LinePresenter<'_, W> {
    fn show_guess(&mut self, turn: usize, guess: &Word, result: &ScoreResult) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "Guess {turn}: {}", format_guess(guess, result)) {
            self.error = Some(e);
        }
    }
}

/// Print the game banner and the number of tries
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_intro<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    writeln!(out, "{}", "This is WORDLE".white().bold().on_truecolor(106, 170, 100))?;
    writeln!(
        out,
        "You have {} tries to guess the {}-letter word I'm thinking of",
        session.attempts_allowed(),
        session.word_size()
    )
}

/// Print the result of a finished game
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_outcome<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    match (session.outcome(), session.revealed_word()) {
        (Outcome::Won, _) => writeln!(out, "{}", "You won!".green().bold())?,
        (_, Some(secret)) => {
            writeln!(out, "The word was {}.", secret.text().to_uppercase())?;
        }
        (_, None) => return Ok(()),
    }

    writeln!(out)?;
    writeln!(
        out,
        "{}",
        share_grid(
            session.history(),
            session.attempts_allowed(),
            session.outcome() == Outcome::Won
        )
    )
}
