//! Formatting utilities for terminal output

use crate::core::{LetterStatus, ScoreResult, Word};
use crate::game::GuessRecord;
use colored::{ColoredString, Colorize};

/// Paint one uppercase letter with the background for its status
#[must_use]
pub fn colored_letter(letter: u8, status: LetterStatus) -> ColoredString {
    let text = char::from(letter.to_ascii_uppercase()).to_string().white().bold();
    match status {
        LetterStatus::Exact => text.on_truecolor(106, 170, 100),
        LetterStatus::Close => text.on_truecolor(201, 180, 88),
        LetterStatus::Wrong => text.on_truecolor(220, 20, 60),
    }
}

/// Format a guess as a row of colored letters
#[must_use]
pub fn format_guess(guess: &Word, result: &ScoreResult) -> String {
    guess
        .chars()
        .iter()
        .zip(result.statuses())
        .map(|(&letter, &status)| colored_letter(letter, status).to_string())
        .collect()
}

/// Emoji summary of a finished game, one row per guess
///
/// The header reads `WORDLE <used>/<allowed>`, with `X` in place of the
/// count when the game was lost.
#[must_use]
pub fn share_grid(history: &[GuessRecord], attempts_allowed: usize, won: bool) -> String {
    let used = if won {
        history.len().to_string()
    } else {
        "X".to_string()
    };

    let mut grid = format!("WORDLE {used}/{attempts_allowed}");
    for record in history {
        grid.push('\n');
        grid.push_str(&record.result.to_emoji());
    }
    grid
}
