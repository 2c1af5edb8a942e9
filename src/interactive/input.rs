//! Line input for guesses

use crate::core::Word;
use anyhow::{Result, bail};
use log::debug;
use std::io::{BufRead, Write};

/// Prompt until the player types a word of exactly `size` letters
///
/// Anything else (wrong length, digits, punctuation) is silently re-prompted.
///
/// # Errors
///
/// Returns an error if reading or writing fails, or if input ends before a
/// valid guess is entered.
pub fn read_guess<R: BufRead, W: Write>(reader: &mut R, out: &mut W, size: usize) -> Result<Word> {
    loop {
        write!(out, "Input a {size}-letter word: ")?;
        out.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            bail!("input closed before a {size}-letter guess was entered");
        }

        match Word::with_size(line.trim(), size) {
            Ok(word) => return Ok(word),
            Err(e) => debug!("Rejected guess {:?}: {e}", line.trim()),
        }
    }
}
