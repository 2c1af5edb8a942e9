//! Command-line configuration
//!
//! One required positional argument, the word size. Everything else is
//! optional and has a default.

use crate::core::{MAX_WORD_SIZE, MIN_WORD_SIZE};
use crate::wordlists::{LoadError, WordList, loader};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "wordle",
    about = "Guess the secret 5 to 8 letter word in one more try than it has letters",
    version,
    author
)]
pub struct Cli {
    /// Word size: 5, 6, 7 or 8
    #[arg(value_parser = clap::value_parser!(u8).range(5..=8))]
    pub size: u8,

    /// Directory holding `<size>.txt` word lists (built-in lists if omitted)
    #[arg(short = 'd', long, env = "WORDLE_WORDLIST_DIR")]
    pub wordlist_dir: Option<PathBuf>,

    /// Play in the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Log more: -v for info, -vv for debug
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    #[must_use]
    pub fn word_size(&self) -> usize {
        usize::from(self.size)
    }

    #[must_use]
    pub fn word_source(&self) -> WordSource {
        WordSource::new(self.wordlist_dir.clone())
    }
}

/// Where secret word lists come from
#[derive(Debug, Clone, Default)]
pub struct WordSource {
    dir: Option<PathBuf>,
}

impl WordSource {
    #[must_use]
    pub const fn new(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }

    /// Load the list for `size` from the directory, or the built-in list
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the size is unsupported or the list file is
    /// missing, unreadable, or empty.
    pub fn load(&self, size: usize) -> Result<WordList, LoadError> {
        match &self.dir {
            Some(dir) => loader::load_from_dir(dir, size),
            None => WordList::embedded(size),
        }
    }

    /// Every playable word size, smallest first
    pub fn sizes() -> impl Iterator<Item = usize> {
        MIN_WORD_SIZE..=MAX_WORD_SIZE
    }
}
