//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types and the scoring rules.
//! All types here are pure, testable, and free of I/O.

mod score;
mod status;
mod word;

pub use score::{ScoreResult, score};
pub use status::LetterStatus;
pub use word::{MAX_WORD_SIZE, MIN_WORD_SIZE, Word, WordError};
