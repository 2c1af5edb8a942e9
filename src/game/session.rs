//! A single play-through: one secret word, `size + 1` attempts
//!
//! The session owns the secret word and the attempt counter. Each submitted
//! guess is scored, shown to a [`Presenter`], and may end the game.

use crate::core::{ScoreResult, Word, score};
use crate::wordlists::WordList;
use log::debug;
use rand::Rng;
use std::fmt;

/// Receives every scored guess, in submission order
pub trait Presenter {
    /// Show guess number `turn` (1-based) with its feedback
    fn show_guess(&mut self, turn: usize, guess: &Word, result: &ScoreResult);
}

/// Where the session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A scored guess kept in the session history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub result: ScoreResult,
}

/// Errors from submitting a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The session already reached a terminal outcome
    Finished(Outcome),
    /// The guess does not have the secret word's size
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished(outcome) => {
                write!(f, "Game is already over ({outcome:?}); no more guesses accepted")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Guess must be {expected} letters, got {actual}")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// Game state for one secret word
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Word,
    attempts_used: usize,
    attempts_allowed: usize,
    outcome: Outcome,
    history: Vec<GuessRecord>,
}

impl GameSession {
    /// Start a session for a known secret word
    ///
    /// The player gets one more attempt than the word has letters.
    #[must_use]
    pub fn new(secret: Word) -> Self {
        let attempts_allowed = secret.size() + 1;
        Self {
            secret,
            attempts_used: 0,
            attempts_allowed,
            outcome: Outcome::InProgress,
            history: Vec::with_capacity(attempts_allowed),
        }
    }

    /// Start a session with a secret word drawn uniformly from `words`
    pub fn random<R: Rng + ?Sized>(words: &WordList, rng: &mut R) -> Self {
        let secret = words.random_word(rng).clone();
        debug!(
            "New {}-letter session from a list of {} words",
            secret.size(),
            words.count()
        );
        log::trace!("Secret word: {secret}");
        Self::new(secret)
    }

    /// Score one guess and advance the game
    ///
    /// # Errors
    /// - [`SessionError::Finished`] if the game is already won or lost
    /// - [`SessionError::LengthMismatch`] if the guess has the wrong size; no
    ///   attempt is consumed
    pub fn submit<P: Presenter + ?Sized>(
        &mut self,
        guess: &Word,
        presenter: &mut P,
    ) -> Result<Outcome, SessionError> {
        if self.outcome.is_terminal() {
            return Err(SessionError::Finished(self.outcome));
        }
        if guess.size() != self.secret.size() {
            return Err(SessionError::LengthMismatch {
                expected: self.secret.size(),
                actual: guess.size(),
            });
        }

        let result = score(guess, &self.secret);
        self.attempts_used += 1;
        presenter.show_guess(self.attempts_used, guess, &result);

        if result.is_perfect() {
            self.outcome = Outcome::Won;
        } else if self.attempts_used == self.attempts_allowed {
            self.outcome = Outcome::Lost;
        }

        debug!(
            "Guess {}/{} scored {}/{} -> {:?}",
            self.attempts_used,
            self.attempts_allowed,
            result.total(),
            result.max_total(),
            self.outcome
        );

        self.history.push(GuessRecord {
            guess: guess.clone(),
            result,
        });

        Ok(self.outcome)
    }

    #[inline]
    #[must_use]
    pub fn word_size(&self) -> usize {
        self.secret.size()
    }

    #[inline]
    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    #[inline]
    #[must_use]
    pub const fn attempts_allowed(&self) -> usize {
        self.attempts_allowed
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> usize {
        self.attempts_allowed - self.attempts_used
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Scored guesses so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// The secret word, once the game is lost
    ///
    /// A won game needs no reveal: the winning guess is the secret word.
    #[must_use]
    pub fn revealed_word(&self) -> Option<&Word> {
        (self.outcome == Outcome::Lost).then_some(&self.secret)
    }
}
