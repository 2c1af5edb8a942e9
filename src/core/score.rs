//! Guess scoring
//!
//! Compares a guess with the secret word and produces per-letter feedback:
//! - `Exact` (2): letter in the correct position
//! - `Close` (1): letter elsewhere in the word, bounded by how often it occurs
//! - `Wrong` (0): no unconsumed occurrence left
//!
//! The total score is the sum of the per-letter values, so a solved guess
//! scores exactly twice the word size.

use super::{LetterStatus, Word};

/// Feedback for one guess: a status per position plus the total score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    statuses: Vec<LetterStatus>,
    total: u32,
}

impl ScoreResult {
    /// Per-position statuses, in guess order
    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.statuses
    }

    /// Sum of status values
    #[inline]
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    /// Highest total reachable for this word size
    #[inline]
    #[must_use]
    pub fn max_total(&self) -> u32 {
        LetterStatus::Exact.value() * self.statuses.len() as u32
    }

    /// Check if every letter is exact (the guess is the secret word)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.total == self.max_total()
    }

    /// Count positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.statuses.iter().filter(|&&s| s == status).count()
    }

    /// Render the statuses as a row of emoji squares
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.statuses.iter().map(|s| s.to_emoji()).collect()
    }
}

/// Score `guess` against `secret`
///
/// # Algorithm
/// 1. Count every letter of the secret word
/// 2. First pass: mark exact matches and take them out of the count
/// 3. Second pass: in guess order, mark a letter close while its count lasts,
///    wrong otherwise
///
/// Exact matches always claim a letter before any close match does, and
/// earlier positions win when a repeated guess letter outnumbers the secret's.
///
/// # Panics
/// Panics if the words differ in size. Callers are expected to check sizes
/// first; [`crate::game::GameSession::submit`] does.
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterStatus, Word, score};
///
/// let secret = Word::new("apple").unwrap();
/// let guess = Word::new("alert").unwrap();
/// let result = score(&guess, &secret);
///
/// assert_eq!(result.statuses()[0], LetterStatus::Exact);
/// assert_eq!(result.total(), 4);
/// ```
#[must_use]
pub fn score(guess: &Word, secret: &Word) -> ScoreResult {
    assert_eq!(
        guess.size(),
        secret.size(),
        "guess and secret word must have the same size"
    );

    let guess_chars = guess.chars();
    let secret_chars = secret.chars();
    let mut statuses = vec![LetterStatus::Wrong; guess.size()];
    let mut available = secret.char_counts();

    // First pass: exact matches
    for (i, (&g, &s)) in guess_chars.iter().zip(secret_chars).enumerate() {
        if g == s {
            statuses[i] = LetterStatus::Exact;
            if let Some(count) = available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: close matches from what is left
    for (status, &letter) in statuses.iter_mut().zip(guess_chars) {
        if *status == LetterStatus::Exact {
            continue;
        }
        if let Some(count) = available.get_mut(&letter)
            && *count > 0
        {
            *status = LetterStatus::Close;
            *count -= 1;
        }
    }

    let total = statuses.iter().map(|s| s.value()).sum();

    ScoreResult { statuses, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Close, Exact, Wrong};

    fn score_str(guess: &str, secret: &str) -> ScoreResult {
        score(&Word::new(guess).unwrap(), &Word::new(secret).unwrap())
    }

    #[test]
    fn identical_words_are_perfect() {
        for text in ["crane", "speed", "aaaaa", "planet", "kitchen", "absolute"] {
            let result = score_str(text, text);
            assert!(result.statuses().iter().all(|&s| s == Exact));
            assert_eq!(result.total(), 2 * text.len() as u32);
            assert!(result.is_perfect());
        }
    }

    #[test]
    fn apple_alert() {
        let result = score_str("alert", "apple");
        assert_eq!(result.statuses(), &[Exact, Close, Close, Wrong, Wrong]);
        assert_eq!(result.total(), 4);
        assert!(!result.is_perfect());
    }

    #[test]
    fn speed_erase_limits_duplicate_e() {
        let result = score_str("erase", "speed");
        assert_eq!(result.statuses(), &[Close, Wrong, Wrong, Close, Close]);
        assert_eq!(result.total(), 3);
    }

    #[test]
    fn repeated_guess_letter_credited_once() {
        // APPLE has a single L; only the first L of the guess gets it
        let result = score_str("llama", "apple");
        assert_eq!(result.statuses(), &[Close, Wrong, Close, Wrong, Wrong]);
        assert_eq!(result.total(), 2);
    }

    #[test]
    fn exact_match_claims_letter_before_close() {
        // The second P is exact, the first P then takes the remaining P
        let result = score_str("pplea", "apple");
        assert_eq!(result.statuses(), &[Close, Exact, Close, Close, Close]);
        assert_eq!(result.total(), 6);

        // The exact E at the end leaves nothing for the earlier E's
        let result = score_str("eeeee", "apple");
        assert_eq!(result.statuses(), &[Wrong, Wrong, Wrong, Wrong, Exact]);
        assert_eq!(result.total(), 2);
    }

    #[test]
    fn absent_letters_are_wrong() {
        let result = score_str("fghij", "abcde");
        assert_eq!(result.statuses(), &[Wrong; 5]);
        assert_eq!(result.total(), 0);
    }

    #[test]
    fn duplicate_letters_complex() {
        // ROBOT vs FLOOR: first O close, second O exact, R close
        let result = score_str("robot", "floor");
        assert_eq!(result.statuses(), &[Close, Close, Wrong, Exact, Wrong]);
        assert_eq!(result.total(), 4);
    }

    #[test]
    fn longer_words() {
        let result = score_str("absolute", "obsolete");
        assert_eq!(
            result.statuses(),
            &[Wrong, Exact, Exact, Exact, Exact, Wrong, Exact, Exact]
        );
        assert_eq!(result.total(), 12);
    }

    #[test]
    fn case_does_not_matter() {
        assert_eq!(score_str("ALERT", "apple"), score_str("alert", "APPLE"));
    }

    #[test]
    fn status_counts_sum_to_size() {
        let pairs = [
            ("erase", "speed"),
            ("llama", "apple"),
            ("planet", "planes"),
            ("kitchen", "chicken"),
            ("absolute", "obsolete"),
        ];
        for (guess, secret) in pairs {
            let result = score_str(guess, secret);
            let counted = result.count(Exact) + result.count(Close) + result.count(Wrong);
            assert_eq!(counted, guess.len());
        }
    }

    #[test]
    fn perfect_only_when_equal() {
        let pairs = [("planet", "planes"), ("kitchen", "chicken"), ("crane", "caner")];
        for (guess, secret) in pairs {
            let result = score_str(guess, secret);
            assert!(!result.is_perfect());
            assert!(result.total() < result.max_total());
        }
    }

    #[test]
    fn scoring_is_idempotent() {
        let guess = Word::new("erase").unwrap();
        let secret = Word::new("speed").unwrap();
        assert_eq!(score(&guess, &secret), score(&guess, &secret));
    }

    #[test]
    fn emoji_row() {
        let result = score_str("alert", "apple");
        assert_eq!(result.to_emoji(), "🟩🟨🟨🟥🟥");
    }

    #[test]
    #[should_panic(expected = "same size")]
    fn mismatched_sizes_panic() {
        let _ = score_str("crane", "planet");
    }
}
