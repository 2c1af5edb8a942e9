//! Per-letter feedback status

/// Feedback for one letter of a guess
///
/// The discriminant is the letter's contribution to a guess's total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LetterStatus {
    /// Letter does not match any unconsumed occurrence in the secret word
    Wrong = 0,
    /// Letter is in the secret word, but at another position
    Close = 1,
    /// Letter matches the secret word at this position
    Exact = 2,
}

impl LetterStatus {
    /// Score contribution of this status (EXACT=2, CLOSE=1, WRONG=0)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self as u32
    }

    /// Emoji square for this status
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Close => '🟨',
            Self::Wrong => '🟥',
        }
    }
}
