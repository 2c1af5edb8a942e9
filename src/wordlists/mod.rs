//! Word lists for secret word selection
//!
//! One list per word size. Lists come either from the embedded data compiled
//! into the binary or from `<size>.txt` files on disk.

mod embedded;
pub mod loader;

pub use embedded::{WORDS_5, WORDS_6, WORDS_7, WORDS_8, embedded_words};

use crate::core::{MAX_WORD_SIZE, MIN_WORD_SIZE, Word};
use rand::Rng;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Maximum number of words kept from any list
pub const LIST_SIZE: usize = 1000;

/// Errors from building or loading a word list
#[derive(Debug)]
pub enum LoadError {
    /// The word list file could not be read
    Io { path: PathBuf, source: io::Error },
    /// Word size outside 5..=8
    UnsupportedSize(usize),
    /// No usable words of the requested size
    Empty { size: usize },
    /// A word of another size was handed to the list
    MixedSizes { expected: usize, actual: usize },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, .. } => write!(f, "Error opening file {}", path.display()),
            Self::UnsupportedSize(size) => write!(
                f,
                "wordsize must be between {MIN_WORD_SIZE} and {MAX_WORD_SIZE}, got {size}"
            ),
            Self::Empty { size } => write!(f, "No {size}-letter words found in word list"),
            Self::MixedSizes { expected, actual } => write!(
                f,
                "Word list for {expected}-letter words contains a {actual}-letter word"
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A non-empty list of secret words, all of one size
#[derive(Debug, Clone)]
pub struct WordList {
    size: usize,
    words: Vec<Word>,
}

impl WordList {
    /// Build a list from words of exactly `size` letters
    ///
    /// Only the first [`LIST_SIZE`] words are kept.
    ///
    /// # Errors
    /// Returns `LoadError` if the size is unsupported, the list is empty, or
    /// any word has another size.
    pub fn new(size: usize, mut words: Vec<Word>) -> Result<Self, LoadError> {
        check_size(size)?;

        if let Some(word) = words.iter().find(|w| w.size() != size) {
            return Err(LoadError::MixedSizes {
                expected: size,
                actual: word.size(),
            });
        }
        if words.is_empty() {
            return Err(LoadError::Empty { size });
        }

        words.truncate(LIST_SIZE);
        Ok(Self { size, words })
    }

    /// The list compiled into the binary for `size`
    ///
    /// # Errors
    /// Returns `LoadError::UnsupportedSize` for sizes outside 5..=8.
    pub fn embedded(size: usize) -> Result<Self, LoadError> {
        let slice = embedded_words(size).ok_or(LoadError::UnsupportedSize(size))?;
        Self::new(size, loader::words_from_slice(slice, size))
    }

    /// Word size shared by every word in the list
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of words in the list
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Draw one word uniformly at random
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }
}

/// Check that a word size is playable
///
/// # Errors
/// Returns `LoadError::UnsupportedSize` for sizes outside 5..=8.
pub fn check_size(size: usize) -> Result<(), LoadError> {
    if (MIN_WORD_SIZE..=MAX_WORD_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(LoadError::UnsupportedSize(size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn embedded_lists_have_right_sizes() {
        for (size, list) in [(5, WORDS_5), (6, WORDS_6), (7, WORDS_7), (8, WORDS_8)] {
            assert_eq!(list.len(), LIST_SIZE);
            for &word in list {
                assert_eq!(word.len(), size, "Word '{word}' is not {size} letters");
                assert!(
                    word.chars().all(|c| c.is_ascii_lowercase()),
                    "Word '{word}' contains non-lowercase chars"
                );
            }
        }
    }

    #[test]
    fn embedded_word_list_loads() {
        for size in MIN_WORD_SIZE..=MAX_WORD_SIZE {
            let list = WordList::embedded(size).unwrap();
            assert_eq!(list.size(), size);
            assert_eq!(list.count(), embedded_words(size).unwrap().len());
        }
    }

    #[test]
    fn embedded_rejects_unsupported_size() {
        assert!(matches!(
            WordList::embedded(4),
            Err(LoadError::UnsupportedSize(4))
        ));
        assert!(matches!(
            WordList::embedded(9),
            Err(LoadError::UnsupportedSize(9))
        ));
    }

    #[test]
    fn new_rejects_empty_list() {
        assert!(matches!(
            WordList::new(5, Vec::new()),
            Err(LoadError::Empty { size: 5 })
        ));
    }

    #[test]
    fn new_rejects_mixed_sizes() {
        assert!(matches!(
            WordList::new(5, words(&["crane", "planet"])),
            Err(LoadError::MixedSizes {
                expected: 5,
                actual: 6
            })
        ));
    }

    #[test]
    fn new_caps_list_size() {
        let many = vec![Word::new("crane").unwrap(); LIST_SIZE + 10];
        let list = WordList::new(5, many).unwrap();
        assert_eq!(list.count(), LIST_SIZE);
    }

    #[test]
    fn random_word_covers_list() {
        let list = WordList::new(5, words(&["crane", "slate", "irate"])).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            seen.insert(list.random_word(&mut rng).text().to_string());
        }

        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn check_size_bounds() {
        assert!(check_size(4).is_err());
        assert!(check_size(5).is_ok());
        assert!(check_size(8).is_ok());
        assert!(check_size(9).is_err());
    }
}
