//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::{LIST_SIZE, LoadError, WordList, check_size};
use crate::core::Word;
use log::{info, warn};
use std::fs;
use std::path::Path;

/// Load the `<size>.txt` list from a directory
///
/// # Errors
///
/// Returns `LoadError` if the size is unsupported, the file cannot be read,
/// or it holds no usable words.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_dir;
///
/// let list = load_from_dir("words", 6).unwrap();
/// println!("Loaded {} words", list.count());
/// ```
pub fn load_from_dir<P: AsRef<Path>>(dir: P, size: usize) -> Result<WordList, LoadError> {
    check_size(size)?;
    load_from_file(dir.as_ref().join(format!("{size}.txt")), size)
}

/// Load a list of `size`-letter words from a file
///
/// Blank lines are ignored and malformed entries are skipped with a warning.
/// At most [`LIST_SIZE`] words are read.
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read or holds no usable words.
pub fn load_from_file<P: AsRef<Path>>(path: P, size: usize) -> Result<WordList, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_words(&content, size);
    info!("Loaded {} {size}-letter words from {}", words.len(), path.display());

    WordList::new(size, words)
}

/// Parse newline-separated words, keeping those with exactly `size` letters
#[must_use]
pub fn parse_words(content: &str, size: usize) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Word::with_size(line, size) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!("Skipping word list entry '{line}': {e}");
                None
            }
        })
        .take(LIST_SIZE)
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::WORDS_5;
///
/// let words = words_from_slice(WORDS_5, 5);
/// assert_eq!(words.len(), WORDS_5.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], size: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::with_size(s, size).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "wordle_game_loader_{name}_{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"], 5);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "planet", "abc", "sl4te", "slate"], 5);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn parse_words_trims_and_normalizes() {
        let words = parse_words("  Planet \n\n\r\nGARDEN\r\nbad\n", 6);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "planet");
        assert_eq!(words[1].text(), "garden");
    }

    #[test]
    fn parse_words_stops_at_list_size() {
        let content = "crane\n".repeat(LIST_SIZE + 5);
        assert_eq!(parse_words(&content, 5).len(), LIST_SIZE);
    }

    #[test]
    fn load_from_dir_reads_size_file() {
        let dir = temp_dir("dir");
        fs::write(dir.join("7.txt"), "kitchen\nweather\n").unwrap();

        let list = load_from_dir(&dir, 7).unwrap();

        assert_eq!(list.size(), 7);
        assert_eq!(list.count(), 2);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn load_from_dir_missing_file() {
        let dir = temp_dir("missing");

        let err = load_from_dir(&dir, 8).unwrap_err();

        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("8.txt"));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn load_from_dir_unsupported_size() {
        let err = load_from_dir(".", 9).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedSize(9)));
    }

    #[test]
    fn load_from_file_without_usable_words() {
        let dir = temp_dir("empty");
        let path = dir.join("5.txt");
        fs::write(&path, "toolong\nabc\n").unwrap();

        let err = load_from_file(&path, 5).unwrap_err();

        assert!(matches!(err, LoadError::Empty { size: 5 }));
        fs::remove_dir_all(dir).ok();
    }
}
