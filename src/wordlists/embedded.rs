//! Embedded word lists
//!
//! Word lists compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));

/// Embedded secret words for a word size, if that size is supported
#[must_use]
pub fn embedded_words(size: usize) -> Option<&'static [&'static str]> {
    match size {
        5 => Some(WORDS_5),
        6 => Some(WORDS_6),
        7 => Some(WORDS_7),
        8 => Some(WORDS_8),
        _ => None,
    }
}
