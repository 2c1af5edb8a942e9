//! Wordle Game
//!
//! A terminal Wordle with 5 to 8 letter words and one more try than the word
//! has letters.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Word, score};
//!
//! let secret = Word::new("speed").unwrap();
//! let guess = Word::new("erase").unwrap();
//!
//! let result = score(&guess, &secret);
//! assert_eq!(result.total(), 3);
//! println!("{}", result.to_emoji());
//! ```

// Core domain types and scoring
pub mod core;

// Turn state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Command-line configuration
pub mod config;

// Logger setup
pub mod logging;

// Terminal output formatting
pub mod output;

// Line input and the interactive TUI
pub mod interactive;
