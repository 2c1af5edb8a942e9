//! Terminal output formatting
//!
//! Display utilities for line-mode games and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{LinePresenter, write_intro, write_outcome};
