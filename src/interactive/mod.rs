//! Interactive front-ends: line input and the full-screen TUI

mod app;
pub mod input;
mod rendering;

pub use app::{App, Message, MessageStyle, Screen, Statistics, run_tui};
pub use rendering::status_color;
