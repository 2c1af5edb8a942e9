//! Game session and turn state machine

mod session;

pub use session::{GameSession, GuessRecord, Outcome, Presenter, SessionError};
