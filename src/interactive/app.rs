//! TUI application state and logic

use crate::config::WordSource;
use crate::core::{ScoreResult, Word};
use crate::game::{GameSession, Outcome, Presenter};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Number of entries in the main menu: one per word size, then Quit
pub const MENU_ITEMS: usize = 5;

/// Application state
pub struct App {
    pub source: WordSource,
    pub screen: Screen,
    pub menu_index: usize,
    pub session: Option<GameSession>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Game,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
}

/// Announces scored guesses in the message panel
struct MessageLog<'a> {
    messages: &'a mut Vec<Message>,
}

impl Presenter for MessageLog<'_> {
    fn show_guess(&mut self, turn: usize, guess: &Word, result: &ScoreResult) {
        push_message(
            self.messages,
            &format!(
                "Guess {turn}: {} {}",
                guess.text().to_uppercase(),
                result.to_emoji()
            ),
            MessageStyle::Info,
        );
    }
}

fn push_message(messages: &mut Vec<Message>, text: &str, style: MessageStyle) {
    messages.push(Message {
        text: text.to_string(),
        style,
    });

    // Keep only last 5 messages
    if messages.len() > 5 {
        messages.remove(0);
    }
}

impl App {
    #[must_use]
    pub fn new(source: WordSource) -> Self {
        Self {
            source,
            screen: Screen::Menu,
            menu_index: 0,
            session: None,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Word size of the current game, or of the highlighted menu entry
    #[must_use]
    pub fn word_size(&self) -> usize {
        self.session.as_ref().map_or_else(
            || WordSource::sizes().nth(self.menu_index).unwrap_or(0),
            GameSession::word_size,
        )
    }

    /// Start a game with a fresh secret word of `size` letters
    ///
    /// A word list that fails to load leaves the app on the menu with an
    /// error message.
    pub fn start_game(&mut self, size: usize) {
        match self.source.load(size) {
            Ok(list) => self.start_session(GameSession::random(&list, &mut rand::rng())),
            Err(e) => {
                self.add_message(&format!("Error: {e}"), MessageStyle::Error);
                self.screen = Screen::Menu;
            }
        }
    }

    /// Switch to the game screen for an already drawn session
    pub fn start_session(&mut self, session: GameSession) {
        info!("Started {}-letter TUI game", session.word_size());
        self.messages.clear();
        self.add_message(
            &format!(
                "You have {} tries to guess the {}-letter word",
                session.attempts_allowed(),
                session.word_size()
            ),
            MessageStyle::Info,
        );
        self.session = Some(session);
        self.input_buffer.clear();
        self.screen = Screen::Game;
    }

    /// Start over with a new word of the same size
    pub fn reset_game(&mut self) {
        if let Some(size) = self.session.as_ref().map(GameSession::word_size) {
            self.start_game(size);
        }
    }

    pub fn back_to_menu(&mut self) {
        self.session = None;
        self.input_buffer.clear();
        self.screen = Screen::Menu;
    }

    /// Activate the highlighted menu entry
    pub fn select_menu_item(&mut self) {
        match WordSource::sizes().nth(self.menu_index) {
            Some(size) => self.start_game(size),
            None => self.should_quit = true,
        }
    }

    pub fn push_char(&mut self, c: char) {
        let Some(session) = &self.session else {
            return;
        };
        if !session.is_over()
            && c.is_ascii_alphabetic()
            && self.input_buffer.len() < session.word_size()
        {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    /// Score the typed guess
    pub fn submit_guess(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.is_over() {
            self.add_message("Game over! Ctrl-R for a new word, Esc for menu.", MessageStyle::Info);
            return;
        }

        let size = session.word_size();
        let guess = match Word::with_size(self.input_buffer.as_str(), size) {
            Ok(word) => word,
            Err(_) => {
                self.add_message(
                    &format!("Guess must be {size} letters!"),
                    MessageStyle::Error,
                );
                return;
            }
        };

        if session.history().iter().any(|record| record.guess == guess) {
            self.input_buffer.clear();
            self.add_message(
                &format!("You have already guessed '{}'.", guess.text().to_uppercase()),
                MessageStyle::Error,
            );
            return;
        }

        let mut log = MessageLog {
            messages: &mut self.messages,
        };
        let outcome = match session.submit(&guess, &mut log) {
            Ok(outcome) => outcome,
            Err(e) => {
                push_message(&mut self.messages, &e.to_string(), MessageStyle::Error);
                return;
            }
        };
        self.input_buffer.clear();

        match outcome {
            Outcome::Won => {
                let used = session.attempts_used();
                self.stats.games_played += 1;
                self.stats.games_won += 1;
                self.add_message(
                    &format!("You won in {used}! Ctrl-R for a new word."),
                    MessageStyle::Success,
                );
            }
            Outcome::Lost => {
                let reveal = session
                    .revealed_word()
                    .map(|w| w.text().to_uppercase())
                    .unwrap_or_default();
                self.stats.games_played += 1;
                self.add_message(&format!("The word was {reveal}."), MessageStyle::Error);
            }
            Outcome::InProgress => {}
        }
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Menu => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.menu_index = (self.menu_index + MENU_ITEMS - 1) % MENU_ITEMS;
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.menu_index = (self.menu_index + 1) % MENU_ITEMS;
                }
                KeyCode::Char(c @ '5'..='8') => {
                    self.menu_index = c as usize - '5' as usize;
                    self.select_menu_item();
                }
                KeyCode::Enter => self.select_menu_item(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            Screen::Game => match key.code {
                KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.reset_game();
                }
                KeyCode::Esc => self.back_to_menu(),
                KeyCode::Char(c)
                    if key.modifiers == KeyModifiers::NONE
                        || key.modifiers == KeyModifiers::SHIFT =>
                {
                    self.push_char(c);
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        push_message(&mut self.messages, text, style);
    }

    /// Win rate over finished games, in percent
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.stats.games_played == 0 {
            0.0
        } else {
            self.stats.games_won as f64 / self.stats.games_played as f64 * 100.0
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            debug!("Key {:?} on {:?}", key.code, app.screen);
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
