//! TUI rendering with ratatui
//!
//! Two screens: the size menu and the game board.

use super::app::{App, MessageStyle, Screen};
use crate::config::WordSource;
use crate::core::LetterStatus;
use crate::game::{GameSession, Outcome};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const EXACT_COLOR: Color = Color::Rgb(106, 170, 100);
const CLOSE_COLOR: Color = Color::Rgb(201, 180, 88);
const WRONG_COLOR: Color = Color::Rgb(220, 20, 60);

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    match (app.screen, &app.session) {
        (Screen::Game, Some(session)) => render_game(f, app, session),
        _ => render_menu(f, app),
    }
}

/// Background color for a letter status
#[must_use]
pub const fn status_color(status: LetterStatus) -> Color {
    match status {
        LetterStatus::Exact => EXACT_COLOR,
        LetterStatus::Close => CLOSE_COLOR,
        LetterStatus::Wrong => WRONG_COLOR,
    }
}

fn tile(letter: char, bg: Option<Color>) -> Span<'static> {
    let style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let style = match bg {
        Some(color) => style.bg(color),
        None => style.fg(Color::DarkGray),
    };
    Span::styled(format!(" {letter} "), style)
}

fn render_header(f: &mut Frame, area: Rect, title: &str) {
    let header = Paragraph::new(title.to_string())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_menu(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(2), // Instructions
            Constraint::Min(7),    // Menu entries
            Constraint::Length(7), // Messages
        ])
        .split(f.area());

    render_header(f, chunks[0], "WORDLE");

    let instructions = Paragraph::new("Pick a word size (↑/↓ and Enter, or press 5-8)")
        .alignment(Alignment::Center);
    f.render_widget(instructions, chunks[1]);

    let entries: Vec<ListItem> = WordSource::sizes()
        .map(|size| format!("{size} letters"))
        .chain(std::iter::once("Quit".to_string()))
        .enumerate()
        .map(|(i, label)| {
            let style = if i == app.menu_index {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            ListItem::new(Line::from(format!("  {label}  ")).alignment(Alignment::Center))
                .style(style)
        })
        .collect();

    let menu = List::new(entries).block(
        Block::default()
            .title(" Word Size ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(menu, chunks[2]);

    render_messages(f, app, chunks[3]);
}

fn render_game(f: &mut Frame, app: &App, session: &GameSession) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and messages
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(
        f,
        chunks[0],
        &format!("WORDLE - {} letters", session.word_size()),
    );

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Guess log
            Constraint::Percentage(40), // Messages
        ])
        .split(chunks[1]);

    render_board(f, app, session, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_input(f, app, session, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_board(f: &mut Frame, app: &App, session: &GameSession, area: Rect) {
    let size = session.word_size();
    let mut lines = Vec::with_capacity(session.attempts_allowed() + 2);

    lines.push(Line::from(format!(
        "Guesses left: {}",
        session.attempts_remaining()
    )));
    lines.push(Line::from(""));

    for record in session.history() {
        let tiles: Vec<Span> = record
            .guess
            .chars()
            .iter()
            .zip(record.result.statuses())
            .map(|(&letter, &status)| {
                tile(
                    char::from(letter.to_ascii_uppercase()),
                    Some(status_color(status)),
                )
            })
            .collect();
        lines.push(Line::from(tiles).alignment(Alignment::Center));
    }

    for row in session.history().len()..session.attempts_allowed() {
        let typed: Vec<char> = if row == session.history().len() && !session.is_over() {
            app.input_buffer.chars().collect()
        } else {
            Vec::new()
        };
        let tiles: Vec<Span> = (0..size)
            .map(|i| typed.get(i).map_or_else(|| tile('·', None), |&c| tile(c, None)))
            .collect();
        lines.push(Line::from(tiles).alignment(Alignment::Center));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, session: &GameSession, area: Rect) {
    let (title, color) = match session.outcome() {
        Outcome::Won => (" You won! | Ctrl-R: new word | Esc: menu ", Color::Green),
        Outcome::Lost => (" Out of guesses | Ctrl-R: new word | Esc: menu ", Color::Red),
        Outcome::InProgress => (" Type your guess and press Enter ", Color::Yellow),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.games_played,
        app.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help = Paragraph::new("Enter: Submit | Ctrl-R: Reset | Esc: Menu | Ctrl-C: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
