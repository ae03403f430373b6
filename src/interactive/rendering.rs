//! TUI rendering with ratatui
//!
//! Gallows, word board and status panels for the hangman interface.

use super::app::{InputMode, MessageStyle, View};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Gallows drawings, from empty to fully hanged
const GALLOWS: [[&str; 6]; 7] = [
    ["  +---+", "  |   |", "      |", "      |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", "      |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", "  |   |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|   |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", " /    |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", " / \\  |", "========="],
];

/// Gallows stage for `misses` out of `budget`, scaled to the drawings
#[must_use]
pub fn gallows_stage(misses: u32, budget: u32) -> usize {
    let last = GALLOWS.len() - 1;
    if budget == 0 {
        return last;
    }
    ((misses.min(budget) as usize) * last).div_ceil(budget as usize)
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, view: &View) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, view, main_chunks[0]);
    render_info_panel(f, view, main_chunks[1]);

    render_input(f, view, chunks[2]);
    render_status(f, view, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HANGMAN")
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

fn render_board(f: &mut Frame, view: &View, area: Rect) {
    let stage = gallows_stage(view.misses(), view.guess_budget);

    let mut lines: Vec<Line> = GALLOWS[stage]
        .iter()
        .map(|row| Line::styled(*row, Style::default().fg(Color::Gray)))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        view.pattern.clone(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Guessed: "),
        Span::styled(view.guessed.clone(), Style::default().fg(Color::Cyan)),
    ]));

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Word ({} letters) ", view.word_length))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, view: &View, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    render_guess_gauge(f, view, chunks[0]);
    render_messages(f, view, chunks[1]);
}

fn render_guess_gauge(f: &mut Frame, view: &View, area: Rect) {
    let percent = if view.guess_budget == 0 {
        0
    } else {
        (u64::from(view.guesses_remaining) * 100 / u64::from(view.guess_budget)).min(100) as u16
    };
    let color = if view.guesses_remaining > 2 {
        Color::Green
    } else {
        Color::Red
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses Remaining ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{}/{}", view.guesses_remaining, view.guess_budget));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, view: &View, area: Rect) {
    let messages: Vec<ListItem> = view
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

fn render_input(f: &mut Frame, view: &View, area: Rect) {
    let (title, color) = match view.input_mode {
        InputMode::Guess => (" Press a letter to guess ", Color::Yellow),
        InputMode::Replay => (" Play again? y / n ", Color::Green),
        InputMode::Waiting => (" Waiting for server... ", Color::DarkGray),
    };

    let input = Paragraph::new("").block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, view: &View, area: Rect) {
    let help = match view.input_mode {
        InputMode::Guess => "A-Z: guess | Ctrl-C: abort",
        InputMode::Replay => "y: new word | n/q/Esc: finish",
        InputMode::Waiting => "Ctrl-C: abort",
    };
    let status = Paragraph::new(format!("Misses: {} | {help}", view.misses()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
