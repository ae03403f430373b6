//! TUI application state and logic

use crate::core::{Letter, Round};
use crate::interaction::InteractionPort;
use crate::output::formatters::{guessed_list, spaced_pattern};
use crate::protocol::HangmanError;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::warn;

/// What is shown on screen
#[derive(Debug, Clone)]
pub struct View {
    pub pattern: String,
    pub guessed: String,
    pub word_length: usize,
    pub guesses_remaining: u32,
    pub guess_budget: u32,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guess,
    Replay,
    Waiting,
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

/// What a key press means in the current input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Guess(Letter),
    Replay(bool),
    Quit,
    Ignore,
}

impl View {
    #[must_use]
    pub fn new(guess_budget: u32) -> Self {
        Self {
            pattern: String::new(),
            guessed: String::new(),
            word_length: 0,
            guesses_remaining: guess_budget,
            guess_budget,
            messages: vec![Message {
                text: "Welcome! Guess the word one letter at a time.".to_string(),
                style: MessageStyle::Info,
            }],
            input_mode: InputMode::Waiting,
        }
    }

    pub fn update(&mut self, round: &Round) {
        self.pattern = spaced_pattern(round);
        self.guessed = guessed_list(round);
        self.word_length = round.word_length();
        self.guesses_remaining = round.guesses_remaining();
    }

    /// Misses so far in the current round
    #[must_use]
    pub const fn misses(&self) -> u32 {
        self.guess_budget.saturating_sub(self.guesses_remaining)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Interpret a key press for the current input mode
    #[must_use]
    pub fn interpret_key(&self, key: KeyEvent) -> KeyAction {
        if key.kind != KeyEventKind::Press {
            return KeyAction::Ignore;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return KeyAction::Quit;
        }

        match (self.input_mode, key.code) {
            (InputMode::Guess, KeyCode::Char(c)) => {
                Letter::new(c.to_ascii_uppercase()).map_or(KeyAction::Ignore, KeyAction::Guess)
            }
            (InputMode::Replay, KeyCode::Char('y' | 'Y' | 'n' | 'N')) => {
                KeyAction::Replay(matches!(key.code, KeyCode::Char('y' | 'Y')))
            }
            (InputMode::Replay, KeyCode::Char('q') | KeyCode::Esc) => KeyAction::Replay(false),
            _ => KeyAction::Ignore,
        }
    }
}

/// Full-screen `InteractionPort`
///
/// Raw mode and the alternate screen are restored when the port is dropped.
pub struct TuiPort {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    view: View,
}

impl TuiPort {
    /// Take over the terminal
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode or the alternate screen cannot be enabled.
    pub fn enter(guess_budget: u32) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            view: View::new(guess_budget),
        })
    }

    fn draw(&mut self) {
        let view = &self.view;
        if let Err(err) = self
            .terminal
            .draw(|f| super::rendering::ui(f, view))
        {
            warn!(error = %err, "failed to draw");
        }
    }

    fn next_key(&mut self) -> Result<KeyEvent, HangmanError> {
        loop {
            match event::read() {
                Ok(Event::Key(key)) => return Ok(key),
                Ok(_) => {}
                Err(err) => return Err(HangmanError::presentation(err.to_string())),
            }
        }
    }
}

impl Drop for TuiPort {
    fn drop(&mut self) {
        // Best effort: the terminal is being handed back either way.
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

impl InteractionPort for TuiPort {
    fn elicit_guess(&mut self, round: &Round) -> Result<Letter, HangmanError> {
        self.view.input_mode = InputMode::Guess;
        self.draw();

        loop {
            let key = self.next_key()?;
            match self.view.interpret_key(key) {
                KeyAction::Guess(letter) if round.has_guessed(letter) => {
                    self.view.add_message(
                        &format!("You already guessed {letter}."),
                        MessageStyle::Error,
                    );
                    self.draw();
                }
                KeyAction::Guess(letter) => {
                    self.view.input_mode = InputMode::Waiting;
                    return Ok(letter);
                }
                KeyAction::Quit => return Err(HangmanError::presentation("interrupted")),
                KeyAction::Replay(_) | KeyAction::Ignore => {}
            }
        }
    }

    fn render(&mut self, round: &Round) {
        self.view.update(round);
        self.draw();
    }

    fn announce_word_length(&mut self, word_length: usize) {
        self.view.add_message(
            &format!("New word: {word_length} letters."),
            MessageStyle::Info,
        );
    }

    fn announce_win(&mut self) {
        self.view
            .add_message("🎉 Good job! You got it.", MessageStyle::Success);
        self.draw();
    }

    fn announce_loss(&mut self, solution: Option<&str>) {
        let text = solution.map_or_else(
            || "Out of guesses. The server did not reveal the word.".to_string(),
            |word| format!("Out of guesses. The word was {word}."),
        );
        self.view.add_message(&text, MessageStyle::Error);
        self.draw();
    }

    fn elicit_replay(&mut self) -> Result<bool, HangmanError> {
        self.view.input_mode = InputMode::Replay;
        self.draw();

        loop {
            let key = self.next_key()?;
            match self.view.interpret_key(key) {
                KeyAction::Replay(again) => {
                    self.view.input_mode = InputMode::Waiting;
                    return Ok(again);
                }
                KeyAction::Quit => return Ok(false),
                KeyAction::Guess(_) | KeyAction::Ignore => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn guess_mode_maps_letters() {
        let mut view = View::new(10);
        view.input_mode = InputMode::Guess;

        assert_eq!(
            view.interpret_key(press(KeyCode::Char('k'))),
            KeyAction::Guess(Letter::new('K').unwrap())
        );
        assert_eq!(view.interpret_key(press(KeyCode::Char('3'))), KeyAction::Ignore);
        // No mid-guess cancel
        assert_eq!(view.interpret_key(press(KeyCode::Esc)), KeyAction::Ignore);
    }

    #[test]
    fn replay_mode_maps_yes_no() {
        let mut view = View::new(10);
        view.input_mode = InputMode::Replay;

        assert_eq!(
            view.interpret_key(press(KeyCode::Char('Y'))),
            KeyAction::Replay(true)
        );
        assert_eq!(
            view.interpret_key(press(KeyCode::Char('n'))),
            KeyAction::Replay(false)
        );
        assert_eq!(
            view.interpret_key(press(KeyCode::Char('q'))),
            KeyAction::Replay(false)
        );
        assert_eq!(view.interpret_key(press(KeyCode::Char('a'))), KeyAction::Ignore);
    }

    #[test]
    fn ctrl_c_quits_in_any_mode() {
        let view = View::new(10);
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(view.interpret_key(key), KeyAction::Quit);
    }

    #[test]
    fn update_tracks_round() {
        let mut view = View::new(10);
        let mut round = Round::new(3, 10);
        round.reveal(2, Letter::new('Y').unwrap());
        round.record_guess(Letter::new('Y').unwrap());
        round.record_guess(Letter::new('Q').unwrap());
        round.charge_miss();

        view.update(&round);

        assert_eq!(view.pattern, "_ _ Y");
        assert_eq!(view.guessed, "Q Y");
        assert_eq!(view.guesses_remaining, 9);
        assert_eq!(view.misses(), 1);
    }

    #[test]
    fn messages_are_capped() {
        let mut view = View::new(10);
        for i in 0..8 {
            view.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(view.messages.len(), 5);
        assert_eq!(view.messages[4].text, "message 7");
    }
}
