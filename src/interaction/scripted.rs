//! Scripted interaction port
//!
//! Plays a fixed list of guesses and replay answers and records everything
//! the session shows it. Useful for tests and for driving the client from
//! another program.

use super::InteractionPort;
use crate::core::{Letter, Round};
use crate::protocol::HangmanError;
use std::collections::VecDeque;

/// What the session showed a `ScriptedPort`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortEvent {
    WordLength(usize),
    Render { pattern: String, remaining: u32 },
    Win,
    Loss(Option<String>),
}

/// `InteractionPort` backed by pre-recorded answers
#[derive(Debug, Default)]
pub struct ScriptedPort {
    guesses: VecDeque<Letter>,
    replays: VecDeque<bool>,
    events: Vec<PortEvent>,
}

impl ScriptedPort {
    /// Build a port from guess letters and replay answers
    ///
    /// Characters that are not letters are skipped; lowercase is folded.
    #[must_use]
    pub fn new(guesses: &str, replays: &[bool]) -> Self {
        Self {
            guesses: guesses
                .chars()
                .filter_map(|c| Letter::new(c.to_ascii_uppercase()).ok())
                .collect(),
            replays: replays.iter().copied().collect(),
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn events(&self) -> &[PortEvent] {
        &self.events
    }

    /// Guesses not yet handed to the session
    #[must_use]
    pub fn pending_guesses(&self) -> usize {
        self.guesses.len()
    }

    /// The last state rendered, if any
    #[must_use]
    pub fn last_render(&self) -> Option<(&str, u32)> {
        self.events.iter().rev().find_map(|event| match event {
            PortEvent::Render { pattern, remaining } => Some((pattern.as_str(), *remaining)),
            _ => None,
        })
    }
}

impl InteractionPort for ScriptedPort {
    fn elicit_guess(&mut self, _round: &Round) -> Result<Letter, HangmanError> {
        self.guesses
            .pop_front()
            .ok_or_else(|| HangmanError::presentation("script has no more guesses"))
    }

    fn render(&mut self, round: &Round) {
        self.events.push(PortEvent::Render {
            pattern: round.pattern(),
            remaining: round.guesses_remaining(),
        });
    }

    fn announce_word_length(&mut self, word_length: usize) {
        self.events.push(PortEvent::WordLength(word_length));
    }

    fn announce_win(&mut self) {
        self.events.push(PortEvent::Win);
    }

    fn announce_loss(&mut self, solution: Option<&str>) {
        self.events.push(PortEvent::Loss(solution.map(str::to_string)));
    }

    fn elicit_replay(&mut self) -> Result<bool, HangmanError> {
        Ok(self.replays.pop_front().unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guesses_are_normalized() {
        let mut port = ScriptedPort::new("a-e z", &[]);
        let round = Round::new(3, 10);
        assert_eq!(port.pending_guesses(), 3);
        assert_eq!(port.elicit_guess(&round).unwrap().as_char(), 'A');
        assert_eq!(port.elicit_guess(&round).unwrap().as_char(), 'E');
        assert_eq!(port.elicit_guess(&round).unwrap().as_char(), 'Z');
        assert!(port.elicit_guess(&round).is_err());
    }

    #[test]
    fn replays_default_to_no() {
        let mut port = ScriptedPort::new("", &[true]);
        assert!(port.elicit_replay().unwrap());
        assert!(!port.elicit_replay().unwrap());
    }

    #[test]
    fn records_renders() {
        let mut port = ScriptedPort::new("", &[]);
        assert_eq!(port.last_render(), None);
        port.render(&Round::new(4, 7));
        port.announce_loss(None);
        assert_eq!(port.last_render(), Some(("____", 7)));
        assert_eq!(port.events().last(), Some(&PortEvent::Loss(None)));
    }
}
