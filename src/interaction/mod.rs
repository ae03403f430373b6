//! Player-facing side of a hangman session
//!
//! The session never talks to a terminal directly. It drives an
//! `InteractionPort`, and each frontend (text console, full-screen TUI,
//! scripted test harness) implements the same small set of hooks.

mod scripted;
mod text;

pub use scripted::{PortEvent, ScriptedPort};
pub use text::TextConsole;

use crate::core::{Letter, Round};
use crate::protocol::HangmanError;

/// Hooks a frontend provides to play hangman
pub trait InteractionPort {
    /// Block until the player picks a letter
    ///
    /// Implementations normalize case and reprompt on bad input; they only
    /// fail when no input can be obtained at all.
    ///
    /// # Errors
    /// Returns `HangmanError::Presentation` if the input source is gone.
    fn elicit_guess(&mut self, round: &Round) -> Result<Letter, HangmanError>;

    /// Show the current state of the round
    fn render(&mut self, round: &Round);

    /// Tell the player how long the new word is
    fn announce_word_length(&mut self, _word_length: usize) {}

    /// The player revealed every letter
    fn announce_win(&mut self);

    /// The player ran out of guesses; `solution` is absent if the server
    /// did not supply it
    fn announce_loss(&mut self, solution: Option<&str>);

    /// Block until the player decides whether to play another round
    ///
    /// # Errors
    /// Returns `HangmanError::Presentation` if the input source is gone.
    fn elicit_replay(&mut self) -> Result<bool, HangmanError>;
}

impl<P: InteractionPort + ?Sized> InteractionPort for &mut P {
    fn elicit_guess(&mut self, round: &Round) -> Result<Letter, HangmanError> {
        (**self).elicit_guess(round)
    }

    fn render(&mut self, round: &Round) {
        (**self).render(round);
    }

    fn announce_word_length(&mut self, word_length: usize) {
        (**self).announce_word_length(word_length);
    }

    fn announce_win(&mut self) {
        (**self).announce_win();
    }

    fn announce_loss(&mut self, solution: Option<&str>) {
        (**self).announce_loss(solution);
    }

    fn elicit_replay(&mut self) -> Result<bool, HangmanError> {
        (**self).elicit_replay()
    }
}
