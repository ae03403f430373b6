//! Hangman session logic
//!
//! This module contains the round state machine and the replay loop that
//! drives it over one connection.

mod config;
mod controller;
mod game;

pub use config::{
    DEFAULT_GUESS_BUDGET, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_PREAMBLE_LINES, SessionConfig,
};
pub use controller::{RoundController, SessionHistory, SessionStats};
pub use game::GameSession;
