//! Core domain types for hangman
//!
//! This module contains the round state with zero I/O. Everything here can
//! be exercised without a server or a player.

mod letter;
mod round;

pub use letter::{Letter, NotALetter};
pub use round::{GuessOutcome, HIDDEN_MARKER, Outcome, Round, Slot};
