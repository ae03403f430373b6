//! Hangman line protocol
//!
//! Wire commands, reply parsing, the line transport and the error type
//! shared by the whole crate.

mod channel;
mod command;
mod error;

#[cfg(test)]
pub(crate) use channel::ScriptedChannel;
pub use channel::{LineChannel, TcpLineChannel};
pub use command::{Command, MAX_WORD_LENGTH, parse_match_token, parse_word_length};
pub use error::{ErrorKind, HangmanError};
