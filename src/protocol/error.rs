//! Error types for the hangman client

use derive_more::{Display, Error};
use std::io;

/// Coarse classification of a `HangmanError`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The channel could not be opened
    Connection,
    /// The server's replies did not follow the line protocol
    Protocol,
    /// The player-facing port could not produce input
    Presentation,
}

/// Everything that can end a hangman session early
#[derive(Debug, Display, Error)]
pub enum HangmanError {
    #[display("cannot connect to {addr}: {source}")]
    Connection { addr: String, source: io::Error },

    #[display("connection closed while waiting for {expected}")]
    ChannelClosed { expected: &'static str },

    #[display("transport failure: {source}")]
    Transport { source: io::Error },

    #[display("malformed {what} from server: {line:?}")]
    Malformed { what: &'static str, line: String },

    #[display("input unavailable: {message}")]
    Presentation { message: String },
}

impl HangmanError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Connection { .. } => ErrorKind::Connection,
            Self::ChannelClosed { .. } | Self::Transport { .. } | Self::Malformed { .. } => {
                ErrorKind::Protocol
            }
            Self::Presentation { .. } => ErrorKind::Presentation,
        }
    }

    pub(crate) fn presentation(message: impl Into<String>) -> Self {
        Self::Presentation {
            message: message.into(),
        }
    }
}

impl From<io::Error> for HangmanError {
    fn from(source: io::Error) -> Self {
        Self::Transport { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn kinds_group_protocol_failures() {
        let closed = HangmanError::ChannelClosed {
            expected: "word length",
        };
        let malformed = HangmanError::Malformed {
            what: "word length",
            line: "abc".to_string(),
        };
        let io_err: HangmanError = io::Error::other("reset").into();

        assert_eq!(closed.kind(), ErrorKind::Protocol);
        assert_eq!(malformed.kind(), ErrorKind::Protocol);
        assert_eq!(io_err.kind(), ErrorKind::Protocol);
        assert_eq!(
            HangmanError::presentation("stdin closed").kind(),
            ErrorKind::Presentation
        );
    }

    #[test]
    fn display_names_the_bad_line() {
        let err = HangmanError::Malformed {
            what: "word length",
            line: "five".to_string(),
        };
        assert_eq!(err.to_string(), "malformed word length from server: \"five\"");
    }

    #[test]
    fn connection_error_keeps_source() {
        let err = HangmanError::Connection {
            addr: "localhost:9999".to_string(),
            source: io::Error::new(io::ErrorKind::ConnectionRefused, "refused"),
        };
        assert_eq!(err.kind(), ErrorKind::Connection);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("cannot connect to localhost:9999"));
    }
}
