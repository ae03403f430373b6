//! Hangman wire commands and reply parsing
//!
//! The protocol is line-oriented ASCII. The client sends one of three
//! commands; the server answers with a length, one boolean per slot, or the
//! solution word.

use super::HangmanError;
use crate::core::Letter;
use std::fmt;

/// Longest word length accepted from the server
pub const MAX_WORD_LENGTH: usize = 64;

/// A command line sent to the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Ask for a new word
    New,
    /// Submit one letter
    Guess(Letter),
    /// Give up and ask for the solution
    Quit,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::New => write!(f, "NEW"),
            Self::Guess(letter) => write!(f, "GUESS {letter}"),
            Self::Quit => write!(f, "QUIT"),
        }
    }
}

/// Parse the server's reply to `NEW`
///
/// # Errors
/// Returns `HangmanError::Malformed` unless the line is a decimal integer in
/// `1..=MAX_WORD_LENGTH` (surrounding whitespace allowed).
///
/// # Examples
/// ```
/// use hangman_client::protocol::parse_word_length;
///
/// assert_eq!(parse_word_length("7\r").unwrap(), 7);
/// assert!(parse_word_length("seven").is_err());
/// assert!(parse_word_length("0").is_err());
/// assert!(parse_word_length("100000000000").is_err());
/// ```
pub fn parse_word_length(line: &str) -> Result<usize, HangmanError> {
    match line.trim().parse::<usize>() {
        Ok(length) if (1..=MAX_WORD_LENGTH).contains(&length) => Ok(length),
        _ => Err(HangmanError::Malformed {
            what: "word length",
            line: line.to_string(),
        }),
    }
}

/// Parse one per-position reply to `GUESS`
///
/// The server's tokens are boolean-like: any line mentioning `true` is a
/// match, any line mentioning `false` is not. Case is ignored.
///
/// # Errors
/// Returns `HangmanError::Malformed` if the line mentions neither.
pub fn parse_match_token(line: &str) -> Result<bool, HangmanError> {
    let token = line.trim().to_ascii_lowercase();
    if token.contains("true") {
        Ok(true)
    } else if token.contains("false") {
        Ok(false)
    } else {
        Err(HangmanError::Malformed {
            what: "match token",
            line: line.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_render_as_wire_lines() {
        assert_eq!(Command::New.to_string(), "NEW");
        assert_eq!(
            Command::Guess(Letter::new('R').unwrap()).to_string(),
            "GUESS R"
        );
        assert_eq!(Command::Quit.to_string(), "QUIT");
    }

    #[test]
    fn word_length_accepts_padded_numbers() {
        assert_eq!(parse_word_length("5").unwrap(), 5);
        assert_eq!(parse_word_length("  12 ").unwrap(), 12);
    }

    #[test]
    fn word_length_rejects_garbage() {
        for bad in ["", "   ", "-3", "0", "4.5", "five", "Welcome!"] {
            assert!(parse_word_length(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn word_length_rejects_oversized() {
        assert_eq!(parse_word_length(&MAX_WORD_LENGTH.to_string()).unwrap(), MAX_WORD_LENGTH);

        let too_long = (MAX_WORD_LENGTH + 1).to_string();
        let huge = usize::MAX.to_string();
        for bad in [too_long.as_str(), "100000000000", huge.as_str()] {
            let err = parse_word_length(bad).unwrap_err();
            assert!(
                matches!(err, HangmanError::Malformed { what: "word length", .. }),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn match_token_variants() {
        assert!(parse_match_token("true").unwrap());
        assert!(parse_match_token("TRUE\r").unwrap());
        assert!(parse_match_token("position 3: true").unwrap());
        assert!(!parse_match_token("false").unwrap());
        assert!(!parse_match_token(" False ").unwrap());
    }

    #[test]
    fn match_token_rejects_unknown() {
        assert!(parse_match_token("").is_err());
        assert!(parse_match_token("maybe").is_err());
        assert!(parse_match_token("1").is_err());
    }
}
