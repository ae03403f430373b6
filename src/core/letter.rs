//! Guess letter representation
//!
//! A `Letter` is a single uppercase ASCII letter, the only alphabet the
//! hangman protocol accepts in a `GUESS` command.

use std::fmt;

/// One uppercase letter in `A..=Z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

/// Error type for characters that are not letters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotALetter(pub char);

impl fmt::Display for NotALetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a letter A-Z", self.0)
    }
}

impl std::error::Error for NotALetter {}

impl Letter {
    /// Create a letter from an uppercase ASCII character
    ///
    /// Lowercase input is rejected: folding case is the job of whoever
    /// collects the guess.
    ///
    /// # Errors
    /// Returns `NotALetter` for anything outside `A..=Z`.
    ///
    /// # Examples
    /// ```
    /// use hangman_client::core::Letter;
    ///
    /// assert_eq!(Letter::new('Q').unwrap().as_char(), 'Q');
    /// assert!(Letter::new('q').is_err());
    /// assert!(Letter::new('7').is_err());
    /// ```
    pub const fn new(c: char) -> Result<Self, NotALetter> {
        if c.is_ascii_uppercase() {
            Ok(Self(c as u8))
        } else {
            Err(NotALetter(c))
        }
    }

    /// Parse free-form player input into a letter
    ///
    /// Takes the first non-whitespace character and uppercases it.
    /// Returns `None` for empty input or a non-alphabetic first character.
    #[must_use]
    pub fn from_input(input: &str) -> Option<Self> {
        let c = input.trim().chars().next()?;
        Self::new(c.to_ascii_uppercase()).ok()
    }

    /// Get the letter as a char
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Zero-based index in the alphabet (A = 0)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
