//! Per-round game state
//!
//! A `Round` holds what the client knows about the word being guessed: one
//! slot per position, the letters tried so far and the remaining miss budget.
//! Only the session layer mutates it, and only in response to server replies.

use super::Letter;
use std::fmt;

/// Marker printed for a position that has not been revealed yet
pub const HIDDEN_MARKER: char = '_';

/// One character position of the word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Hidden,
    Revealed(Letter),
}

impl Slot {
    #[inline]
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Hidden => HIDDEN_MARKER,
            Self::Revealed(letter) => letter.as_char(),
        }
    }
}

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// Result of applying one guess to a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    pub letter: Letter,
    /// Positions the server confirmed for this letter
    pub matches: usize,
    /// Positions that went from hidden to revealed
    pub newly_revealed: usize,
}

impl GuessOutcome {
    #[inline]
    #[must_use]
    pub const fn is_hit(&self) -> bool {
        self.matches > 0
    }
}

/// State of one word-guessing game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    slots: Vec<Slot>,
    guesses_remaining: u32,
    guessed: [bool; 26],
}

impl Round {
    /// Start a round with every slot hidden
    ///
    /// # Panics
    /// Panics in debug mode if `word_length` is zero.
    #[must_use]
    pub fn new(word_length: usize, guess_budget: u32) -> Self {
        debug_assert!(word_length > 0, "word length must be positive");
        Self {
            slots: vec![Slot::Hidden; word_length],
            guesses_remaining: guess_budget,
            guessed: [false; 26],
        }
    }

    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[inline]
    #[must_use]
    pub const fn guesses_remaining(&self) -> u32 {
        self.guesses_remaining
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_revealed()).count()
    }

    /// True once no hidden slot remains
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_revealed())
    }

    /// A solved round is won even if the budget is also spent
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.is_solved() {
            Outcome::Won
        } else if self.guesses_remaining == 0 {
            Outcome::Lost
        } else {
            Outcome::InProgress
        }
    }

    #[must_use]
    pub const fn has_guessed(&self, letter: Letter) -> bool {
        self.guessed[letter.index()]
    }

    /// Letters tried this round, in alphabetical order
    pub fn guessed_letters(&self) -> impl Iterator<Item = Letter> + '_ {
        ('A'..='Z')
            .filter_map(|c| Letter::new(c).ok())
            .filter(|letter| self.guessed[letter.index()])
    }

    /// The revealed word so far, hidden positions shown as `_`
    #[must_use]
    pub fn pattern(&self) -> String {
        self.slots.iter().map(|slot| slot.as_char()).collect()
    }

    pub(crate) const fn record_guess(&mut self, letter: Letter) {
        self.guessed[letter.index()] = true;
    }

    /// Reveal `letter` at `position`
    ///
    /// Returns true if the slot was hidden. A revealed slot is never
    /// overwritten.
    pub(crate) fn reveal(&mut self, position: usize, letter: Letter) -> bool {
        match self.slots.get_mut(position) {
            Some(slot @ Slot::Hidden) => {
                *slot = Slot::Revealed(letter);
                true
            }
            _ => false,
        }
    }

    /// Spend one guess on a miss
    pub(crate) const fn charge_miss(&mut self) {
        self.guesses_remaining = self.guesses_remaining.saturating_sub(1);
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern())
    }
}
