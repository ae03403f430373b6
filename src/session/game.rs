//! One round of hangman against the server
//!
//! `GameSession` owns the round state and performs the protocol exchange:
//! the `NEW` handshake, one `GUESS` per player letter and the `QUIT`
//! request for the solution after a loss.

use super::{SessionConfig, SessionHistory};
use crate::core::{GuessOutcome, Letter, Outcome, Round};
use crate::interaction::InteractionPort;
use crate::protocol::{Command, HangmanError, LineChannel, parse_match_token, parse_word_length};
use tracing::{debug, info, warn};

/// A round in progress on a channel
pub struct GameSession<'a, C: LineChannel> {
    channel: &'a mut C,
    round: Round,
}

impl<'a, C: LineChannel> GameSession<'a, C> {
    /// Negotiate a new word and show the empty board
    ///
    /// The server's banner is only read before the first round of a
    /// connection, as recorded by `history`.
    ///
    /// # Errors
    /// Returns a protocol error if the channel closes or the word length is
    /// not a positive integer.
    pub fn start<P: InteractionPort>(
        channel: &'a mut C,
        config: &SessionConfig,
        history: SessionHistory,
        port: &mut P,
    ) -> Result<Self, HangmanError> {
        channel.send(Command::New)?;

        if !history.already_played() {
            for _ in 0..config.preamble_lines {
                let banner = channel.expect_line("server banner")?;
                debug!(%banner, "skipping preamble");
            }
        }

        let word_length = parse_word_length(&channel.expect_line("word length")?)?;
        info!(word_length, "new round");

        let round = Round::new(word_length, config.guess_budget);
        port.announce_word_length(word_length);
        port.render(&round);

        Ok(Self { channel, round })
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    /// Send one guess and apply the server's per-position answers
    ///
    /// Slots are revealed as each answer line arrives. A miss is only
    /// charged once all answer lines have been read.
    ///
    /// # Errors
    /// Returns a protocol error if fewer than `word_length` lines arrive or a
    /// line is not a boolean token. The round cannot continue after that.
    pub fn submit_guess(&mut self, letter: Letter) -> Result<GuessOutcome, HangmanError> {
        self.channel.send(Command::Guess(letter))?;
        self.round.record_guess(letter);

        let mut matches = 0;
        let mut newly_revealed = 0;
        for position in 0..self.round.word_length() {
            let line = self.channel.expect_line("guess result")?;
            if parse_match_token(&line)? {
                matches += 1;
                if self.round.reveal(position, letter) {
                    newly_revealed += 1;
                }
            }
        }

        if matches == 0 {
            self.round.charge_miss();
        }
        debug!(
            %letter,
            matches,
            remaining = self.round.guesses_remaining(),
            "guess applied"
        );

        Ok(GuessOutcome {
            letter,
            matches,
            newly_revealed,
        })
    }

    /// Play guesses until the word is revealed or the budget is spent
    ///
    /// # Errors
    /// Returns any protocol or presentation error; the round is abandoned.
    pub fn play<P: InteractionPort>(mut self, port: &mut P) -> Result<Outcome, HangmanError> {
        while self.round.guesses_remaining() > 0 {
            let letter = port.elicit_guess(&self.round)?;
            self.submit_guess(letter)?;
            port.render(&self.round);
            if self.round.is_solved() {
                break;
            }
        }

        Ok(self.resolve(port))
    }

    /// Report the end of the round
    ///
    /// The win check runs first; the exhausted-budget check runs regardless
    /// and asks the server for the solution.
    pub fn resolve<P: InteractionPort>(mut self, port: &mut P) -> Outcome {
        if self.round.is_solved() {
            info!(word = %self.round, "round won");
            port.announce_win();
        }

        if self.round.guesses_remaining() == 0 {
            let solution = self.request_solution();
            info!(solution = solution.as_deref().unwrap_or("?"), "round lost");
            port.announce_loss(solution.as_deref());
        }

        self.round.outcome()
    }

    /// Ask the server for the word after a loss
    ///
    /// Failures are logged; the loss is reported either way.
    fn request_solution(&mut self) -> Option<String> {
        let reply = self
            .channel
            .send(Command::Quit)
            .and_then(|()| self.channel.expect_line("solution word"));

        match reply {
            Ok(word) if !word.trim().is_empty() => Some(word.trim().to_string()),
            Ok(_) => {
                warn!("server sent an empty solution");
                None
            }
            Err(err) => {
                warn!(error = %err, "could not read solution");
                None
            }
        }
    }
}
