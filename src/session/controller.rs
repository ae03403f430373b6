//! Replay loop over one connection
//!
//! `RoundController` plays rounds back to back until the player declines,
//! carrying the only state that survives between rounds.

use super::{GameSession, SessionConfig};
use crate::core::Outcome;
use crate::interaction::InteractionPort;
use crate::protocol::{HangmanError, LineChannel};
use tracing::{error, info};

/// Whether a round has already been played on this connection
///
/// The server only sends its banner before the first round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionHistory {
    already_played: bool,
}

impl SessionHistory {
    /// History of a fresh connection
    #[must_use]
    pub const fn new() -> Self {
        Self {
            already_played: false,
        }
    }

    /// History of a connection that has completed a round
    #[must_use]
    pub const fn played() -> Self {
        Self {
            already_played: true,
        }
    }

    #[inline]
    #[must_use]
    pub const fn already_played(self) -> bool {
        self.already_played
    }

    const fn mark_played(&mut self) {
        self.already_played = true;
    }
}

/// Tally of finished rounds
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub rounds_played: usize,
    pub rounds_won: usize,
    pub rounds_lost: usize,
}

impl SessionStats {
    pub fn record(&mut self, outcome: Outcome) {
        self.rounds_played += 1;
        match outcome {
            Outcome::Won => self.rounds_won += 1,
            Outcome::Lost => self.rounds_lost += 1,
            Outcome::InProgress => {}
        }
    }

    /// Percentage of played rounds that were won
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // round counts are tiny
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.rounds_won as f64 / self.rounds_played as f64 * 100.0
        }
    }
}

/// Top-level driver: rounds until the player opts out
///
/// The controller owns the channel. `run` consumes it, so the connection is
/// released exactly once whether the session ends normally or on error.
pub struct RoundController<C: LineChannel, P: InteractionPort> {
    channel: C,
    port: P,
    config: SessionConfig,
    history: SessionHistory,
    stats: SessionStats,
}

impl<C: LineChannel, P: InteractionPort> RoundController<C, P> {
    #[must_use]
    pub fn new(channel: C, port: P, config: SessionConfig) -> Self {
        Self {
            channel,
            port,
            config,
            history: SessionHistory::new(),
            stats: SessionStats::default(),
        }
    }

    /// Play rounds until the player declines another
    ///
    /// # Errors
    /// Returns the first protocol or presentation error. No further rounds
    /// are attempted and the player is not asked anything more.
    pub fn run(mut self) -> Result<SessionStats, HangmanError> {
        loop {
            let outcome = match self.play_round() {
                Ok(outcome) => outcome,
                Err(err) => {
                    error!(error = %err, rounds = self.stats.rounds_played, "session aborted");
                    return Err(err);
                }
            };
            self.history.mark_played();
            self.stats.record(outcome);

            if !self.port.elicit_replay()? {
                break;
            }
        }

        info!(
            played = self.stats.rounds_played,
            won = self.stats.rounds_won,
            "session finished"
        );
        Ok(self.stats)
    }

    fn play_round(&mut self) -> Result<Outcome, HangmanError> {
        let session = GameSession::start(
            &mut self.channel,
            &self.config,
            self.history,
            &mut self.port,
        )?;
        session.play(&mut self.port)
    }
}
