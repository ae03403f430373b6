//! Text console frontend
//!
//! Line-by-line prompts on any reader/writer pair, stdin/stdout by default.

use super::InteractionPort;
use crate::core::{Letter, Round};
use crate::output::formatters::{guess_meter, guessed_list, spaced_pattern};
use crate::protocol::HangmanError;
use colored::Colorize;
use std::io::{self, BufRead, Stdout, Write};

/// Reference text implementation of `InteractionPort`
pub struct TextConsole<R, W> {
    input: R,
    output: W,
    guess_budget: u32,
}

impl TextConsole<io::StdinLock<'static>, Stdout> {
    /// Console on the process's stdin and stdout
    #[must_use]
    pub fn stdio(guess_budget: u32) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), guess_budget)
    }
}

impl<R: BufRead, W: Write> TextConsole<R, W> {
    #[must_use]
    pub const fn new(input: R, output: W, guess_budget: u32) -> Self {
        Self {
            input,
            output,
            guess_budget,
        }
    }

    /// Consume the console and hand back its writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>, HangmanError> {
        let console_error = |e: io::Error| HangmanError::presentation(e.to_string());

        write!(self.output, "{prompt}").map_err(console_error)?;
        self.output.flush().map_err(console_error)?;

        let mut input = String::new();
        if self.input.read_line(&mut input).map_err(console_error)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }

    fn say(&mut self, line: impl std::fmt::Display) {
        // A closed stdout leaves nothing to show; input errors still end the game.
        let _ = writeln!(self.output, "{line}");
    }
}

impl<R: BufRead, W: Write> InteractionPort for TextConsole<R, W> {
    fn elicit_guess(&mut self, round: &Round) -> Result<Letter, HangmanError> {
        loop {
            let Some(input) = self.prompt("Guess letter? ")? else {
                return Err(HangmanError::presentation("input closed while waiting for a guess"));
            };

            match Letter::from_input(&input) {
                None => self.say("Please enter a letter A-Z.".yellow()),
                Some(letter) if round.has_guessed(letter) => {
                    self.say(format!("You already guessed {letter}.").yellow());
                }
                Some(letter) => return Ok(letter),
            }
        }
    }

    fn render(&mut self, round: &Round) {
        let remaining = round.guesses_remaining();
        let meter = guess_meter(remaining, self.guess_budget);
        let meter = if remaining > 2 { meter.green() } else { meter.red() };

        self.say(format_args!("Guesses remaining: {remaining} {meter}"));
        self.say(spaced_pattern(round).bright_white().bold());
        self.say(format_args!("Guessed: {}", guessed_list(round)));
    }

    fn announce_word_length(&mut self, word_length: usize) {
        self.say(format_args!("Word length is: {word_length}"));
    }

    fn announce_win(&mut self) {
        self.say("Good job.".bright_green().bold());
    }

    fn announce_loss(&mut self, solution: Option<&str>) {
        self.say("You are bad at hangman.".red().bold());
        match solution {
            Some(word) => self.say(format_args!("The word was: {}", word.bright_yellow())),
            None => self.say("The server did not reveal the word."),
        }
    }

    fn elicit_replay(&mut self) -> Result<bool, HangmanError> {
        loop {
            let Some(input) = self.prompt("Play again? (Y/N) ")? else {
                return Ok(false);
            };
            match input.chars().next() {
                None => continue,
                Some(c) => return Ok(c.eq_ignore_ascii_case(&'y')),
            }
        }
    }
}
