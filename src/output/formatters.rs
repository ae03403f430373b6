//! Formatting utilities for terminal output

use crate::core::Round;

/// Revealed word with a space between slots, e.g. `_ A _ A _`
#[must_use]
pub fn spaced_pattern(round: &Round) -> String {
    let mut result = String::with_capacity(round.word_length() * 2);
    for (i, slot) in round.slots().iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(slot.as_char());
    }
    result
}

/// Letters tried so far, space separated, or `-` if none
#[must_use]
pub fn guessed_list(round: &Round) -> String {
    let letters: Vec<String> = round.guessed_letters().map(|l| l.to_string()).collect();
    if letters.is_empty() {
        "-".to_string()
    } else {
        letters.join(" ")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value as usize * width) / max as usize
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Meter of guesses left out of the round's budget
#[must_use]
pub fn guess_meter(remaining: u32, budget: u32) -> String {
    create_progress_bar(remaining, budget, budget.min(20) as usize)
}
