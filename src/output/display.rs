//! Display functions for session results

use crate::session::SessionStats;
use colored::Colorize;

/// Print the end-of-session tally
pub fn print_session_summary(stats: &SessionStats) {
    if stats.rounds_played == 0 {
        return;
    }

    println!("\n{}", "─".repeat(40).cyan());
    println!(" {} ", "SESSION SUMMARY".bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());
    println!("   Rounds played:  {}", stats.rounds_played);
    println!(
        "   Won:            {}",
        stats.rounds_won.to_string().green()
    );
    println!(
        "   Lost:           {}",
        stats.rounds_lost.to_string().red()
    );
    println!(
        "   Win rate:       {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );
}
