//! Display functions for game results

use super::formatters::distribution_line;
use crate::core::{Feedback, LetterVerdict, Word};
use crate::stats::Summary;
use colored::Colorize;

/// Print the scored guess with per-letter color cues
///
/// Correct letters render black on green, present-but-misplaced letters
/// yellow, absent letters white.
pub fn print_feedback(guess: &Word, feedback: &Feedback) {
    print!("Result: ");

    for (&letter, &verdict) in guess.letters().iter().zip(feedback) {
        let ch = (letter as char).to_string();
        let cell = match verdict {
            LetterVerdict::Correct => ch.black().on_green(),
            LetterVerdict::Present => ch.yellow().on_black(),
            LetterVerdict::Absent => ch.white().on_black(),
        };
        print!("{cell}");
    }

    println!();
}

/// Print the cumulative stats report
///
/// ```text
/// Played: 57
/// Win %: 96.5%
///
/// Guess distribution:
/// 1: 0
/// 2: *** 3
/// ```
pub fn print_summary(summary: &Summary) {
    println!("Played: {}", summary.played);
    println!("Win %: {:.1}%", summary.win_rate);
    println!();
    println!("Guess distribution:");

    for (i, &wins) in summary.wins.iter().enumerate() {
        println!("{}", distribution_line(i + 1, wins));
    }
}
