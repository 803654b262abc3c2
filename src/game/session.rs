//! Interactive game loop
//!
//! Reads attempts from the player, scores them against the secret word, and
//! reports the outcome. An attempt slot is consumed only by a scored guess;
//! rejected input re-prompts on the same attempt number.

use super::validate;
use crate::core::{Feedback, MAX_ATTEMPTS, WORD_SIZE, Word};
use crate::output::print_feedback;
use crate::wordlists::WordSet;
use std::io::{self, BufRead, Write};

/// Read one attempt token from the player
///
/// Prompts with `Attempt #N: ` and reads until a non-empty token arrives.
/// The token is the input minus leading whitespace, cut at the first
/// whitespace, truncated to `WORD_SIZE` characters, and lowercased. The rest
/// of the line is discarded.
///
/// Returns `Ok(None)` on end of input.
///
/// # Errors
///
/// Returns an I/O error if reading from `input` or flushing the prompt fails.
pub fn read_attempt<R: BufRead>(input: &mut R, attempt_no: usize) -> io::Result<Option<String>> {
    print!("Attempt #{attempt_no}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let token: String = line
            .trim_start()
            .chars()
            .take_while(|c| !c.is_whitespace())
            .take(WORD_SIZE)
            .flat_map(char::to_lowercase)
            .collect();

        if !token.is_empty() {
            return Ok(Some(token));
        }
        // Blank line: keep waiting on the same prompt
    }
}

/// Run one game against `secret`, reading attempts from `input`
///
/// Returns the number of attempts used on a win, `Some(MAX_ATTEMPTS + 1)` on
/// a loss, and `None` when input ends before the game does. An unfinished
/// game must not be recorded as either outcome.
///
/// # Errors
///
/// Returns an I/O error if reading an attempt fails; the game is then
/// unfinished and no outcome should be recorded.
pub fn play_game<R: BufRead>(
    words: &WordSet,
    secret: &Word,
    input: &mut R,
) -> io::Result<Option<usize>> {
    for attempt_no in 1..=MAX_ATTEMPTS {
        let guess = loop {
            let Some(token) = read_attempt(input, attempt_no)? else {
                return Ok(None);
            };

            match validate(words, &token) {
                Ok(word) => break word,
                Err(err) => eprintln!("{err}"),
            }
        };

        let feedback = Feedback::compare(secret, &guess);
        print_feedback(&guess, &feedback);

        if feedback.is_win() {
            println!("You got it in {attempt_no}!");
            return Ok(Some(attempt_no));
        }
    }

    println!("Out of attempts! The word was '{secret}'.");
    Ok(Some(MAX_ATTEMPTS + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn word_set(words: &[&str]) -> WordSet {
        words.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn read_attempt_normalizes_token() {
        let mut input = Cursor::new("   BReaD extra\n");
        let token = read_attempt(&mut input, 1).unwrap();
        assert_eq!(token.as_deref(), Some("bread"));
    }

    #[test]
    fn read_attempt_truncates_to_word_size() {
        let mut input = Cursor::new("breads\n");
        let token = read_attempt(&mut input, 1).unwrap();
        assert_eq!(token.as_deref(), Some("bread"));
    }

    #[test]
    fn read_attempt_skips_blank_lines() {
        let mut input = Cursor::new("\n   \ncrane\n");
        let token = read_attempt(&mut input, 1).unwrap();
        assert_eq!(token.as_deref(), Some("crane"));
    }

    #[test]
    fn read_attempt_end_of_input() {
        let mut input = Cursor::new("");
        assert_eq!(read_attempt(&mut input, 1).unwrap(), None);
    }

    #[test]
    fn play_game_win_reports_attempts_used() {
        let words = word_set(&["bread", "erase"]);
        let secret = Word::new("bread").unwrap();

        let mut input = Cursor::new("erase\nbread\n");
        let outcome = play_game(&words, &secret, &mut input).unwrap();
        assert_eq!(outcome, Some(2));
    }

    #[test]
    fn play_game_invalid_attempt_does_not_consume_slot() {
        let words = word_set(&["bread", "erase"]);
        let secret = Word::new("bread").unwrap();

        // Two rejected attempts, then the win on attempt 1
        let mut input = Cursor::new("zzzzz\nab\nbread\n");
        let outcome = play_game(&words, &secret, &mut input).unwrap();
        assert_eq!(outcome, Some(1));
    }

    #[test]
    fn play_game_exhausted_attempts_is_loss() {
        let words = word_set(&["bread", "erase"]);
        let secret = Word::new("bread").unwrap();

        let mut input = Cursor::new("erase\n".repeat(MAX_ATTEMPTS));
        let outcome = play_game(&words, &secret, &mut input).unwrap();
        assert_eq!(outcome, Some(MAX_ATTEMPTS + 1));
    }

    #[test]
    fn play_game_end_of_input_is_unfinished() {
        let words = word_set(&["bread", "erase"]);
        let secret = Word::new("bread").unwrap();

        let mut input = Cursor::new("erase\n");
        let outcome = play_game(&words, &secret, &mut input).unwrap();
        assert_eq!(outcome, None);
    }

    #[test]
    fn play_game_end_of_input_after_invalid_attempt() {
        let words = word_set(&["bread"]);
        let secret = Word::new("bread").unwrap();

        let mut input = Cursor::new("zzzzz\n");
        let outcome = play_game(&words, &secret, &mut input).unwrap();
        assert_eq!(outcome, None);
    }
}
