//! Per-letter feedback computation for a guess against the secret word
//!
//! Each guessed letter receives one of three verdicts:
//! - `Correct` = right letter, right position
//! - `Present` = letter occurs in the secret, but not at this position
//! - `Absent`  = letter does not occur in a still-available secret position
//!
//! Duplicate letters are resolved by consuming secret letters: each secret
//! letter can justify at most one non-Absent verdict.

use super::{WORD_SIZE, Word};

/// Verdict for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterVerdict {
    Correct,
    Present,
    Absent,
}

/// Ordered per-letter verdicts for one scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    verdicts: [LetterVerdict; WORD_SIZE],
}

impl Feedback {
    /// Compare `guess` against `secret` and produce per-letter verdicts
    ///
    /// This implements the exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches `Correct` and consume those secret
    ///    letters from an availability pool
    /// 2. Second pass: mark `Present` while the pool still holds the guessed
    ///    letter, consuming one occurrence per verdict; otherwise `Absent`
    ///
    /// A letter value therefore never receives more `Correct`/`Present`
    /// verdicts than it occurs in the secret.
    ///
    /// # Examples
    /// ```
    /// use yorkle::core::{Feedback, LetterVerdict, Word};
    ///
    /// let secret = Word::new("blood").unwrap();
    /// let guess = Word::new("boron").unwrap();
    /// let feedback = Feedback::compare(&secret, &guess);
    ///
    /// assert_eq!(feedback.verdicts()[0], LetterVerdict::Correct);
    /// assert_eq!(feedback.verdicts()[1], LetterVerdict::Present);
    /// ```
    #[must_use]
    pub fn compare(secret: &Word, guess: &Word) -> Self {
        let mut verdicts = [LetterVerdict::Absent; WORD_SIZE];
        let mut available = secret.letter_counts();

        // First pass: exact position matches
        // Allow: index needed to access guess[i], secret[i], and set verdicts[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_SIZE {
            if guess.letter_at(i) == secret.letter_at(i) {
                verdicts[i] = LetterVerdict::Correct;

                // Consume from the availability pool
                if let Some(count) = available.get_mut(&guess.letter_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, while unconsumed occurrences remain
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_SIZE {
            if verdicts[i] == LetterVerdict::Absent {
                let letter = guess.letter_at(i);
                if let Some(count) = available.get_mut(&letter)
                    && *count > 0
                {
                    verdicts[i] = LetterVerdict::Present;
                    *count -= 1;
                }
            }
        }

        Self { verdicts }
    }

    /// Get the ordered verdicts
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[LetterVerdict; WORD_SIZE] {
        &self.verdicts
    }

    /// Check if the guess matched the secret exactly (all Correct)
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.verdicts.iter().all(|&v| v == LetterVerdict::Correct)
    }

    /// Count verdicts of a given kind
    #[must_use]
    pub fn count(&self, verdict: LetterVerdict) -> usize {
        self.verdicts.iter().filter(|&&v| v == verdict).count()
    }
}

impl<'a> IntoIterator for &'a Feedback {
    type Item = &'a LetterVerdict;
    type IntoIter = std::slice::Iter<'a, LetterVerdict>;

    fn into_iter(self) -> Self::IntoIter {
        self.verdicts.iter()
    }
}
