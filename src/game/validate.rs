//! Guess validation
//!
//! Gates a raw attempt against length and word-list membership before it is
//! scored. Classification only; how a failure is shown is the caller's call.

use crate::core::{Word, WordError};
use crate::wordlists::WordSet;
use std::fmt;

/// Why an attempt was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The attempt does not have exactly `WORD_SIZE` characters
    WrongLength { attempt: String, len: usize },
    /// The attempt is not in the accepted-word list
    NotInWordList { attempt: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { attempt, .. } | Self::NotInWordList { attempt } => {
                write!(f, "'{attempt}' is not a valid word.")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a raw attempt against the accepted-word set
///
/// Checks, in order: exact `WORD_SIZE` length, then membership of the
/// case-normalized word in `words`. Attempts holding non-letter characters
/// cannot be in the list and classify as `NotInWordList`.
///
/// # Errors
///
/// Returns the matching [`ValidationError`] variant; the offending attempt is
/// carried for diagnostics.
pub fn validate(words: &WordSet, attempt: &str) -> Result<Word, ValidationError> {
    let word = Word::new(attempt).map_err(|e| match e {
        WordError::InvalidLength(len) => ValidationError::WrongLength {
            attempt: attempt.to_string(),
            len,
        },
        WordError::InvalidCharacters => ValidationError::NotInWordList {
            attempt: attempt.to_string(),
        },
    })?;

    if words.contains(&word) {
        Ok(word)
    } else {
        Err(ValidationError::NotInWordList {
            attempt: attempt.to_string(),
        })
    }
}
