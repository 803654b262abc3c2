//! Core domain types for the game
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear properties.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterVerdict};
pub use word::{Word, WordError};

/// Fixed character length of secret and guess words
pub const WORD_SIZE: usize = 5;

/// Maximum guesses permitted per game
pub const MAX_ATTEMPTS: usize = 6;
