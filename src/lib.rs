//! Yorkle
//!
//! A terminal word-guessing game: six attempts to find a five-letter secret
//! word, with duplicate-aware per-letter feedback and a persistent win/loss
//! record.
//!
//! # Quick Start
//!
//! ```rust
//! use yorkle::core::{Feedback, Word};
//!
//! let secret = Word::new("bread").unwrap();
//! let guess = Word::new("erase").unwrap();
//!
//! let feedback = Feedback::compare(&secret, &guess);
//! assert!(!feedback.is_win());
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Validation and the game loop
pub mod game;

// Cumulative statistics
pub mod stats;

// Terminal output formatting
pub mod output;
