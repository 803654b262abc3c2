//! Accepted-word lists
//!
//! Provides the immutable set of accepted guess words, plus a default list
//! compiled into the binary for play without a word list file.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rustc_hash::FxHashSet;

/// An immutable collection of accepted guess words
///
/// Built once at session start; only membership queries afterwards.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: FxHashSet<Word>,
}

impl WordSet {
    /// Build a word set from already-validated words
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Check whether `word` is an accepted guess
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct accepted words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the accepted words in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}

impl FromIterator<Word> for WordSet {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
