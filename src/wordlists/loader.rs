//! Word list and secret word loading
//!
//! File loading for the accepted-word list and the secret word, plus the
//! fallbacks used when no files are present: the embedded default list, and
//! a randomly drawn secret.

use super::{WORDS, WordSet};
use crate::core::Word;
use anyhow::{Context, Result, bail};
use rand::seq::IteratorRandom;
use std::fs;
use std::path::Path;

/// Load the accepted-word set from a file
///
/// One word per line, whitespace-trimmed, case-normalized. Lines that do not
/// form a well-formed word are skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or if no well-formed word
/// remains after filtering.
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<WordSet> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;

    let set: WordSet = content
        .lines()
        .filter_map(|line| Word::new(line.trim()).ok())
        .collect();

    if set.is_empty() {
        bail!("word list {} contains no usable words", path.display());
    }

    Ok(set)
}

/// Build the accepted-word set from the embedded default list
#[must_use]
pub fn embedded_words() -> WordSet {
    WORDS.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Load the secret word from an answer file
///
/// The secret is the first whitespace-separated token of the file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the token is not a
/// well-formed word. Either is fatal at startup.
pub fn load_secret<P: AsRef<Path>>(path: P) -> Result<Word> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read answer file {}", path.display()))?;

    let token = content
        .split_whitespace()
        .next()
        .with_context(|| format!("answer file {} is empty", path.display()))?;

    Word::new(token)
        .with_context(|| format!("answer file {} holds an invalid word", path.display()))
}

/// Draw a secret word uniformly from the accepted-word set
///
/// # Errors
///
/// Returns an error if the set is empty.
pub fn random_secret(words: &WordSet) -> Result<Word> {
    let mut rng = rand::rng();
    words
        .iter()
        .choose(&mut rng)
        .cloned()
        .context("cannot draw a secret word from an empty word set")
}
