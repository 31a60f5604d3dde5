//! Word lists for querying
//!
//! The in-memory word store and the loader that fills it.

pub mod loader;

use crate::core::Word;
use crate::error::QueryError;
use std::path::Path;

/// Default word list location on Unix systems
pub const DEFAULT_WORDLIST: &str = "/usr/share/dict/words";

/// The cleaned word list, in load order
///
/// Populated once and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct WordStore {
    words: Vec<Word>,
}

impl WordStore {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Load a store from a word list file
    ///
    /// # Errors
    ///
    /// Returns `QueryError::SourceUnavailable` if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, QueryError> {
        loader::load_from_file(path)
    }

    /// Build a store from raw lines
    #[must_use]
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        loader::words_from_lines(lines)
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
