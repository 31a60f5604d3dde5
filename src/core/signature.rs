//! Anagram signatures and query letter multisets
//!
//! A signature is the lower-cased letters of a word, sorted ascending. Two words
//! share a signature exactly when one is a letter permutation of the other.

use std::borrow::Borrow;
use std::fmt;

/// Canonical sorted-letter key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(String);

impl Signature {
    /// Compute the signature of a word
    ///
    /// Non-alphabetic characters are dropped before sorting.
    ///
    /// # Examples
    /// ```
    /// use wordhunt::core::Signature;
    ///
    /// assert_eq!(Signature::of("Sad").as_str(), "ads");
    /// assert_eq!(Signature::of("ads"), Signature::of("DAS"));
    /// ```
    #[must_use]
    pub fn of(word: &str) -> Self {
        let mut letters: Vec<char> = word
            .chars()
            .flat_map(char::to_lowercase)
            .filter(|c| c.is_alphabetic())
            .collect();
        letters.sort_unstable();
        Self(letters.into_iter().collect())
    }

    /// Build a signature from letters already in ascending order
    pub(crate) fn from_sorted(letters: impl IntoIterator<Item = char>) -> Self {
        Self(letters.into_iter().collect())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters in the signature
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Borrow<str> for Signature {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The letters of a scrab query, case-folded and sorted, duplicates kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterMultiset {
    letters: Vec<char>,
}

impl LetterMultiset {
    /// Normalize raw query input
    ///
    /// Every character is kept, so `"abcc"` holds two `c`s.
    #[must_use]
    pub fn from_input(input: &str) -> Self {
        let mut letters: Vec<char> = input.chars().flat_map(char::to_lowercase).collect();
        letters.sort_unstable();
        Self { letters }
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}
