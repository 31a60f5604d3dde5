//! Dictionary word representation
//!
//! A Word is one accepted line of the word list, kept verbatim.

use super::Signature;
use std::fmt;
use thiserror::Error;

/// A single dictionary entry, stored exactly as loaded
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Reasons a raw word-list line is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("line is empty")]
    Empty,
    #[error("'{0}' starts with an uppercase letter")]
    ProperNoun(String),
    #[error("'{0}' contains an apostrophe or hyphen")]
    Punctuation(String),
}

impl Word {
    /// Accept a raw word-list line
    ///
    /// Trailing whitespace is stripped; everything else is kept as-is.
    ///
    /// # Errors
    /// Returns `WordError` if the line:
    /// - Is empty after stripping
    /// - Starts with an uppercase letter (proper nouns)
    /// - Contains `'` or `-`
    ///
    /// # Examples
    /// ```
    /// use wordhunt::core::Word;
    ///
    /// let word = Word::new("iceberg\n").unwrap();
    /// assert_eq!(word.text(), "iceberg");
    ///
    /// assert!(Word::new("Boston").is_err());
    /// assert!(Word::new("can't").is_err());
    /// ```
    pub fn new(line: &str) -> Result<Self, WordError> {
        let text = line.trim_end();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if text.chars().next().is_some_and(char::is_uppercase) {
            return Err(WordError::ProperNoun(text.to_string()));
        }

        if text.contains(['\'', '-']) {
            return Err(WordError::Punctuation(text.to_string()));
        }

        Ok(Self {
            text: text.to_string(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Anagram key for this word
    #[must_use]
    pub fn signature(&self) -> Signature {
        Signature::of(&self.text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("berg").unwrap();
        assert_eq!(word.text(), "berg");
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn word_creation_strips_trailing_whitespace_only() {
        assert_eq!(Word::new("fads\r\n").unwrap().text(), "fads");
        assert_eq!(Word::new("sad  \t").unwrap().text(), "sad");
        assert_eq!(Word::new(" ad").unwrap().text(), " ad");
    }

    #[test]
    fn word_creation_keeps_original_case() {
        let word = Word::new("iPod").unwrap();
        assert_eq!(word.text(), "iPod");
    }

    #[test]
    fn word_creation_rejects_proper_nouns() {
        assert!(matches!(
            Word::new("Paris"),
            Err(WordError::ProperNoun(w)) if w == "Paris"
        ));
    }

    #[test]
    fn word_creation_rejects_punctuation() {
        assert!(matches!(Word::new("o'clock"), Err(WordError::Punctuation(_))));
        assert!(matches!(Word::new("re-enter"), Err(WordError::Punctuation(_))));
    }

    #[test]
    fn word_creation_rejects_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   \n"), Err(WordError::Empty));
    }

    #[test]
    fn word_signature_sorts_letters() {
        let word = Word::new("fads").unwrap();
        assert_eq!(word.signature().as_str(), "adfs");
    }

    #[test]
    fn word_display() {
        let word = Word::new("iceberg").unwrap();
        assert_eq!(format!("{word}"), "iceberg");
    }

    #[test]
    fn word_equality_is_exact() {
        let a = Word::new("sad").unwrap();
        let b = Word::new("sad").unwrap();
        let c = Word::new("sAd").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
