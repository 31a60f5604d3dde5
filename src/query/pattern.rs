//! Regular expression search over the word store

use super::ResultSet;
use crate::error::QueryError;
use crate::wordlists::WordStore;
use regex::Regex;

/// A compiled search pattern
///
/// Matches anywhere inside a word, not just the whole word. Anchor with `^` and
/// `$` for full-word matches.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    regex: Regex,
}

impl PatternMatcher {
    /// Compile a pattern
    ///
    /// # Errors
    ///
    /// Returns `QueryError::InvalidPattern` with the compiler's message if the
    /// pattern is not a valid regular expression.
    pub fn new(pattern: &str) -> Result<Self, QueryError> {
        let regex = Regex::new(pattern).map_err(|e| QueryError::InvalidPattern(e.to_string()))?;
        Ok(Self { regex })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// All matching words, in store order
    #[must_use]
    pub fn search<'a>(&self, store: &'a WordStore) -> ResultSet<'a> {
        ResultSet::new(
            store
                .words()
                .iter()
                .filter(|w| self.regex.is_match(w.text()))
                .collect(),
        )
    }
}

/// Compile `pattern` and search the store with it
///
/// An empty pattern yields an empty result rather than every word.
///
/// # Errors
///
/// Returns `QueryError::InvalidPattern` if the pattern does not compile.
pub fn search<'a>(pattern: &str, store: &'a WordStore) -> Result<ResultSet<'a>, QueryError> {
    if pattern.is_empty() {
        return Ok(ResultSet::default());
    }
    Ok(PatternMatcher::new(pattern)?.search(store))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> WordStore {
        WordStore::from_lines(["iceberg", "bergs", "burger", "berg", "hamburg"])
    }

    #[test]
    fn search_matches_substrings_in_store_order() {
        let store = store();
        let result = search("berg", &store).unwrap();

        assert_eq!(result.texts().collect::<Vec<_>>(), ["iceberg", "bergs", "berg"]);
        assert_eq!(result.count(), 3);
    }

    #[test]
    fn search_honors_anchors() {
        let store = store();
        let result = search("^berg$", &store).unwrap();
        assert_eq!(result.texts().collect::<Vec<_>>(), ["berg"]);
    }

    #[test]
    fn search_supports_classes_and_alternation() {
        let store = store();
        let result = search("b(e|u)rg$", &store).unwrap();
        assert_eq!(
            result.texts().collect::<Vec<_>>(),
            ["iceberg", "berg", "hamburg"]
        );
    }

    #[test]
    fn search_invalid_pattern() {
        let store = store();
        let err = search("(berg", &store).unwrap_err();
        assert!(matches!(err, QueryError::InvalidPattern(ref msg) if !msg.is_empty()));
    }

    #[test]
    fn search_empty_pattern_is_empty_result() {
        let store = store();
        assert!(search("", &store).unwrap().is_empty());
    }

    #[test]
    fn search_no_matches() {
        let store = store();
        let result = search("xyz", &store).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn matcher_reuse_across_stores() {
        let matcher = PatternMatcher::new("^a").unwrap();
        let first = WordStore::from_lines(["ad", "da"]);
        let second = WordStore::from_lines(["as", "ads", "sad"]);

        assert_eq!(matcher.search(&first).count(), 1);
        assert_eq!(matcher.search(&second).count(), 2);
        assert_eq!(matcher.as_str(), "^a");
    }
}
