//! Query engine
//!
//! Owns the signature index and dispatches requests to pattern search or subset
//! matching.

use super::pattern;
use super::ranker::{ResultSet, rank};
use super::subset::{CancelToken, ProbeObserver, Silent, SubsetMatcher};
use super::SignatureIndex;
use crate::error::QueryError;
use crate::wordlists::WordStore;
use std::fmt;
use tracing::debug;

/// A single query
///
/// Requests are plain values; repeating a query means running the same request
/// again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Regular expression search
    Pattern(String),
    /// Subset ("Scrabble") search over the given letters
    Scrab(String),
}

impl Request {
    /// Short name of the request kind
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Pattern(_) => "pattern",
            Self::Scrab(_) => "scrab",
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Pattern(value) | Self::Scrab(value) => value,
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.value())
    }
}

/// Entry point for all queries against one word store
pub struct QueryEngine<'a> {
    store: &'a WordStore,
    index: SignatureIndex<'a>,
}

impl<'a> QueryEngine<'a> {
    /// Build the signature index and wrap the store
    ///
    /// # Examples
    /// ```
    /// use wordhunt::query::{QueryEngine, Request};
    /// use wordhunt::wordlists::WordStore;
    ///
    /// let store = WordStore::from_lines(["ad", "ads", "sad", "fads", "fa", "as"]);
    /// let engine = QueryEngine::new(&store);
    ///
    /// let result = engine.run(&Request::Scrab("asdf".into())).unwrap();
    /// assert_eq!(result.texts().collect::<Vec<_>>(), ["fads", "ads", "sad", "ad", "as", "fa"]);
    /// ```
    #[must_use]
    pub fn new(store: &'a WordStore) -> Self {
        Self {
            store,
            index: SignatureIndex::build(store),
        }
    }

    #[must_use]
    pub const fn store(&self) -> &'a WordStore {
        self.store
    }

    #[must_use]
    pub const fn index(&self) -> &SignatureIndex<'a> {
        &self.index
    }

    /// Run a request to completion
    ///
    /// # Errors
    ///
    /// Returns `QueryError::InvalidPattern` if a pattern request fails to compile.
    pub fn run(&self, request: &Request) -> Result<ResultSet<'a>, QueryError> {
        self.run_with(request, &mut Silent, &CancelToken::new())
    }

    /// Run a request, reporting subset-search progress and honoring cancellation
    ///
    /// The observer and token only affect scrab requests.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::InvalidPattern` for a bad pattern, or
    /// `QueryError::Cancelled` if the token fires during a scrab request.
    pub fn run_with(
        &self,
        request: &Request,
        observer: &mut dyn ProbeObserver,
        cancel: &CancelToken,
    ) -> Result<ResultSet<'a>, QueryError> {
        let result = match request {
            Request::Pattern(value) => pattern::search(value, self.store)?,
            Request::Scrab(letters) => {
                let raw = SubsetMatcher::new(&self.index).find_with(letters, observer, cancel)?;
                rank(raw)
            }
        };

        debug!(request = %request, matches = result.count(), "query finished");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> WordStore {
        WordStore::from_lines(["ad", "ads", "sad", "fads", "fa", "as"])
    }

    #[test]
    fn scrab_request_ranks_results() {
        let store = store();
        let engine = QueryEngine::new(&store);

        let result = engine.run(&Request::Scrab("asdf".into())).unwrap();
        assert_eq!(
            result.texts().collect::<Vec<_>>(),
            ["fads", "ads", "sad", "ad", "as", "fa"]
        );
        assert_eq!(result.count(), 6);
    }

    #[test]
    fn scrab_request_is_case_insensitive() {
        let store = store();
        let engine = QueryEngine::new(&store);

        let result = engine.run(&Request::Scrab("SAD".into())).unwrap();
        assert_eq!(result.texts().collect::<Vec<_>>(), ["ads", "sad", "ad", "as"]);
    }

    #[test]
    fn empty_scrab_is_empty_result() {
        let store = store();
        let engine = QueryEngine::new(&store);

        assert!(engine.run(&Request::Scrab(String::new())).unwrap().is_empty());
        assert!(engine.run(&Request::Scrab("a".into())).unwrap().is_empty());
    }

    #[test]
    fn pattern_request_keeps_store_order() {
        let store = store();
        let engine = QueryEngine::new(&store);

        let result = engine.run(&Request::Pattern("ad".into())).unwrap();
        assert_eq!(result.texts().collect::<Vec<_>>(), ["ad", "ads", "sad", "fads"]);
    }

    #[test]
    fn invalid_pattern_is_an_error_and_engine_stays_usable() {
        let store = store();
        let engine = QueryEngine::new(&store);

        let err = engine.run(&Request::Pattern("a(d".into())).unwrap_err();
        assert!(matches!(err, QueryError::InvalidPattern(_)));

        let result = engine.run(&Request::Pattern("^fa".into())).unwrap();
        assert_eq!(result.count(), 2);
    }

    #[test]
    fn repeating_a_request_gives_same_result() {
        let store = store();
        let engine = QueryEngine::new(&store);
        let request = Request::Scrab("fdsa".into());

        assert_eq!(engine.run(&request).unwrap(), engine.run(&request).unwrap());
    }

    #[test]
    fn cancelled_scrab_returns_error() {
        let store = store();
        let engine = QueryEngine::new(&store);
        let cancel = CancelToken::new();
        cancel.cancel();

        let err = engine
            .run_with(&Request::Scrab("abcdefghijklmn".into()), &mut Silent, &cancel)
            .unwrap_err();
        assert!(matches!(err, QueryError::Cancelled { .. }));
    }

    #[test]
    fn request_display() {
        assert_eq!(Request::Scrab("asdf".into()).to_string(), "scrab asdf");
        assert_eq!(Request::Pattern("^b".into()).to_string(), "pattern ^b");
        assert_eq!(Request::Pattern("x".into()).kind(), "pattern");
    }
}
