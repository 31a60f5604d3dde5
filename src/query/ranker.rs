//! Result deduplication and ordering

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// Ordered query result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet<'a> {
    words: Vec<&'a Word>,
}

impl<'a> ResultSet<'a> {
    /// Wrap words that are already in their final order
    #[must_use]
    pub const fn new(words: Vec<&'a Word>) -> Self {
        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[&'a Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word texts in result order
    pub fn texts(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.words.iter().map(|&w| w.text())
    }
}

/// Longer words first, then alphabetical
#[must_use]
pub fn rank_order(a: &Word, b: &Word) -> Ordering {
    b.len()
        .cmp(&a.len())
        .then_with(|| a.text().cmp(b.text()))
}

/// Deduplicate raw matches by exact text and sort with `rank_order`
///
/// # Examples
/// ```
/// use wordhunt::query::rank;
/// use wordhunt::wordlists::WordStore;
///
/// let store = WordStore::from_lines(["as", "sad", "as", "ads"]);
/// let raw: Vec<_> = store.words().iter().collect();
/// let ranked: Vec<&str> = rank(raw).texts().collect();
/// assert_eq!(ranked, ["ads", "sad", "as"]);
/// ```
#[must_use]
pub fn rank(raw: Vec<&Word>) -> ResultSet<'_> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut words: Vec<&Word> = raw
        .into_iter()
        .filter(|&w| seen.insert(w.text()))
        .collect();

    words.sort_unstable_by(|a, b| rank_order(a, b));
    ResultSet::new(words)
}
