//! Signature index
//!
//! Maps each sorted-letter signature to the words that share it, in store order.

use crate::core::{Signature, Word};
use crate::wordlists::WordStore;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Read-only anagram lookup built once from a `WordStore`
#[derive(Debug, Clone)]
pub struct SignatureIndex<'a> {
    buckets: FxHashMap<Signature, Vec<&'a Word>>,
    word_count: usize,
}

impl<'a> SignatureIndex<'a> {
    /// Build the index from every word in the store
    ///
    /// Signatures are computed in parallel; insertion is sequential so each bucket
    /// keeps the store's order.
    #[must_use]
    pub fn build(store: &'a WordStore) -> Self {
        let signatures: Vec<Signature> = store.words().par_iter().map(Word::signature).collect();

        let mut buckets: FxHashMap<Signature, Vec<&'a Word>> = FxHashMap::default();
        for (signature, word) in signatures.into_iter().zip(store.words()) {
            buckets.entry(signature).or_default().push(word);
        }

        debug!(
            words = store.len(),
            signatures = buckets.len(),
            "built signature index"
        );

        Self {
            buckets,
            word_count: store.len(),
        }
    }

    /// Words whose signature is exactly `signature`
    ///
    /// Returns an empty slice when no word has that signature.
    #[inline]
    pub fn lookup(&self, signature: &str) -> &[&'a Word] {
        self.buckets.get(signature).map_or(&[], Vec::as_slice)
    }

    /// Number of distinct signatures
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of words indexed
    #[inline]
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }
}
