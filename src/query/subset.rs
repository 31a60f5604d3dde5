//! Subset ("Scrabble") matching
//!
//! Given a set of letters, finds every dictionary word that can be spelled with a
//! sub-multiset of them. Candidate signatures are enumerated as position
//! combinations over the sorted letters, so the work grows as `2^n` in the
//! input length. Long queries can report progress and be cancelled.
//!
//! # Algorithm
//! For every size `k` in `2..=n`, every combination of `k` positions from the
//! sorted input is concatenated into a signature and probed against the index.
//! Repeated letters produce repeated probes; the ranker removes the duplicates.

use super::SignatureIndex;
use crate::core::{LetterMultiset, Signature, Word};
use crate::error::QueryError;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, warn};

/// Shortest signature ever probed; single letters are never returned
pub const MIN_SIGNATURE_LEN: usize = 2;

/// Input length above which callers should show progress
pub const PROGRESS_THRESHOLD: usize = 10;

/// Probes between progress reports and cancellation checks
pub const PROGRESS_INTERVAL: u64 = 4096;

/// Number of candidate signatures probed for an input of `n` letters
///
/// Equals `2^n - n - 1`: every subset of positions except the empty set and the
/// `n` singletons. Saturates at `u64::MAX`.
///
/// # Examples
/// ```
/// use wordhunt::query::candidate_count;
///
/// assert_eq!(candidate_count(1), 0);
/// assert_eq!(candidate_count(4), 11);
/// assert_eq!(candidate_count(20), 1_048_555);
/// ```
#[must_use]
pub const fn candidate_count(n: usize) -> u64 {
    if n >= 64 {
        return u64::MAX;
    }
    (1u64 << n) - n as u64 - 1
}

/// Hook for long-running subset queries
///
/// All methods default to doing nothing.
pub trait ProbeObserver {
    /// Called once before probing with the total number of candidates
    fn started(&mut self, _total: u64) {}

    /// Called every `PROGRESS_INTERVAL` probes with the running count
    fn progressed(&mut self, _probed: u64) {}

    /// Called once after the last probe
    fn finished(&mut self, _probed: u64) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl ProbeObserver for Silent {}

/// Shared flag for abandoning a query from another thread
#[derive(Debug, Default, Clone)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Iterator over every candidate signature of a letter multiset
///
/// Yields all position combinations of size `MIN_SIGNATURE_LEN..=n`, shortest
/// first, each in lexicographic position order.
pub struct Candidates<'m> {
    letters: &'m [char],
    positions: Vec<usize>,
}

impl<'m> Candidates<'m> {
    #[must_use]
    pub fn new(multiset: &'m LetterMultiset) -> Self {
        Self {
            letters: multiset.letters(),
            positions: Vec::new(),
        }
    }

    /// Move `positions` to the next combination, returning false when exhausted
    fn advance(&mut self) -> bool {
        let n = self.letters.len();
        let k = self.positions.len();

        if k == 0 {
            if n < MIN_SIGNATURE_LEN {
                return false;
            }
            self.positions.extend(0..MIN_SIGNATURE_LEN);
            return true;
        }

        // Rightmost position that still has room to move
        if let Some(i) = (0..k).rev().find(|&i| self.positions[i] < n - k + i) {
            self.positions[i] += 1;
            for j in i + 1..k {
                self.positions[j] = self.positions[j - 1] + 1;
            }
            return true;
        }

        if k == n {
            return false;
        }

        self.positions.clear();
        self.positions.extend(0..=k);
        true
    }
}

impl Iterator for Candidates<'_> {
    type Item = Signature;

    fn next(&mut self) -> Option<Signature> {
        if !self.advance() {
            return None;
        }
        Some(Signature::from_sorted(
            self.positions.iter().map(|&p| self.letters[p]),
        ))
    }
}

/// Enumerates candidate signatures and collects every indexed word they hit
pub struct SubsetMatcher<'i, 'a> {
    index: &'i SignatureIndex<'a>,
}

impl<'i, 'a> SubsetMatcher<'i, 'a> {
    #[must_use]
    pub const fn new(index: &'i SignatureIndex<'a>) -> Self {
        Self { index }
    }

    /// Raw matches for `letters`, duplicates included, in probe order
    #[must_use]
    pub fn find(&self, letters: &str) -> Vec<&'a Word> {
        let mut matches = Vec::new();
        let multiset = LetterMultiset::from_input(letters);
        for candidate in Candidates::new(&multiset) {
            matches.extend_from_slice(self.index.lookup(candidate.as_str()));
        }
        matches
    }

    /// Raw matches with progress reporting and cancellation
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Cancelled` if `cancel` fires before enumeration ends.
    pub fn find_with(
        &self,
        letters: &str,
        observer: &mut dyn ProbeObserver,
        cancel: &CancelToken,
    ) -> Result<Vec<&'a Word>, QueryError> {
        let multiset = LetterMultiset::from_input(letters);
        let total = candidate_count(multiset.len());
        debug!(letters = multiset.len(), candidates = total, "subset query");

        observer.started(total);

        let mut matches = Vec::new();
        let mut probed = 0u64;
        for candidate in Candidates::new(&multiset) {
            matches.extend_from_slice(self.index.lookup(candidate.as_str()));
            probed += 1;

            if probed % PROGRESS_INTERVAL == 0 {
                if cancel.is_cancelled() {
                    warn!(probed, total, "subset query cancelled");
                    return Err(QueryError::Cancelled { probed, total });
                }
                observer.progressed(probed);
            }
        }

        observer.finished(probed);
        Ok(matches)
    }
}
