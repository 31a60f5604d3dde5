//! Core domain types for word list queries
//!
//! Words as loaded from the list, and the sorted-letter signatures that key the
//! anagram index. Everything here is pure and cheap to test.

mod signature;
mod word;

pub use signature::{LetterMultiset, Signature};
pub use word::{Word, WordError};
