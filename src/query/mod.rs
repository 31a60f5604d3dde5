//! Word list query engine
//!
//! The signature index, subset matching, ranking, and pattern search, tied
//! together by `QueryEngine`.

mod engine;
mod index;
pub mod pattern;
mod ranker;
pub mod subset;

pub use engine::{QueryEngine, Request};
pub use index::SignatureIndex;
pub use pattern::PatternMatcher;
pub use ranker::{ResultSet, rank, rank_order};
pub use subset::{
    CancelToken, Candidates, PROGRESS_THRESHOLD, ProbeObserver, Silent, SubsetMatcher,
    candidate_count,
};
