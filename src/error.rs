//! Error taxonomy for loading and querying

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the query core
#[derive(Debug, Error)]
pub enum QueryError {
    /// The word list could not be read
    #[error("word list unavailable: {}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The search pattern failed to compile
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    /// A subset query was abandoned through its cancel token
    #[error("query cancelled after {probed} of {total} candidate signatures")]
    Cancelled { probed: u64, total: u64 },
}

impl QueryError {
    /// Whether the caller can report the error and keep serving queries
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::SourceUnavailable { .. })
    }
}
