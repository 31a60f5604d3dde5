//! Command implementations

pub mod oneshot;
pub mod runner;
pub mod shell;

pub use oneshot::run_once;
pub use runner::execute;
pub use shell::{ShellCommand, run_shell};

/// Caller-side query policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryConfig {
    /// Longest scrab input accepted; candidate count doubles per extra letter
    pub max_letters: usize,
    /// Page long result lists when attached to a terminal
    pub paging: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            max_letters: DEFAULT_MAX_LETTERS,
            paging: true,
        }
    }
}

/// Default scrab length limit (about a million candidate signatures)
pub const DEFAULT_MAX_LETTERS: usize = 20;
