//! Progress bar for long subset queries

use crate::query::ProbeObserver;
use indicatif::{ProgressBar, ProgressStyle};

/// Feeds subset-matcher progress into an indicatif bar
pub struct BarObserver {
    bar: ProgressBar,
}

impl BarObserver {
    /// Create an unsized bar; its length is set when probing starts
    #[must_use]
    pub fn new() -> Self {
        let bar = ProgressBar::no_length();
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {percent}% | {msg}")
        {
            bar.set_style(style.progress_chars("█▓▒░"));
        }
        bar.set_message("probing signatures (Esc to cancel)");
        Self { bar }
    }

    /// Handle for clearing the bar once the query returns
    #[must_use]
    pub fn bar(&self) -> ProgressBar {
        self.bar.clone()
    }
}

impl Default for BarObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeObserver for BarObserver {
    fn started(&mut self, total: u64) {
        self.bar.set_length(total);
        self.bar.set_position(0);
    }

    fn progressed(&mut self, probed: u64) {
        self.bar.set_position(probed);
    }

    fn finished(&mut self, probed: u64) {
        self.bar.set_position(probed);
        self.bar.finish_and_clear();
    }
}
