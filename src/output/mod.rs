//! Terminal output formatting
//!
//! Result display, paging, and progress reporting.

pub mod display;
pub mod formatters;
pub mod pager;
pub mod progress;

pub use display::{print_banner, print_error, print_help, print_result};
pub use pager::Pager;
pub use progress::BarObserver;
