//! Word Hunt
//!
//! Explore a word list with regular expressions or Scrabble-style subset anagrams.
//!
//! # Quick Start
//!
//! ```rust
//! use wordhunt::query::{QueryEngine, Request};
//! use wordhunt::wordlists::WordStore;
//!
//! let store = WordStore::from_lines(["iceberg", "bergs", "berg", "Bergen"]);
//! let engine = QueryEngine::new(&store);
//!
//! let result = engine.run(&Request::Pattern("berg".into())).unwrap();
//! assert_eq!(result.count(), 3);
//!
//! let result = engine.run(&Request::Scrab("grebs".into())).unwrap();
//! assert_eq!(result.texts().collect::<Vec<_>>(), ["bergs", "berg"]);
//! ```

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Index, matching and ranking
pub mod query;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
