//! Wordle Elimination Solver
//!
//! A Wordle helper that narrows the possible words from the colours each
//! guess receives, and ranks guesses by how many words they are expected to
//! eliminate.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_elimination::core::{GuessResult, Word};
//!
//! // "crane" played, c green, r yellow, the rest gray
//! let result: GuessResult = "crane\tgyrrr".parse().unwrap();
//!
//! assert!(result.accepts(&Word::new("court").unwrap()).unwrap());
//! assert!(!result.accepts(&Word::new("crust").unwrap()).unwrap());
//! ```

// Core domain types
pub mod core;

// Session settings
pub mod config;

// Scoring and play policies
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
