//! Word lists for the solver
//!
//! Dictionaries are loaded at run time from newline-delimited files.

pub mod loader;

/// Dictionary file used when none is given
pub const DEFAULT_WORDLIST: &str = "words.txt";
