//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_analysis, print_comparison, print_ranking, print_simulation, print_stats};
