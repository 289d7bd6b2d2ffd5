//! Guess scoring and game play
//!
//! Letter statistics, the expected-elimination scorer built on them, the
//! exhaustive single-step search used to check it, and the play policies.

pub mod brute_force;
mod elimination;
mod engine;
mod statistics;
pub mod strategy;

pub use elimination::{GuessPool, Ranking, rank_words, score_letter, score_word, top_scoring_words};
pub use engine::{GameRecord, Solver};
pub use statistics::EliminationStatistics;
pub use strategy::{MaxEliminationsStrategy, Strategy, StrategyType, ValidOnlyStrategy};
