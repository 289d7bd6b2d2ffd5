//! Command implementations

pub mod analyze;
pub mod compare;
pub mod interactive;
pub mod rank;
pub mod simulate;
pub mod stats;

pub use analyze::{AnalysisResult, analyze_word, apply_results};
pub use compare::{ComparisonResult, GameComparison, StrategySummary, run_compare};
pub use interactive::{SessionOutcome, run_interactive};
pub use rank::{RankedWord, RankingResult, rank_starters, rank_words};
pub use simulate::{SimulationResult, simulate_game};
pub use stats::{StatsResult, letter_statistics};
