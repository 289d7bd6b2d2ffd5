//! Letter statistics command

use crate::core::CandidateSet;
use crate::solver::EliminationStatistics;

/// Result of computing letter statistics
pub struct StatsResult {
    pub word_count: usize,
    pub summary: String,
}

/// Summarize letter counts over the words still possible
#[must_use]
pub fn letter_statistics(candidates: &CandidateSet) -> StatsResult {
    let stats = EliminationStatistics::for_candidates(candidates);
    StatsResult {
        word_count: stats.subset_size(),
        summary: stats.summary(),
    }
}
