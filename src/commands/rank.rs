//! Starter word ranking command
//!
//! Scores every dictionary word against the full dictionary and keeps the
//! best or worst few.

use crate::core::CandidateSet;
use crate::solver::{GuessPool, Ranking, top_scoring_words};

/// One row of a ranking
#[derive(Debug, Clone, PartialEq)]
pub struct RankedWord {
    pub word: String,
    pub score: f64,
}

/// Result of ranking words
#[derive(Debug, Clone, PartialEq)]
pub struct RankingResult {
    pub ranking: Ranking,
    pub pool: GuessPool,
    /// Number of words the scores were computed against
    pub possible_words: usize,
    pub words: Vec<RankedWord>,
}

/// Rank `count` words from `pool` against the current candidates
#[must_use]
pub fn rank_words(
    candidates: &CandidateSet,
    count: usize,
    pool: GuessPool,
    ranking: Ranking,
) -> RankingResult {
    let words = top_scoring_words(candidates, count, pool, ranking)
        .into_iter()
        .map(|(word, score)| RankedWord {
            word: word.text().to_string(),
            score,
        })
        .collect();

    RankingResult {
        ranking,
        pool,
        possible_words: candidates.possible_count(),
        words,
    }
}

/// Best or worst opening words for a fresh game
#[must_use]
pub fn rank_starters(candidates: &CandidateSet, count: usize, ranking: Ranking) -> RankingResult {
    rank_words(candidates, count, GuessPool::AllWords, ranking)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn candidates() -> CandidateSet {
        let words = words_from_slice(&["cod", "wod", "mwc", "zzz", "mod", "ccc"], 3);
        CandidateSet::new(words, 3).unwrap()
    }

    #[test]
    fn best_and_worst_are_opposite_ends() {
        let candidates = candidates();
        let best = rank_starters(&candidates, 6, Ranking::Best);
        let worst = rank_starters(&candidates, 6, Ranking::Worst);

        assert_eq!(best.words.len(), 6);
        assert_eq!(best.possible_words, 6);
        assert!(best.words.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(worst.words.windows(2).all(|w| w[0].score <= w[1].score));
        assert_eq!(worst.words[0].word, "zzz");
    }

    #[test]
    fn count_limits_rows() {
        let result = rank_starters(&candidates(), 2, Ranking::Best);
        assert_eq!(result.words.len(), 2);
        assert_eq!(result.pool, GuessPool::AllWords);
    }

    #[test]
    fn count_beyond_dictionary() {
        let result = rank_starters(&candidates(), 100, Ranking::Worst);
        assert_eq!(result.words.len(), 6);
    }
}
