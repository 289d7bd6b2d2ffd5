//! Guess selection policies
//!
//! Defines the Strategy trait and the two policies built on elimination scores.

use super::EliminationStatistics;
use super::elimination::{GuessPool, Ranking, rank_words_unchecked};
use crate::core::{CandidateSet, GuessResult, Word};

/// A policy for picking the next guess
pub trait Strategy {
    /// Pick a guess given the current candidates and the results so far
    ///
    /// Returns `None` if no word is left to play.
    fn select_guess<'a>(
        &self,
        candidates: &'a CandidateSet,
        history: &[GuessResult],
    ) -> Option<&'a Word>;

    /// Name accepted by `StrategyType::from_name`
    fn name(&self) -> &'static str;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    ValidOnly(ValidOnlyStrategy),
    MaxEliminations(MaxEliminationsStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(
        &self,
        candidates: &'a CandidateSet,
        history: &[GuessResult],
    ) -> Option<&'a Word> {
        match self {
            Self::ValidOnly(s) => s.select_guess(candidates, history),
            Self::MaxEliminations(s) => s.select_guess(candidates, history),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::ValidOnly(s) => s.name(),
            Self::MaxEliminations(s) => s.name(),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "validonly", "valid-only", "maxeliminations", "max-eliminations"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "validonly" | "valid-only" => Some(Self::ValidOnly(ValidOnlyStrategy)),
            "maxeliminations" | "max-eliminations" => {
                Some(Self::MaxEliminations(MaxEliminationsStrategy))
            }
            _ => None,
        }
    }
}

/// Always play the best-scoring word that could still be the solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidOnlyStrategy;

impl Strategy for ValidOnlyStrategy {
    fn select_guess<'a>(
        &self,
        candidates: &'a CandidateSet,
        _history: &[GuessResult],
    ) -> Option<&'a Word> {
        let stats = EliminationStatistics::for_candidates(candidates);
        top_word(&stats, candidates, GuessPool::PossibleWords)
    }

    fn name(&self) -> &'static str {
        "validonly"
    }
}

/// Play the best-scoring dictionary word, even one already ruled out
///
/// Falls back to the best possible word when a single word remains or when
/// the best dictionary word was already played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaxEliminationsStrategy;

impl Strategy for MaxEliminationsStrategy {
    fn select_guess<'a>(
        &self,
        candidates: &'a CandidateSet,
        history: &[GuessResult],
    ) -> Option<&'a Word> {
        if candidates.possible_count() == 1 {
            return candidates.current_words().first();
        }

        let stats = EliminationStatistics::for_candidates(candidates);
        let valid = top_word(&stats, candidates, GuessPool::PossibleWords)?;

        match top_word(&stats, candidates, GuessPool::AllWords) {
            Some(any) if !history.iter().any(|r| r.guess() == any) => Some(any),
            _ => Some(valid),
        }
    }

    fn name(&self) -> &'static str {
        "maxeliminations"
    }
}

fn top_word<'a>(
    stats: &EliminationStatistics,
    candidates: &'a CandidateSet,
    pool: GuessPool,
) -> Option<&'a Word> {
    rank_words_unchecked(stats, pool.words(candidates), 1, Ranking::Best)
        .first()
        .map(|&(word, _)| word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ColorNotation;

    fn three(text: &str) -> Word {
        Word::with_length(text, 3).unwrap()
    }

    /// cod, wod and mod still possible; mwc is the best splitter
    fn narrowed() -> CandidateSet {
        let words = ["cod", "wod", "mwc", "zzz", "mod", "ccc"].map(three).to_vec();
        let mut candidates = CandidateSet::new(words, 3).unwrap();
        let result = GuessResult::parse_line("xod\trgg", &ColorNotation::default(), 3).unwrap();
        candidates.eliminate_words(&result).unwrap();
        candidates
    }

    fn played(guess: &str, pattern: &str) -> GuessResult {
        GuessResult::parse_line(&format!("{guess}\t{pattern}"), &ColorNotation::default(), 3)
            .unwrap()
    }

    #[test]
    fn valid_only_picks_possible_word() {
        let candidates = narrowed();
        let guess = ValidOnlyStrategy.select_guess(&candidates, &[]);
        assert_eq!(guess.map(Word::text), Some("cod"));
    }

    #[test]
    fn max_eliminations_picks_any_word() {
        let candidates = narrowed();
        let guess = MaxEliminationsStrategy.select_guess(&candidates, &[]);
        assert_eq!(guess.map(Word::text), Some("mwc"));
    }

    #[test]
    fn max_eliminations_skips_tried_word() {
        let candidates = narrowed();
        let history = [played("mwc", "rrr")];
        let guess = MaxEliminationsStrategy.select_guess(&candidates, &history);
        assert_eq!(guess.map(Word::text), Some("cod"));
    }

    #[test]
    fn max_eliminations_plays_last_word() {
        let mut candidates = narrowed();
        candidates.eliminate_words(&played("mwc", "grr")).unwrap();
        assert_eq!(candidates.possible_count(), 1);

        let guess = MaxEliminationsStrategy.select_guess(&candidates, &[]);
        assert_eq!(guess.map(Word::text), Some("mod"));
    }

    #[test]
    fn strategies_return_none_when_nothing_possible() {
        let mut candidates = narrowed();
        candidates.eliminate_words(&played("zzz", "ggg")).unwrap();

        assert!(ValidOnlyStrategy.select_guess(&candidates, &[]).is_none());
        assert!(MaxEliminationsStrategy.select_guess(&candidates, &[]).is_none());
    }

    #[test]
    fn strategy_from_name() {
        assert_eq!(
            StrategyType::from_name("validonly"),
            Some(StrategyType::ValidOnly(ValidOnlyStrategy))
        );
        assert_eq!(
            StrategyType::from_name("Max-Eliminations"),
            Some(StrategyType::MaxEliminations(MaxEliminationsStrategy))
        );
        assert_eq!(StrategyType::from_name("entropy"), None);
    }

    #[test]
    fn strategy_type_dispatches() {
        let candidates = narrowed();
        let strategy = StrategyType::from_name("maxeliminations").unwrap();
        assert_eq!(strategy.name(), "maxeliminations");
        assert_eq!(
            strategy.select_guess(&candidates, &[]).map(Word::text),
            Some("mwc")
        );
    }
}
