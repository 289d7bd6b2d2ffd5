//! Word analysis command
//!
//! Compares the heuristic elimination score of a word with the exact
//! expected number of remaining words, when the possible set is small enough
//! to enumerate.

use crate::core::{CandidateSet, ColorNotation, GuessResult, Word};
use crate::solver::{
    EliminationStatistics, GuessPool, Ranking, brute_force, score_word, top_scoring_words,
};
use anyhow::{Context, Result, bail};

/// Largest possible set the exhaustive search is run on
pub const BRUTE_FORCE_LIMIT: usize = 300;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    /// Expected eliminations from the letter statistics
    pub score: f64,
    /// 1-based position among all dictionary words by score
    pub rank: usize,
    pub dictionary_size: usize,
    pub possible_words: usize,
    /// Exact expected words left, if the possible set was small enough
    pub expected_remaining: Option<f64>,
    /// Possible word with the lowest exact expectation, if computed
    pub best_exact: Option<(String, f64)>,
}

/// Narrow `candidates` with results typed as guess/pattern pairs
///
/// # Errors
///
/// Returns an error if a guess or pattern is invalid.
pub fn apply_results(
    candidates: &mut CandidateSet,
    results: &[(String, String)],
    notation: &ColorNotation,
) -> Result<()> {
    for (guess, pattern) in results {
        let guess = Word::with_length(guess.as_str(), candidates.word_length())?;
        let result = GuessResult::from_pattern(guess, pattern, notation)
            .with_context(|| format!("invalid result \"{pattern}\""))?;
        candidates.eliminate_words(&result)?;
    }
    Ok(())
}

/// Analyze `word` against the words still possible in `candidates`
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid for the configured length
/// - The word is not in the dictionary
pub fn analyze_word(word: &str, candidates: &CandidateSet) -> Result<AnalysisResult> {
    let word_obj = Word::with_length(word, candidates.word_length())
        .with_context(|| format!("invalid word \"{word}\""))?;

    if !candidates.is_in_dictionary(word_obj.text()) {
        bail!("word \"{word}\" not in word list");
    }

    let stats = EliminationStatistics::for_candidates(candidates);
    let score = score_word(&stats, &word_obj)?;

    let ranked = top_scoring_words(
        candidates,
        candidates.all_words().len(),
        GuessPool::AllWords,
        Ranking::Best,
    );
    let rank = ranked
        .iter()
        .position(|(w, _)| *w == &word_obj)
        .map_or(ranked.len(), |index| index + 1);

    let possible = candidates.current_words();
    let (expected_remaining, best_exact) = if possible.len() <= BRUTE_FORCE_LIMIT {
        let expected = brute_force::expected_remaining(&word_obj, possible);
        let best = brute_force::best_guess(possible)
            .map(|(w, total)| (w.text().to_string(), total as f64 / possible.len() as f64));
        (expected, best)
    } else {
        (None, None)
    };

    Ok(AnalysisResult {
        word: word_obj.text().to_string(),
        score,
        rank,
        dictionary_size: candidates.all_words().len(),
        possible_words: possible.len(),
        expected_remaining,
        best_exact,
    })
}
