//! Expected-elimination scoring
//!
//! Approximates how many possible words a guess eliminates, using only the
//! letter statistics of the possible set. Each letter is scored on its own as
//! if it would turn Green, Yellow or Gray with the frequencies the statistics
//! predict, and the word score is the mean over its letters.

use super::EliminationStatistics;
use crate::core::{ALPHABET_LEN, CandidateSet, Word, WordleError, letter_index};
use rayon::prelude::*;

/// Sort direction for rankings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ranking {
    /// Highest expected eliminations first
    Best,
    /// Lowest expected eliminations first
    Worst,
}

/// Which words are eligible as guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessPool {
    /// Any dictionary word, even ones already ruled out
    AllWords,
    /// Only words that could still be the solution
    PossibleWords,
}

impl GuessPool {
    /// The words of `candidates` this pool selects
    #[must_use]
    pub fn words(self, candidates: &CandidateSet) -> &[Word] {
        match self {
            Self::AllWords => candidates.all_words(),
            Self::PossibleWords => candidates.current_words(),
        }
    }
}

/// Expected number of words eliminated by `letter` at `position`
///
/// A letter already played earlier in the same guess only adds information
/// about its position. Otherwise its Green, Yellow and Gray outcomes are
/// weighted by how many possible words would produce each of them.
#[must_use]
pub fn score_letter(
    stats: &EliminationStatistics,
    letter: u8,
    position: usize,
    seen_earlier: bool,
) -> f64 {
    let total = stats.subset_size();
    if total == 0 {
        return 0.0;
    }

    let in_position = stats.in_position_count(letter, position);
    if seen_earlier {
        return ((total - in_position) * in_position) as f64 / total as f64;
    }

    let containing = stats.containing_count(letter);

    // Green keeps only the in-position words.
    let green_weight = in_position;
    let green_eliminated = total - in_position;

    // Yellow drops the words without the letter and those with it here.
    let yellow_weight = containing - in_position;
    let yellow_eliminated = (total - containing) + in_position;

    // Gray drops every word containing the letter.
    let gray_weight = total - yellow_weight - green_weight;
    let gray_eliminated = containing;

    let eliminated = green_eliminated * green_weight
        + yellow_eliminated * yellow_weight
        + gray_eliminated * gray_weight;

    eliminated as f64 / total as f64
}

/// Mean expected eliminations over the letters of `word`
///
/// # Errors
/// Returns `WordleError::LengthMismatch` if the word length differs from the
/// length the statistics were computed for.
///
/// # Examples
/// ```
/// use wordle_elimination::core::Word;
/// use wordle_elimination::solver::{EliminationStatistics, score_word};
///
/// let possible = ["cod", "wod", "mod"].map(|w| Word::with_length(w, 3).unwrap());
/// let stats = EliminationStatistics::compute(&possible, 3).unwrap();
///
/// let spread = score_word(&stats, &Word::with_length("mwc", 3).unwrap()).unwrap();
/// let known = score_word(&stats, &Word::with_length("zzz", 3).unwrap()).unwrap();
/// assert!(spread > known);
/// assert_eq!(known, 0.0);
/// ```
pub fn score_word(stats: &EliminationStatistics, word: &Word) -> Result<f64, WordleError> {
    if word.len() != stats.word_length() {
        return Err(WordleError::LengthMismatch {
            expected: stats.word_length(),
            found: word.len(),
        });
    }
    Ok(score_word_unchecked(stats, word))
}

fn score_word_unchecked(stats: &EliminationStatistics, word: &Word) -> f64 {
    if word.is_empty() {
        return 0.0;
    }

    let mut seen = [false; ALPHABET_LEN];
    let total: f64 = word
        .bytes()
        .iter()
        .enumerate()
        .map(|(position, &letter)| {
            let index = letter_index(letter);
            let score = score_letter(stats, letter, position, seen[index]);
            seen[index] = true;
            score
        })
        .sum();

    total / word.len() as f64
}

/// Score `words` and return the first `count` in `ranking` order
///
/// Equal scores keep the order of `words`. Scoring runs in parallel but the
/// result is the same as a sequential run.
///
/// # Errors
/// Returns `WordleError::LengthMismatch` if any word has the wrong length.
pub fn rank_words<'a>(
    stats: &EliminationStatistics,
    words: &'a [Word],
    count: usize,
    ranking: Ranking,
) -> Result<Vec<(&'a Word, f64)>, WordleError> {
    if let Some(word) = words.iter().find(|w| w.len() != stats.word_length()) {
        return Err(WordleError::LengthMismatch {
            expected: stats.word_length(),
            found: word.len(),
        });
    }
    Ok(rank_words_unchecked(stats, words, count, ranking))
}

pub(crate) fn rank_words_unchecked<'a>(
    stats: &EliminationStatistics,
    words: &'a [Word],
    count: usize,
    ranking: Ranking,
) -> Vec<(&'a Word, f64)> {
    let mut scored: Vec<(&Word, f64)> = words
        .par_iter()
        .map(|word| (word, score_word_unchecked(stats, word)))
        .collect();

    match ranking {
        Ranking::Best => scored.sort_by(|(_, a), (_, b)| b.total_cmp(a)),
        Ranking::Worst => scored.sort_by(|(_, a), (_, b)| a.total_cmp(b)),
    }

    scored.truncate(count);
    scored
}

/// Rank guesses from `pool` against the words still possible in `candidates`
///
/// # Examples
/// ```
/// use wordle_elimination::core::{CandidateSet, Word};
/// use wordle_elimination::solver::{GuessPool, Ranking, top_scoring_words};
///
/// let words = ["crane", "slate", "irate", "fuzzy"].map(|w| Word::new(w).unwrap()).to_vec();
/// let candidates = CandidateSet::new(words, 5).unwrap();
///
/// let top = top_scoring_words(&candidates, 2, GuessPool::AllWords, Ranking::Worst);
/// assert_eq!(top.len(), 2);
/// assert!(top[0].1 <= top[1].1);
/// ```
#[must_use]
pub fn top_scoring_words(
    candidates: &CandidateSet,
    count: usize,
    pool: GuessPool,
    ranking: Ranking,
) -> Vec<(&Word, f64)> {
    let stats = EliminationStatistics::for_candidates(candidates);
    rank_words_unchecked(&stats, pool.words(candidates), count, ranking)
}
