//! Dictionary plus the shrinking set of still-possible solutions

use super::{GuessResult, Word, WordleError};
use log::debug;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// The full dictionary and the words not yet ruled out
///
/// The dictionary never changes. The possible set starts as the whole
/// dictionary and only ever shrinks through `eliminate_words`.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    all_words: Vec<Word>,
    current_words: Vec<Word>,
    word_length: usize,
}

impl CandidateSet {
    /// Start a game over `words`, all of which must have `word_length` letters
    ///
    /// # Errors
    /// Returns `WordleError::LengthMismatch` for the first word of another length.
    ///
    /// # Examples
    /// ```
    /// use wordle_elimination::core::{CandidateSet, GuessResult, Word};
    ///
    /// let words = ["crane", "crate", "slate"].map(|w| Word::new(w).unwrap()).to_vec();
    /// let mut candidates = CandidateSet::new(words, 5).unwrap();
    ///
    /// let result: GuessResult = "crane\tgggrg".parse().unwrap();
    /// candidates.eliminate_words(&result).unwrap();
    ///
    /// assert_eq!(candidates.current_words(), &[Word::new("crate").unwrap()]);
    /// assert_eq!(candidates.all_words().len(), 3);
    /// ```
    pub fn new(words: Vec<Word>, word_length: usize) -> Result<Self, WordleError> {
        if let Some(word) = words.iter().find(|w| w.len() != word_length) {
            return Err(WordleError::LengthMismatch {
                expected: word_length,
                found: word.len(),
            });
        }

        Ok(Self {
            current_words: words.clone(),
            all_words: words,
            word_length,
        })
    }

    /// Every dictionary word, in load order
    #[inline]
    #[must_use]
    pub fn all_words(&self) -> &[Word] {
        &self.all_words
    }

    /// Words still consistent with every result seen so far, in dictionary order
    #[inline]
    #[must_use]
    pub fn current_words(&self) -> &[Word] {
        &self.current_words
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of words still possible
    #[inline]
    #[must_use]
    pub fn possible_count(&self) -> usize {
        self.current_words.len()
    }

    /// Whether `text` is a dictionary word
    #[must_use]
    pub fn is_in_dictionary(&self, text: &str) -> bool {
        self.find(text).is_some()
    }

    /// Look up a dictionary word by its text
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        self.all_words.iter().find(|w| w.text() == text)
    }

    /// Drop every possible word that `result` rules out
    ///
    /// Returns the number of words removed. Applying the same result again
    /// removes nothing.
    ///
    /// # Errors
    /// Returns `WordleError::LengthMismatch` if the result was built for another word length.
    pub fn eliminate_words(&mut self, result: &GuessResult) -> Result<usize, WordleError> {
        if result.len() != self.word_length {
            return Err(WordleError::LengthMismatch {
                expected: self.word_length,
                found: result.len(),
            });
        }

        let before = self.current_words.len();
        self.current_words.retain(|word| result.accepts_unchecked(word));
        let after = self.current_words.len();

        debug!("{result}: {before} -> {after} possible words");
        Ok(before - after)
    }

    /// Pick up to `count` distinct dictionary words at random
    #[must_use]
    pub fn random_subset<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Word> {
        self.all_words
            .choose_multiple(rng, count)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn candidate_set(words: &[&str]) -> CandidateSet {
        let words = words.iter().map(|&w| Word::new(w).unwrap()).collect();
        CandidateSet::new(words, 5).unwrap()
    }

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn starts_with_whole_dictionary() {
        let candidates = candidate_set(&["crane", "slate", "irate"]);
        assert_eq!(candidates.possible_count(), 3);
        assert_eq!(candidates.all_words(), candidates.current_words());
    }

    #[test]
    fn rejects_wrong_length_words() {
        let words = vec![
            Word::with_length("crane", 5).unwrap(),
            Word::with_length("cranes", 6).unwrap(),
        ];
        assert_eq!(
            CandidateSet::new(words, 5).unwrap_err(),
            WordleError::LengthMismatch {
                expected: 5,
                found: 6
            }
        );
    }

    #[test]
    fn eliminate_keeps_consistent_words_in_order() {
        let mut candidates = candidate_set(&["crake", "beret", "raise", "areas", "flake"]);
        let result: GuessResult = "areae\tygrrg".parse().unwrap();

        let removed = candidates.eliminate_words(&result).unwrap();

        assert_eq!(removed, 4);
        assert_eq!(texts(candidates.current_words()), ["crake"]);
        assert_eq!(candidates.all_words().len(), 5);
    }

    #[test]
    fn eliminate_is_idempotent_and_monotonic() {
        let mut candidates = candidate_set(&["photo", "clump", "flack", "batch", "fleet"]);
        let result: GuessResult = "raise\trrrrr".parse().unwrap();

        candidates.eliminate_words(&result).unwrap();
        let after_first = candidates.current_words().to_vec();
        assert_eq!(texts(&after_first), ["photo", "clump"]);

        assert_eq!(candidates.eliminate_words(&result).unwrap(), 0);
        assert_eq!(candidates.current_words(), after_first.as_slice());
    }

    #[test]
    fn eliminate_to_empty_is_not_an_error() {
        let mut candidates = candidate_set(&["crane", "slate"]);
        let result: GuessResult = "zzzzz\tggggg".parse().unwrap();

        assert_eq!(candidates.eliminate_words(&result).unwrap(), 2);
        assert_eq!(candidates.possible_count(), 0);
    }

    #[test]
    fn eliminate_length_mismatch() {
        let mut candidates = candidate_set(&["crane"]);
        let result = GuessResult::parse_line(
            "cranes\tgggggg",
            &crate::core::ColorNotation::default(),
            6,
        )
        .unwrap();

        assert!(candidates.eliminate_words(&result).is_err());
        assert_eq!(candidates.possible_count(), 1);
    }

    #[test]
    fn dictionary_membership() {
        let candidates = candidate_set(&["crane", "slate"]);
        assert!(candidates.is_in_dictionary("crane"));
        assert!(!candidates.is_in_dictionary("irate"));
        assert_eq!(candidates.find("slate").map(Word::text), Some("slate"));
    }

    #[test]
    fn random_subset_is_distinct_and_bounded() {
        let candidates = candidate_set(&["crane", "slate", "irate", "crate", "grate"]);
        let mut rng = StdRng::seed_from_u64(7);

        let subset = candidates.random_subset(3, &mut rng);
        assert_eq!(subset.len(), 3);
        assert!(subset.iter().all(|w| candidates.all_words().contains(w)));
        assert_ne!(subset[0], subset[1]);
        assert_ne!(subset[1], subset[2]);
        assert_ne!(subset[0], subset[2]);

        assert_eq!(candidates.random_subset(50, &mut rng).len(), 5);
    }
}
