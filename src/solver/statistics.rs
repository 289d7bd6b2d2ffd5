//! Letter statistics over the possible words
//!
//! The elimination scorer never looks at individual words. It works from two
//! count tables computed once per subset: how many words contain each letter,
//! and how many words have each letter at each position.

use crate::core::{ALPHABET_LEN, CandidateSet, Word, WordleError, index_letter, letter_index};
use log::debug;
use std::cmp::Reverse;

/// Read-only letter counts over a set of words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EliminationStatistics {
    subset_size: usize,
    containing_counts: [usize; ALPHABET_LEN],
    in_position_counts: Vec<[usize; ALPHABET_LEN]>,
}

impl EliminationStatistics {
    /// Count letters over `words`, all of which must have `word_length` letters
    ///
    /// # Errors
    /// Returns `WordleError::LengthMismatch` if any word has another length.
    ///
    /// # Examples
    /// ```
    /// use wordle_elimination::core::Word;
    /// use wordle_elimination::solver::EliminationStatistics;
    ///
    /// let words = ["cod", "wod", "mod"].map(|w| Word::with_length(w, 3).unwrap());
    /// let stats = EliminationStatistics::compute(&words, 3).unwrap();
    ///
    /// assert_eq!(stats.containing_count(b'o'), 3);
    /// assert_eq!(stats.in_position_count(b'c', 0), 1);
    /// ```
    pub fn compute(words: &[Word], word_length: usize) -> Result<Self, WordleError> {
        if let Some(word) = words.iter().find(|w| w.len() != word_length) {
            return Err(WordleError::LengthMismatch {
                expected: word_length,
                found: word.len(),
            });
        }
        Ok(Self::compute_unchecked(words, word_length))
    }

    /// Count letters over the words still possible in `candidates`
    #[must_use]
    pub fn for_candidates(candidates: &CandidateSet) -> Self {
        Self::compute_unchecked(candidates.current_words(), candidates.word_length())
    }

    fn compute_unchecked(words: &[Word], word_length: usize) -> Self {
        let mut containing_counts = [0; ALPHABET_LEN];
        let mut in_position_counts = vec![[0; ALPHABET_LEN]; word_length];

        for word in words {
            let mut seen = [false; ALPHABET_LEN];
            for (position, &letter) in word.bytes().iter().enumerate() {
                let index = letter_index(letter);
                in_position_counts[position][index] += 1;
                seen[index] = true;
            }
            for (count, _) in containing_counts.iter_mut().zip(seen).filter(|(_, s)| *s) {
                *count += 1;
            }
        }

        debug!("computed letter statistics over {} words", words.len());

        Self {
            subset_size: words.len(),
            containing_counts,
            in_position_counts,
        }
    }

    /// Number of words the statistics were computed over
    #[inline]
    #[must_use]
    pub const fn subset_size(&self) -> usize {
        self.subset_size
    }

    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.in_position_counts.len()
    }

    /// Number of words containing `letter` at least once
    #[inline]
    #[must_use]
    pub const fn containing_count(&self, letter: u8) -> usize {
        self.containing_counts[letter_index(letter)]
    }

    /// Number of words with `letter` at `position`
    ///
    /// # Panics
    /// Panics if `position >= self.word_length()`
    #[inline]
    #[must_use]
    pub fn in_position_count(&self, letter: u8, position: usize) -> usize {
        self.in_position_counts[position][letter_index(letter)]
    }

    /// Both tables as text, each sorted by descending count
    ///
    /// ```text
    /// Words containing:
    /// d: 3, o: 3, c: 1, ...
    /// Words with letter in position:
    /// (d, 2): 3, (o, 1): 3, (c, 0): 1, ...
    /// ```
    #[must_use]
    pub fn summary(&self) -> String {
        let mut containing: Vec<(char, usize)> = self
            .containing_counts
            .iter()
            .enumerate()
            .map(|(index, &count)| (char::from(index_letter(index)), count))
            .collect();
        containing.sort_by_key(|&(_, count)| Reverse(count));

        let mut in_position: Vec<(char, usize, usize)> = (0..ALPHABET_LEN)
            .flat_map(|index| {
                self.in_position_counts
                    .iter()
                    .enumerate()
                    .map(move |(position, counts)| {
                        (char::from(index_letter(index)), position, counts[index])
                    })
            })
            .collect();
        in_position.sort_by_key(|&(_, _, count)| Reverse(count));

        let mut summary = String::from("Words containing:\n");
        let containing: Vec<String> = containing
            .iter()
            .map(|(letter, count)| format!("{letter}: {count}"))
            .collect();
        summary.push_str(&containing.join(", "));

        summary.push_str("\nWords with letter in position:\n");
        let in_position: Vec<String> = in_position
            .iter()
            .map(|(letter, position, count)| format!("({letter}, {position}): {count}"))
            .collect();
        summary.push_str(&in_position.join(", "));

        summary
    }
}
