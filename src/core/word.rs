//! Word representation
//!
//! A Word stores a lowercase word of the configured length. Letters are kept as
//! ASCII bytes and mapped onto the dense `0..ALPHABET_LEN` index space used by
//! the per-letter counters.

use super::WordleError;
use std::fmt;

/// Number of letters in the supported alphabet (`a..=z`)
pub const ALPHABET_LEN: usize = 26;

/// Word length of a standard Wordle game
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Map a lowercase ASCII letter to its index in `0..ALPHABET_LEN`
#[inline]
pub(crate) const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// Map an index in `0..ALPHABET_LEN` back to its lowercase ASCII letter
#[inline]
pub(crate) const fn index_letter(index: usize) -> u8 {
    b'a' + index as u8
}

/// A dictionary word of fixed length over the letters `a..=z`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: Box<str>,
}

impl Word {
    /// Create a word of the standard length (5)
    ///
    /// # Errors
    /// Returns `WordleError` if the word is not exactly 5 letters from `a..=z`
    /// (after lowercasing).
    ///
    /// # Examples
    /// ```
    /// use wordle_elimination::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordleError> {
        Self::with_length(text, DEFAULT_WORD_LENGTH)
    }

    /// Create a word that must have exactly `length` letters
    ///
    /// # Errors
    /// Returns `WordleError::InvalidLength` for a wrong length and
    /// `WordleError::InvalidCharacter` for anything outside `a..=z`.
    pub fn with_length(text: impl Into<String>, length: usize) -> Result<Self, WordleError> {
        let text: String = text.into().to_lowercase();

        if let Some(character) = text.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(WordleError::InvalidCharacter {
                word: text,
                character,
            });
        }

        // Only ASCII remains, so the byte length is the letter count.
        if text.len() != length {
            let found = text.len();
            return Err(WordleError::InvalidLength {
                word: text,
                expected: length,
                found,
            });
        }

        Ok(Self {
            text: text.into_boxed_str(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters as ASCII bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.bytes().contains(&letter)
    }

    /// Number of occurrences of each letter, indexed by `letter - b'a'`
    #[must_use]
    pub fn letter_counts(&self) -> [usize; ALPHABET_LEN] {
        let mut counts = [0usize; ALPHABET_LEN];
        for &letter in self.bytes() {
            counts[letter_index(letter)] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
