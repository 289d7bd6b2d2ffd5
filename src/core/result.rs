//! Guess results and the consistency test against candidate words
//!
//! A `GuessResult` pairs a guessed word with one colour per letter. It is either
//! derived from a guess and a known solution, or parsed from the pattern a
//! player typed in. Its main job is `accepts`: deciding whether a candidate
//! word could still be the solution given this feedback.

use super::word::{ALPHABET_LEN, letter_index};
use super::{ColorNotation, LetterColor, Word, WordleError};
use std::fmt;
use std::str::FromStr;

/// Feedback for one guess: the guessed word and a colour per letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    guess: Word,
    colors: Vec<LetterColor>,
}

impl GuessResult {
    /// Pair a guess with its colours
    ///
    /// # Errors
    /// Returns `WordleError::LengthMismatch` if there is not exactly one colour per letter.
    pub fn new(guess: Word, colors: Vec<LetterColor>) -> Result<Self, WordleError> {
        if colors.len() != guess.len() {
            return Err(WordleError::LengthMismatch {
                expected: guess.len(),
                found: colors.len(),
            });
        }
        Ok(Self { guess, colors })
    }

    /// Derive the feedback a guess receives when `solution` is the hidden word
    ///
    /// Each position is coloured on its own: Green when the letters match,
    /// Yellow when the guessed letter occurs anywhere in the solution, Gray
    /// otherwise. A repeated guess letter can therefore be Yellow at every
    /// position even when the solution holds a single copy.
    ///
    /// # Errors
    /// Returns `WordleError::LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_elimination::core::{ColorNotation, GuessResult, Word};
    ///
    /// let guess = Word::new("robot").unwrap();
    /// let solution = Word::new("floor").unwrap();
    /// let result = GuessResult::from_guess_and_solution(&guess, &solution).unwrap();
    ///
    /// assert_eq!(result.pattern(&ColorNotation::default()), "yyrgr");
    /// ```
    pub fn from_guess_and_solution(guess: &Word, solution: &Word) -> Result<Self, WordleError> {
        if guess.len() != solution.len() {
            return Err(WordleError::LengthMismatch {
                expected: guess.len(),
                found: solution.len(),
            });
        }

        let colors = guess
            .bytes()
            .iter()
            .zip(solution.bytes())
            .map(|(&guessed, &actual)| {
                if guessed == actual {
                    LetterColor::Green
                } else if solution.has_letter(guessed) {
                    LetterColor::Yellow
                } else {
                    LetterColor::Gray
                }
            })
            .collect();

        Ok(Self {
            guess: guess.clone(),
            colors,
        })
    }

    /// Build a result from a typed colour pattern such as `"ygrrg"`
    ///
    /// No consistency checking is done beyond the symbols and the length.
    ///
    /// # Errors
    /// Returns `WordleError::UnknownColor` naming the first symbol outside the
    /// notation, or `WordleError::LengthMismatch` if the pattern length differs
    /// from the guess length.
    pub fn from_pattern(
        guess: Word,
        pattern: &str,
        notation: &ColorNotation,
    ) -> Result<Self, WordleError> {
        let colors = pattern
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                notation
                    .color(symbol)
                    .ok_or(WordleError::UnknownColor { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(guess, colors)
    }

    /// Parse a serialized line of the form `<guess>\t<pattern>`
    ///
    /// # Errors
    /// Returns `WordleError::MalformedResultLine` if there is no tab separator,
    /// otherwise any error from word validation or pattern parsing.
    pub fn parse_line(
        line: &str,
        notation: &ColorNotation,
        word_length: usize,
    ) -> Result<Self, WordleError> {
        let (guess, pattern) = line
            .trim_end_matches(['\r', '\n'])
            .split_once('\t')
            .ok_or_else(|| WordleError::MalformedResultLine(line.to_string()))?;

        let guess = Word::with_length(guess, word_length)?;
        Self::from_pattern(guess, pattern, notation)
    }

    /// Write the colours as a pattern string
    #[must_use]
    pub fn pattern(&self, notation: &ColorNotation) -> String {
        self.colors.iter().map(|&c| notation.symbol(c)).collect()
    }

    /// Serialize as `<guess>\t<pattern>`
    #[must_use]
    pub fn to_line(&self, notation: &ColorNotation) -> String {
        format!("{}\t{}", self.guess, self.pattern(notation))
    }

    /// Whether `candidate` could be the solution given this feedback
    ///
    /// Green letters must match and Yellow or Gray letters must differ at
    /// their position. Then each letter's count is reconciled: with `k` Green
    /// or Yellow copies in the guess the candidate needs at least `k` copies,
    /// and exactly `k` when the letter is also Gray somewhere.
    ///
    /// # Errors
    /// Returns `WordleError::LengthMismatch` if the candidate length differs
    /// from the guess length.
    ///
    /// # Examples
    /// ```
    /// use wordle_elimination::core::{ColorNotation, GuessResult, Word};
    ///
    /// let notation = ColorNotation::default();
    /// let result =
    ///     GuessResult::from_pattern(Word::new("areae").unwrap(), "ygrrg", &notation).unwrap();
    ///
    /// assert!(result.accepts(&Word::new("crake").unwrap()).unwrap());
    /// assert!(!result.accepts(&Word::new("areas").unwrap()).unwrap());
    /// ```
    pub fn accepts(&self, candidate: &Word) -> Result<bool, WordleError> {
        if candidate.len() != self.guess.len() {
            return Err(WordleError::LengthMismatch {
                expected: self.guess.len(),
                found: candidate.len(),
            });
        }
        Ok(self.accepts_unchecked(candidate))
    }

    /// `accepts` for callers that already guarantee equal lengths
    pub(crate) fn accepts_unchecked(&self, candidate: &Word) -> bool {
        let mut non_gray = [0usize; ALPHABET_LEN];
        let mut grayed = [false; ALPHABET_LEN];

        for ((&guessed, &actual), &color) in self
            .guess
            .bytes()
            .iter()
            .zip(candidate.bytes())
            .zip(&self.colors)
        {
            let index = letter_index(guessed);
            match color {
                LetterColor::Green => {
                    if actual != guessed {
                        return false;
                    }
                    non_gray[index] += 1;
                }
                LetterColor::Yellow => {
                    if actual == guessed {
                        return false;
                    }
                    non_gray[index] += 1;
                }
                LetterColor::Gray => {
                    if actual == guessed {
                        return false;
                    }
                    grayed[index] = true;
                }
            }
        }

        let candidate_counts = candidate.letter_counts();
        (0..ALPHABET_LEN).all(|letter| {
            if grayed[letter] {
                candidate_counts[letter] == non_gray[letter]
            } else {
                candidate_counts[letter] >= non_gray[letter]
            }
        })
    }

    /// Whether every letter is Green
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.colors.iter().all(|&c| c == LetterColor::Green)
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[LetterColor] {
        &self.colors
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line(&ColorNotation::default()))
    }
}

/// Parse a `<guess>\t<pattern>` line in the default notation
///
/// The word length is taken from the guess itself, so lines of any length
/// parse. Use `GuessResult::parse_line` to enforce a configured length.
impl FromStr for GuessResult {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let guess_length = s.split_once('\t').map_or(0, |(guess, _)| guess.len());
        Self::parse_line(s, &ColorNotation::default(), guess_length)
    }
}
