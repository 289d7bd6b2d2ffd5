//! Letter colours and their textual notation

use super::WordleError;
use std::fmt;
use std::str::FromStr;

/// Feedback colour for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterColor {
    /// Letter is in the solution at this position
    Green,
    /// Letter is in the solution at another position
    Yellow,
    /// Letter is not in the solution
    Gray,
}

/// The three symbols used to write a colour pattern as text
///
/// The default notation is `g` for green, `y` for yellow and `r` for gray
/// (the "red" of the console prompt).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorNotation {
    green: char,
    yellow: char,
    gray: char,
}

impl ColorNotation {
    /// Create a notation from three distinct symbols
    ///
    /// # Errors
    /// Returns `WordleError::DuplicateColorSymbol` if two colours share a symbol.
    pub fn new(green: char, yellow: char, gray: char) -> Result<Self, WordleError> {
        if green == yellow || green == gray {
            return Err(WordleError::DuplicateColorSymbol(green));
        }
        if yellow == gray {
            return Err(WordleError::DuplicateColorSymbol(yellow));
        }
        Ok(Self {
            green,
            yellow,
            gray,
        })
    }

    /// Symbol written for a colour
    #[inline]
    #[must_use]
    pub const fn symbol(&self, color: LetterColor) -> char {
        match color {
            LetterColor::Green => self.green,
            LetterColor::Yellow => self.yellow,
            LetterColor::Gray => self.gray,
        }
    }

    /// Colour named by a symbol, if the symbol belongs to this notation
    #[inline]
    #[must_use]
    pub fn color(&self, symbol: char) -> Option<LetterColor> {
        if symbol == self.green {
            Some(LetterColor::Green)
        } else if symbol == self.yellow {
            Some(LetterColor::Yellow)
        } else if symbol == self.gray {
            Some(LetterColor::Gray)
        } else {
            None
        }
    }
}

impl Default for ColorNotation {
    fn default() -> Self {
        Self {
            green: 'g',
            yellow: 'y',
            gray: 'r',
        }
    }
}

impl fmt::Display for ColorNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.green, self.yellow, self.gray)
    }
}

/// Parse a notation written as three symbols in green, yellow, gray order
///
/// ```
/// use wordle_elimination::core::{ColorNotation, LetterColor};
///
/// let notation: ColorNotation = "GY-".parse().unwrap();
/// assert_eq!(notation.color('-'), Some(LetterColor::Gray));
/// ```
impl FromStr for ColorNotation {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().collect();
        match symbols.as_slice() {
            &[green, yellow, gray] => Self::new(green, yellow, gray),
            _ => Err(WordleError::InvalidNotation(s.to_string())),
        }
    }
}
