//! Error type shared by the core domain types

use thiserror::Error;

/// Errors raised by word construction, result parsing and filtering
///
/// All of these are local caller errors; none of them is retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordleError {
    /// The word does not have the configured length.
    #[error("expected a word of length {expected}, found \"{word}\" of length {found}")]
    InvalidLength {
        word: String,
        expected: usize,
        found: usize,
    },

    /// The word contains a character outside of `a..=z`.
    #[error("word \"{word}\" contains '{character}', only the letters a-z are supported")]
    InvalidCharacter { word: String, character: char },

    /// Two words (or a word and a result) that must line up have different lengths.
    #[error("length mismatch: expected {expected} letters, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// A pattern string contains a symbol that is not part of the colour notation.
    #[error("unknown colour symbol '{symbol}' at position {position}")]
    UnknownColor { symbol: char, position: usize },

    /// A colour notation is not written as exactly three symbols.
    #[error("colour notation \"{0}\" must be three symbols: green, yellow, gray")]
    InvalidNotation(String),

    /// A colour notation uses the same symbol for two colours.
    #[error("colour notation must use three distinct symbols, '{0}' is repeated")]
    DuplicateColorSymbol(char),

    /// A serialized result line is not of the form `<guess>\t<pattern>`.
    #[error("malformed result line: \"{0}\"")]
    MalformedResultLine(String),

    /// The word is not part of the dictionary.
    #[error("\"{0}\" is not in the dictionary")]
    UnknownWord(String),
}
