//! Core domain types for the elimination solver
//!
//! Words, letter colours, guess results with their consistency test, and the
//! candidate set that results are applied to.

mod candidates;
mod color;
mod error;
mod result;
mod word;

pub use candidates::CandidateSet;
pub use color::{ColorNotation, LetterColor};
pub use error::WordleError;
pub use result::GuessResult;
pub use word::{ALPHABET_LEN, DEFAULT_WORD_LENGTH, Word};

pub(crate) use word::{index_letter, letter_index};
