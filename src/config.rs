//! Per-session settings

use crate::core::{ColorNotation, DEFAULT_WORD_LENGTH};

/// Settings shared by every command of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Letters per word; the dictionary is filtered to this length
    pub word_length: usize,
    /// A simulated game taking more guesses than this counts as a failure
    pub max_tries: usize,
    /// Rows shown per ranking
    pub words_to_show: usize,
    pub notation: ColorNotation,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_tries: 6,
            words_to_show: 10,
            notation: ColorNotation::default(),
        }
    }
}
