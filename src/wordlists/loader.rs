//! Word list loading utilities
//!
//! Dictionaries are plain text with one word per line. Lines are trimmed and
//! lowercased; blank lines are ignored, invalid words are logged and skipped,
//! and duplicates are dropped keeping the first occurrence.

use crate::core::Word;
use log::{info, warn};
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Load a dictionary of `word_length`-letter words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordle_elimination::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let words = load_from_reader(BufReader::new(File::open(path)?), word_length)?;
    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Load a dictionary from any line-oriented reader
///
/// # Errors
///
/// Returns an I/O error if reading fails.
pub fn load_from_reader<R: BufRead>(reader: R, word_length: usize) -> io::Result<Vec<Word>> {
    let mut words = Vec::new();
    let mut seen = FxHashSet::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match Word::with_length(trimmed, word_length) {
            Ok(word) => {
                if seen.insert(word.clone()) {
                    words.push(word);
                }
            }
            Err(e) => warn!("skipping line {}: {e}", index + 1),
        }
    }

    Ok(words)
}

/// Convert a string slice to a dictionary, with the same rules as the loaders
///
/// # Examples
/// ```
/// use wordle_elimination::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "CRANE", "toolong", "slate"], 5);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], word_length: usize) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    slice
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .filter_map(|s| match Word::with_length(s, word_length) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!("skipping \"{s}\": {e}");
                None
            }
        })
        .filter(|word| seen.insert(word.clone()))
        .collect()
}
