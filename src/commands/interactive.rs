//! Interactive helper mode
//!
//! Each turn shows the top-scoring words, asks which word was played and
//! which colours it got, then narrows the possible words. Reads and writes
//! through any `BufRead`/`Write` pair so a session can be scripted.

use super::rank::rank_words;
use crate::config::GameConfig;
use crate::core::{CandidateSet, GuessResult, LetterColor, Word, WordleError};
use crate::output::formatters::format_ranking;
use crate::solver::{GuessPool, Ranking};
use anyhow::Result;
use std::io::{BufRead, Write};

/// How an interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Won { tries: usize },
    /// Every dictionary word was ruled out by the results entered
    NoCandidates { tries: usize },
    Quit,
    InputClosed,
}

enum Reply<T> {
    Value(T),
    Quit,
    Closed,
}

/// Run the interactive loop until a win, `quit`, end of input, or no
/// possible word is left
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_interactive<R: BufRead, W: Write>(
    candidates: &mut CandidateSet,
    config: &GameConfig,
    input: &mut R,
    output: &mut W,
) -> Result<SessionOutcome> {
    let mut tries = 0;

    loop {
        if candidates.possible_count() == 0 {
            writeln!(output, "No known word fits these results.")?;
            return Ok(SessionOutcome::NoCandidates { tries });
        }

        writeln!(output, "Computing the top words.")?;
        let all = rank_words(
            candidates,
            config.words_to_show,
            GuessPool::AllWords,
            Ranking::Best,
        );
        let current = rank_words(
            candidates,
            config.words_to_show,
            GuessPool::PossibleWords,
            Ranking::Best,
        );
        writeln!(output, "All top words:")?;
        write!(output, "{}", format_ranking(&all.words))?;
        writeln!(output, "Top words that have not been eliminated:")?;
        write!(output, "{}", format_ranking(&current.words))?;

        match candidates.possible_count() {
            1 => writeln!(output, "There is 1 possible word.")?,
            n => writeln!(output, "There are {n} possible words.")?,
        }

        writeln!(output, "\nPlease play another word.")?;
        writeln!(output, "What word did you play?")?;
        let guess = match read_guess(candidates.word_length(), input, output)? {
            Reply::Value(guess) => guess,
            Reply::Quit => return Ok(SessionOutcome::Quit),
            Reply::Closed => return Ok(SessionOutcome::InputClosed),
        };

        let notation = &config.notation;
        writeln!(
            output,
            "What was the result?\nEnter a combination of '{}', '{}', and '{}', \
             where '{}' means green, '{}' means yellow, and '{}' means gray.",
            notation.symbol(LetterColor::Green),
            notation.symbol(LetterColor::Yellow),
            notation.symbol(LetterColor::Gray),
            notation.symbol(LetterColor::Green),
            notation.symbol(LetterColor::Yellow),
            notation.symbol(LetterColor::Gray),
        )?;
        let result = match read_result(guess, config, input, output)? {
            Reply::Value(result) => result,
            Reply::Quit => return Ok(SessionOutcome::Quit),
            Reply::Closed => return Ok(SessionOutcome::InputClosed),
        };

        tries += 1;
        if result.is_win() {
            writeln!(output, "Congratulations! You finished in {tries} tries.")?;
            return Ok(SessionOutcome::Won { tries });
        }

        candidates.eliminate_words(&result)?;
    }
}

/// Read one trimmed line, or `None` at end of input
fn next_line<R: BufRead>(input: &mut R) -> Result<Reply<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(Reply::Closed);
    }
    let line = line.trim().to_string();
    if matches!(line.as_str(), "quit" | "q" | "exit") {
        return Ok(Reply::Quit);
    }
    Ok(Reply::Value(line))
}

/// Keep asking until a word of the right length and alphabet is entered
fn read_guess<R: BufRead, W: Write>(
    word_length: usize,
    input: &mut R,
    output: &mut W,
) -> Result<Reply<Word>> {
    loop {
        let line = match next_line(input)? {
            Reply::Value(line) => line,
            Reply::Quit => return Ok(Reply::Quit),
            Reply::Closed => return Ok(Reply::Closed),
        };

        match Word::with_length(line, word_length) {
            Ok(word) => return Ok(Reply::Value(word)),
            Err(WordleError::InvalidLength { expected, .. }) => {
                writeln!(output, "Must be {expected} characters.")?;
            }
            Err(_) => writeln!(output, "Please only use alphabetical characters.")?,
        }
    }
}

/// Keep asking until a valid colour pattern for `guess` is entered
fn read_result<R: BufRead, W: Write>(
    guess: Word,
    config: &GameConfig,
    input: &mut R,
    output: &mut W,
) -> Result<Reply<GuessResult>> {
    let notation = &config.notation;
    loop {
        let line = match next_line(input)? {
            Reply::Value(line) => line,
            Reply::Quit => return Ok(Reply::Quit),
            Reply::Closed => return Ok(Reply::Closed),
        };

        if line.chars().count() != guess.len() {
            writeln!(output, "Must be {} characters.", guess.len())?;
            continue;
        }

        match GuessResult::from_pattern(guess.clone(), &line, notation) {
            Ok(result) => return Ok(Reply::Value(result)),
            Err(_) => writeln!(
                output,
                "Please only enter '{}', '{}', or '{}'.",
                notation.symbol(LetterColor::Green),
                notation.symbol(LetterColor::Yellow),
                notation.symbol(LetterColor::Gray),
            )?,
        }
    }
}
