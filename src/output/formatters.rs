//! Formatting utilities for terminal output

use crate::commands::RankedWord;
use crate::core::{GuessResult, LetterColor};
use colored::Colorize;
use std::fmt::Write;

/// Format ranked words as a `Rank\tWord\tScore` table, scores to 3 decimals
#[must_use]
pub fn format_ranking(words: &[RankedWord]) -> String {
    let mut table = String::from("Rank\tWord\tScore\n");
    for (index, ranked) in words.iter().enumerate() {
        let _ = writeln!(table, "{}\t{}\t{:.3}", index + 1, ranked.word, ranked.score);
    }
    table
}

/// Format a result as emoji squares
#[must_use]
pub fn result_to_emoji(result: &GuessResult) -> String {
    result
        .colors()
        .iter()
        .map(|color| match color {
            LetterColor::Green => '🟩',
            LetterColor::Yellow => '🟨',
            LetterColor::Gray => '⬜',
        })
        .collect()
}

/// Format a result as coloured letter tiles
#[must_use]
pub fn result_to_tiles(result: &GuessResult) -> String {
    result
        .guess()
        .text()
        .to_uppercase()
        .chars()
        .zip(result.colors())
        .map(|(letter, color)| {
            let tile = format!(" {letter} ");
            match color {
                LetterColor::Green => tile.black().on_green().bold().to_string(),
                LetterColor::Yellow => tile.black().on_yellow().bold().to_string(),
                LetterColor::Gray => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(word: &str, score: f64) -> RankedWord {
        RankedWord {
            word: word.to_string(),
            score,
        }
    }

    #[test]
    fn ranking_table() {
        let table = format_ranking(&[ranked("mwc", 4.0 / 3.0), ranked("cod", 4.0 / 9.0)]);
        assert_eq!(table, "Rank\tWord\tScore\n1\tmwc\t1.333\n2\tcod\t0.444\n");
    }

    #[test]
    fn empty_ranking_has_header() {
        assert_eq!(format_ranking(&[]), "Rank\tWord\tScore\n");
    }

    #[test]
    fn emoji_squares() {
        let result: GuessResult = "crane\tgyrrg".parse().unwrap();
        assert_eq!(result_to_emoji(&result), "🟩🟨⬜⬜🟩");
    }

    #[test]
    fn tiles_contain_letters() {
        colored::control::set_override(false);
        let result: GuessResult = "crane\tgyrrg".parse().unwrap();
        assert_eq!(result_to_tiles(&result), " C  R  A  N  E ");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 6.0, 6), "░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(6.0, 6.0, 6), "██████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(3.0, 6.0, 6), "███░░░");
    }
}
