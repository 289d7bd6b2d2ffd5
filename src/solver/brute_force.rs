//! Exact single-step search by exhaustive simulation
//!
//! For every guess and every possible solution this derives the result and
//! counts the possible words it accepts. That is cubic in the number of
//! possible words, which is far too slow for a full dictionary. It exists to
//! check the elimination scores on small sets.

use crate::core::{GuessResult, Word};
use rayon::prelude::*;

/// Total words left over all possible solutions if `guess` is played
///
/// Dividing by the number of possible words gives the expected number of
/// words remaining. Returns `None` if `guess` has a different length.
#[must_use]
pub fn remaining_after(guess: &Word, possible: &[Word]) -> Option<usize> {
    possible.iter().try_fold(0, |total, solution| {
        let result = GuessResult::from_guess_and_solution(guess, solution).ok()?;
        let kept = possible
            .iter()
            .filter(|&word| result.accepts_unchecked(word))
            .count();
        Some(total + kept)
    })
}

/// Expected number of words left after playing `guess`
#[must_use]
pub fn expected_remaining(guess: &Word, possible: &[Word]) -> Option<f64> {
    if possible.is_empty() {
        return Some(0.0);
    }
    remaining_after(guess, possible).map(|total| total as f64 / possible.len() as f64)
}

/// The possible word that leaves the fewest words in total, with that total
///
/// Ties go to the earliest word. Returns `None` when there are no possible words.
///
/// # Examples
/// ```
/// use wordle_elimination::core::Word;
/// use wordle_elimination::solver::brute_force;
///
/// let possible = ["cod", "wod", "mod"].map(|w| Word::with_length(w, 3).unwrap());
/// let (best, total) = brute_force::best_guess(&possible).unwrap();
///
/// assert_eq!(best.text(), "cod");
/// assert_eq!(total, 5);
/// ```
#[must_use]
pub fn best_guess(possible: &[Word]) -> Option<(&Word, usize)> {
    possible
        .par_iter()
        .filter_map(|guess| remaining_after(guess, possible).map(|total| (guess, total)))
        .min_by_key(|&(_, total)| total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three(text: &str) -> Word {
        Word::with_length(text, 3).unwrap()
    }

    #[test]
    fn remaining_counts_every_solution() {
        let possible = ["cod", "wod", "mod"].map(three);

        // cod solves itself and leaves wod+mod for the other two solutions.
        assert_eq!(remaining_after(&three("cod"), &possible), Some(5));
        // zzz learns nothing: all three remain for each solution.
        assert_eq!(remaining_after(&three("zzz"), &possible), Some(9));
        // mwc separates everything.
        assert_eq!(remaining_after(&three("mwc"), &possible), Some(3));
    }

    #[test]
    fn expected_remaining_is_average() {
        let possible = ["cod", "wod", "mod"].map(three);
        let expected = expected_remaining(&three("cod"), &possible).unwrap();
        assert!((expected - 5.0 / 3.0).abs() < 1e-9);
        assert_eq!(expected_remaining(&three("cod"), &[]), Some(0.0));
    }

    #[test]
    fn length_mismatch_is_none() {
        let possible = ["cod"].map(three);
        assert_eq!(remaining_after(&Word::new("crane").unwrap(), &possible), None);
    }

    #[test]
    fn best_guess_prefers_first_on_ties() {
        let possible = ["cod", "wod", "mod"].map(three);
        let (best, total) = best_guess(&possible).unwrap();
        assert_eq!(best.text(), "cod");
        assert_eq!(total, 5);
    }

    #[test]
    fn best_guess_splits_the_set() {
        let possible = ["crane", "crate", "trace", "slate"].map(|w| Word::new(w).unwrap());
        let (best, _) = best_guess(&possible).unwrap();
        let best_total = remaining_after(best, &possible).unwrap();

        for guess in &possible {
            assert!(remaining_after(guess, &possible).unwrap() >= best_total);
        }
    }

    #[test]
    fn best_guess_empty() {
        assert!(best_guess(&[]).is_none());
    }
}
