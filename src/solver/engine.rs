//! Game simulation against a known solution

use super::strategy::Strategy;
use crate::core::{CandidateSet, GuessResult, Word, WordleError};
use log::debug;

/// Outcome of one simulated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub solution: Word,
    /// One result per guess, in play order
    pub steps: Vec<GuessResult>,
    /// False when the possible words ran out before a win
    pub solved: bool,
}

impl GameRecord {
    /// Number of guesses played
    #[inline]
    #[must_use]
    pub fn tries(&self) -> usize {
        self.steps.len()
    }

    /// Whether the game was lost or took more than `max_tries` guesses
    #[inline]
    #[must_use]
    pub fn failed(&self, max_tries: usize) -> bool {
        !self.solved || self.tries() > max_tries
    }
}

/// Plays games over a dictionary with a given strategy
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    words: &'a [Word],
    word_length: usize,
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver over a dictionary of `word_length`-letter words
    #[must_use]
    pub const fn new(strategy: S, words: &'a [Word], word_length: usize) -> Self {
        Self {
            strategy,
            words,
            word_length,
        }
    }

    #[inline]
    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Play until the solution is guessed or no possible word remains
    ///
    /// Each turn the strategy picks a guess, the result is derived from the
    /// solution and the possible words are narrowed. There is no turn limit;
    /// callers decide what counts as a failure.
    ///
    /// # Errors
    /// Returns `WordleError::UnknownWord` if `solution` is not in the
    /// dictionary, or a length error if the dictionary is inconsistent.
    ///
    /// # Examples
    /// ```
    /// use wordle_elimination::core::Word;
    /// use wordle_elimination::solver::{Solver, ValidOnlyStrategy};
    ///
    /// let words = ["crane", "crate", "slate", "plate"].map(|w| Word::new(w).unwrap());
    /// let solver = Solver::new(ValidOnlyStrategy, &words, 5);
    ///
    /// let game = solver.play("plate").unwrap();
    /// assert!(game.solved);
    /// assert!(game.steps.last().unwrap().is_win());
    ///
    /// assert!(solver.play("zebra").is_err());
    /// ```
    pub fn play(&self, solution: &str) -> Result<GameRecord, WordleError> {
        let mut candidates = CandidateSet::new(self.words.to_vec(), self.word_length)?;
        let solution = candidates
            .find(solution)
            .cloned()
            .ok_or_else(|| WordleError::UnknownWord(solution.to_string()))?;

        let mut steps: Vec<GuessResult> = Vec::new();
        let mut solved = false;

        while candidates.possible_count() > 0 {
            let Some(guess) = self.strategy.select_guess(&candidates, &steps) else {
                break;
            };
            let result = GuessResult::from_guess_and_solution(guess, &solution)?;
            debug!(
                "{} turn {}: {result}",
                self.strategy.name(),
                steps.len() + 1
            );

            if result.is_win() {
                steps.push(result);
                solved = true;
                break;
            }

            candidates.eliminate_words(&result)?;
            steps.push(result);
        }

        Ok(GameRecord {
            solution,
            steps,
            solved,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{MaxEliminationsStrategy, StrategyType, ValidOnlyStrategy};

    fn dictionary() -> Vec<Word> {
        [
            "crane", "crate", "slate", "plate", "grate", "irate", "trace", "react", "cater",
            "bumpy", "night", "clump", "fjord", "raise",
        ]
        .iter()
        .map(|&w| Word::new(w).unwrap())
        .collect()
    }

    fn assert_well_formed(game: &GameRecord) {
        assert!(game.solved, "{} not solved", game.solution);
        assert_eq!(game.steps.last().unwrap().guess(), &game.solution);
        assert!(game.steps[..game.tries() - 1].iter().all(|r| !r.is_win()));

        let mut guesses: Vec<&Word> = game.steps.iter().map(GuessResult::guess).collect();
        guesses.sort();
        guesses.dedup();
        assert_eq!(guesses.len(), game.tries(), "a guess was repeated");
    }

    #[test]
    fn valid_only_solves_every_word() {
        let words = dictionary();
        let solver = Solver::new(ValidOnlyStrategy, &words, 5);

        for solution in &words {
            let game = solver.play(solution.text()).unwrap();
            assert_well_formed(&game);
            assert!(game.tries() <= words.len());
        }
    }

    #[test]
    fn max_eliminations_solves_every_word() {
        let words = dictionary();
        let solver = Solver::new(MaxEliminationsStrategy, &words, 5);

        for solution in &words {
            let game = solver.play(solution.text()).unwrap();
            assert_well_formed(&game);
        }
    }

    #[test]
    fn unknown_solution_rejected() {
        let words = dictionary();
        let solver = Solver::new(StrategyType::ValidOnly(ValidOnlyStrategy), &words, 5);

        assert_eq!(
            solver.play("zebra"),
            Err(WordleError::UnknownWord("zebra".to_string()))
        );
    }

    #[test]
    fn single_word_dictionary_wins_first_try() {
        let words = vec![Word::new("crane").unwrap()];
        let solver = Solver::new(MaxEliminationsStrategy, &words, 5);

        let game = solver.play("crane").unwrap();
        assert!(game.solved);
        assert_eq!(game.tries(), 1);
        assert!(!game.failed(6));
    }

    #[test]
    fn failure_threshold() {
        let words = dictionary();
        let solver = Solver::new(ValidOnlyStrategy, &words, 5);
        let game = solver.play("bumpy").unwrap();

        assert!(!game.failed(game.tries()));
        assert!(game.failed(game.tries() - 1));
    }

    /// Always plays the first dictionary word
    struct FirstWord;

    impl Strategy for FirstWord {
        fn select_guess<'a>(
            &self,
            candidates: &'a CandidateSet,
            _history: &[GuessResult],
        ) -> Option<&'a Word> {
            candidates.all_words().first()
        }

        fn name(&self) -> &'static str {
            "first"
        }
    }

    #[test]
    fn solution_lost_to_repeated_letters() {
        // "eerie" colours three e's against "there", ruling it out.
        let words = ["eerie", "there"].map(|w| Word::new(w).unwrap());
        let solver = Solver::new(FirstWord, &words, 5);

        let game = solver.play("there").unwrap();
        assert!(!game.solved);
        assert_eq!(game.tries(), 1);
        assert!(game.failed(6));
    }
}
