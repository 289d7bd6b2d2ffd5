//! Game simulation command
//!
//! Plays a known solution with a named strategy and returns the transcript.

use crate::core::Word;
use crate::solver::{GameRecord, Solver, Strategy, StrategyType};
use anyhow::{Context, Result, anyhow};

/// Result of simulating one game
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub strategy: &'static str,
    pub game: GameRecord,
}

/// Play `solution` with the strategy called `strategy_name`
///
/// # Errors
///
/// Returns an error if the strategy name is unknown or the solution is not
/// in the dictionary.
pub fn simulate_game(
    strategy_name: &str,
    solution: &str,
    words: &[Word],
    word_length: usize,
) -> Result<SimulationResult> {
    let strategy = StrategyType::from_name(strategy_name).ok_or_else(|| {
        anyhow!("unknown strategy \"{strategy_name}\", expected validonly or maxeliminations")
    })?;

    let solver = Solver::new(strategy, words, word_length);
    let game = solver
        .play(&solution.to_lowercase())
        .with_context(|| format!("cannot simulate \"{solution}\""))?;

    Ok(SimulationResult {
        strategy: solver.strategy().name(),
        game,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn words() -> Vec<Word> {
        words_from_slice(&["crane", "crate", "slate", "plate", "grate", "night"], 5)
    }

    #[test]
    fn simulate_valid_only() {
        let result = simulate_game("validonly", "grate", &words(), 5).unwrap();
        assert_eq!(result.strategy, "validonly");
        assert!(result.game.solved);
        assert_eq!(result.game.solution.text(), "grate");
    }

    #[test]
    fn simulate_max_eliminations_uppercase_solution() {
        let result = simulate_game("maxeliminations", "NIGHT", &words(), 5).unwrap();
        assert_eq!(result.strategy, "maxeliminations");
        assert!(result.game.solved);
    }

    #[test]
    fn unknown_strategy() {
        let err = simulate_game("entropy", "crane", &words(), 5).unwrap_err();
        assert!(err.to_string().contains("unknown strategy"));
    }

    #[test]
    fn unknown_solution() {
        let err = simulate_game("validonly", "zebra", &words(), 5).unwrap_err();
        assert!(format!("{err:#}").contains("not in the dictionary"));
    }
}
