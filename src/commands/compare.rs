//! Strategy comparison over a random sample of solutions
//!
//! Plays every sampled word with each strategy and reports average tries and
//! the number of games that went past the try limit.

use crate::core::CandidateSet;
use crate::solver::{MaxEliminationsStrategy, Solver, Strategy, StrategyType, ValidOnlyStrategy};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::time::{Duration, Instant};

/// Tries taken for one solution, one entry per strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameComparison {
    pub solution: String,
    pub tries: Vec<usize>,
}

/// Totals for one strategy
#[derive(Debug, Clone, PartialEq)]
pub struct StrategySummary {
    pub name: &'static str,
    pub average_tries: f64,
    pub failures: usize,
}

/// Result of comparing strategies
#[derive(Debug, Clone)]
pub struct ComparisonResult {
    pub games: Vec<GameComparison>,
    pub summaries: Vec<StrategySummary>,
    pub max_tries: usize,
    pub total_time: Duration,
}

/// Strategies compared, in column order
#[must_use]
pub fn compared_strategies() -> [StrategyType; 2] {
    [
        StrategyType::ValidOnly(ValidOnlyStrategy),
        StrategyType::MaxEliminations(MaxEliminationsStrategy),
    ]
}

/// Compare the strategies on `sample_size` random dictionary words
///
/// A game counts as a failure when it is lost or takes more than `max_tries`
/// guesses.
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid or a game cannot
/// be played.
pub fn run_compare<R: Rng + ?Sized>(
    candidates: &CandidateSet,
    sample_size: usize,
    max_tries: usize,
    rng: &mut R,
    show_progress: bool,
) -> Result<ComparisonResult> {
    let sample = candidates.random_subset(sample_size, rng);
    let strategies = compared_strategies();
    let solvers: Vec<Solver<'_, StrategyType>> = strategies
        .iter()
        .map(|&strategy| Solver::new(strategy, candidates.all_words(), candidates.word_length()))
        .collect();

    let pb = if show_progress {
        let pb = ProgressBar::new(sample.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut games = Vec::with_capacity(sample.len());
    let mut failures = vec![0usize; solvers.len()];

    for solution in &sample {
        let mut tries = Vec::with_capacity(solvers.len());
        for (solver, failed) in solvers.iter().zip(failures.iter_mut()) {
            let game = solver.play(solution.text())?;
            if game.failed(max_tries) {
                *failed += 1;
            }
            tries.push(game.tries());
        }

        pb.set_message(solution.text().to_string());
        pb.inc(1);
        games.push(GameComparison {
            solution: solution.text().to_string(),
            tries,
        });
    }

    pb.finish_with_message("Complete!");

    let summaries = solvers
        .iter()
        .zip(failures)
        .enumerate()
        .map(|(column, (solver, failures))| {
            let total: usize = games.iter().map(|g| g.tries[column]).sum();
            let average_tries = if games.is_empty() {
                0.0
            } else {
                total as f64 / games.len() as f64
            };
            StrategySummary {
                name: solver.strategy().name(),
                average_tries,
                failures,
            }
        })
        .collect();

    Ok(ComparisonResult {
        games,
        summaries,
        max_tries,
        total_time: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn candidates() -> CandidateSet {
        let words = words_from_slice(
            &[
                "crane", "crate", "slate", "plate", "grate", "irate", "trace", "react", "night",
                "clump", "fjord", "bumpy",
            ],
            5,
        );
        CandidateSet::new(words, 5).unwrap()
    }

    #[test]
    fn compares_both_strategies() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = run_compare(&candidates(), 5, 6, &mut rng, false).unwrap();

        assert_eq!(result.games.len(), 5);
        assert_eq!(result.summaries.len(), 2);
        assert_eq!(result.summaries[0].name, "validonly");
        assert_eq!(result.summaries[1].name, "maxeliminations");

        for game in &result.games {
            assert_eq!(game.tries.len(), 2);
            assert!(game.tries.iter().all(|&t| t >= 1));
        }
        for summary in &result.summaries {
            assert!(summary.average_tries >= 1.0);
            assert!(summary.failures <= 5);
        }
    }

    #[test]
    fn same_seed_same_sample() {
        let a = run_compare(&candidates(), 4, 6, &mut StdRng::seed_from_u64(3), false).unwrap();
        let b = run_compare(&candidates(), 4, 6, &mut StdRng::seed_from_u64(3), false).unwrap();
        assert_eq!(a.games, b.games);
    }

    #[test]
    fn zero_try_limit_fails_everything() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = run_compare(&candidates(), 3, 0, &mut rng, false).unwrap();
        assert!(result.summaries.iter().all(|s| s.failures == 3));
    }

    #[test]
    fn sample_larger_than_dictionary() {
        let mut rng = StdRng::seed_from_u64(9);
        let result = run_compare(&candidates(), 500, 6, &mut rng, false).unwrap();
        assert_eq!(result.games.len(), 12);
    }
}
