//! Display functions for command results

use super::formatters::{create_progress_bar, format_ranking, result_to_emoji, result_to_tiles};
use crate::commands::{AnalysisResult, ComparisonResult, RankingResult, SimulationResult, StatsResult};
use crate::core::ColorNotation;
use crate::solver::Ranking;
use colored::Colorize;

/// Print a ranking table
pub fn print_ranking(result: &RankingResult) {
    let superlative = match result.ranking {
        Ranking::Best => "highest-scoring",
        Ranking::Worst => "lowest-scoring",
    };
    println!(
        "{} {} starter words over {} possible words",
        "The".bright_cyan(),
        superlative.bright_cyan().bold(),
        result.possible_words
    );
    print!("{}", format_ranking(&result.words));
}

/// Print a simulated game, one `<guess>\t<pattern>` line per turn
pub fn print_simulation(result: &SimulationResult, notation: &ColorNotation, max_tries: usize) {
    let game = &result.game;
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Simulating: {} ({})",
        game.solution.text().to_uppercase().bright_yellow().bold(),
        result.strategy
    );
    println!("{}", "─".repeat(60).cyan());

    for step in &game.steps {
        println!(
            "{}   {} {}",
            step.to_line(notation),
            result_to_tiles(step),
            result_to_emoji(step)
        );
    }

    println!();
    if game.failed(max_tries) {
        let message = if game.solved {
            format!("Completed in {} tries, over the limit of {max_tries}.", game.tries())
        } else {
            format!("Ran out of possible words after {} tries.", game.tries())
        };
        println!("{}", message.red().bold());
    } else {
        println!(
            "{}",
            format!("Completed in {} tries.", game.tries()).green().bold()
        );
    }
}

/// Print a strategy comparison
pub fn print_comparison(result: &ComparisonResult) {
    let names: Vec<&str> = result.summaries.iter().map(|s| s.name).collect();
    println!("word\t{}", names.join("\t"));
    for game in &result.games {
        let tries: Vec<String> = game.tries.iter().map(ToString::to_string).collect();
        println!("{}\t{}", game.solution, tries.join("\t"));
    }

    let total = result.games.len();
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "COMPARISON RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for summary in &result.summaries {
        let bar = create_progress_bar(summary.average_tries, result.max_tries as f64, 30);
        println!("\n{}", summary.name.bright_cyan().bold());
        println!(
            "   Average tries:  [{}] {}",
            bar.green(),
            format!("{:.3}", summary.average_tries).bright_yellow()
        );
        let failures = format!(
            "{}/{total} (> {} tries)",
            summary.failures, result.max_tries
        );
        if summary.failures == 0 {
            println!("   Failures:       {}", failures.green());
        } else {
            println!("   Failures:       {}", failures.red());
        }
    }

    println!(
        "\n   Time taken:     {:.2}s",
        result.total_time.as_secs_f64()
    );
}

/// Print letter statistics
pub fn print_stats(result: &StatsResult) {
    println!(
        "{} {} words",
        "Letter statistics over".bright_cyan(),
        result.word_count
    );
    println!("{}", result.summary);
}

/// Print the result of word analysis
pub fn print_analysis(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ELIMINATION ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\nAgainst {} possible words ({} in dictionary):",
        result.possible_words, result.dictionary_size
    );
    println!(
        "   Score:       {} expected eliminations",
        format!("{:.3}", result.score).bright_yellow()
    );
    println!("   Rank:        {} of {}", result.rank, result.dictionary_size);

    match result.expected_remaining {
        Some(expected) => println!("   Exact:       {expected:.3} words expected to remain"),
        None => println!(
            "   Exact:       {}",
            "skipped, too many possible words".bright_black()
        ),
    }
    if let Some((word, expected)) = &result.best_exact {
        println!(
            "   Best exact:  {} ({expected:.3} words expected to remain)",
            word.to_uppercase().green()
        );
    }
}
