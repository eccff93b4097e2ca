//! Display functions for command results

use super::formatters::{ROW_WIDTH, colored_constraint, create_progress_bar, rows};
use crate::commands::{BenchResult, PlayResult};
use crate::core::Constraints;
use colored::Colorize;
use std::fmt::Display;

/// Above this many viable words only the count is printed
const MAX_LISTED: usize = 20;

/// Print constraints on one line, ordered by letter
pub fn print_constraints(constraints: &Constraints) {
    let rendered: Vec<String> = constraints.iter().map(colored_constraint).collect();
    println!(" {}", rendered.join(" "));
}

/// Print items five to a row
pub fn print_words<T: Display>(items: &[T]) {
    for row in rows(items, ROW_WIDTH) {
        println!("{row}");
    }
}

/// Print an auto-played game turn by turn
pub fn print_play_result(result: &PlayResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Word   : {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in result.turns.iter().enumerate() {
        println!("\nGuess {}: {}", i + 1, turn.guess.to_string().bold());

        println!("Constraints:");
        print_constraints(&turn.constraints);

        if turn.candidates.len() > MAX_LISTED {
            println!("Still viable: {}", turn.candidates.len());
        } else {
            println!("Still viable:");
            print_words(&turn.candidates);
        }

        if !turn.hottest.is_empty() {
            println!("Hot candidates:");
            print_words(&turn.hottest);
        }
    }

    println!();
    if result.solved {
        let guesses: Vec<String> = result.turns.iter().map(|t| t.guess.to_string()).collect();
        println!(
            "{}",
            format!("✅ Found it! {} in {} guesses", result.secret, guesses.len())
                .green()
                .bold()
        );
        println!("Guesses: {}", guesses.join(" "));
    } else {
        println!(
            "{}",
            format!("❌ Gave up after {} guesses", result.turns.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_bench_result(result: &BenchResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!("   Solved:           {}", result.solved.to_string().green());
    if result.failed > 0 {
        println!("   Failed:           {}", result.failed.to_string().red());
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.solved == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in result.min_guesses..=result.max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.solved as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}
