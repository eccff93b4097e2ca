//! Benchmark command
//!
//! Auto-plays one game per secret and collects guess-count statistics.

use super::play::{PlayConfig, play_game};
use crate::core::Word;
use crate::solver::{Chooser, GameError};
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Statistics over a batch of auto-played games
#[derive(Debug)]
pub struct BenchResult {
    pub total_games: usize,
    pub solved: usize,
    pub failed: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub duration: Duration,
}

/// Play a game for each of the first `count` words as the secret
///
/// # Errors
///
/// Returns an error if a game cannot be set up.
pub fn run_bench<C: Chooser + ?Sized>(
    words: &[Word],
    count: usize,
    show_progress: bool,
    chooser: &mut C,
) -> Result<BenchResult, GameError> {
    let secrets: Vec<Word> = words.iter().take(count).copied().collect();

    let pb = if show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut solved_guesses = Vec::with_capacity(secrets.len());
    let mut failed = 0;

    for secret in &secrets {
        let config = PlayConfig::new(Some(*secret));
        let result = play_game(&config, words.to_vec(), chooser)?;

        if result.solved {
            let guesses = result.turns.len();
            *distribution.entry(guesses).or_insert(0) += 1;
            solved_guesses.push(guesses);
        } else {
            failed += 1;
        }

        if !solved_guesses.is_empty() {
            let avg = solved_guesses.iter().sum::<usize>() as f64 / solved_guesses.len() as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let solved = solved_guesses.len();
    let average_guesses = if solved > 0 {
        solved_guesses.iter().sum::<usize>() as f64 / solved as f64
    } else {
        0.0
    };

    Ok(BenchResult {
        total_games: secrets.len(),
        solved,
        failed,
        distribution,
        average_guesses,
        min_guesses: solved_guesses.iter().copied().min().unwrap_or(0),
        max_guesses: solved_guesses.iter().copied().max().unwrap_or(0),
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::RandomChooser;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn bench_runs() {
        let words = words_from_slice(&WORDS[..40]);
        let result = run_bench(&words, 10, false, &mut RandomChooser::seeded(1)).unwrap();

        assert_eq!(result.total_games, 10);
        assert_eq!(result.solved + result.failed, 10);
        assert!(result.min_guesses >= 1);
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }

    #[test]
    fn bench_distribution_sums_to_solved() {
        let words = words_from_slice(&WORDS[..30]);
        let result = run_bench(&words, 30, false, &mut |_: usize| 0).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
    }

    #[test]
    fn bench_empty_word_list() {
        let result = run_bench(&[], 10, false, &mut |_: usize| 0).unwrap();

        assert_eq!(result.total_games, 0);
        assert_eq!(result.solved, 0);
        assert!(result.average_guesses.abs() < f64::EPSILON);
    }
}
