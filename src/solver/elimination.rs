//! Elimination scoring
//!
//! A guess is scored by how many candidates it would remove. With a known
//! secret the score is exact; with an unknown secret every candidate is tried
//! as a hypothetical secret and the scores are averaged.

use crate::core::{Constraints, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::fmt;

/// A guess paired with its elimination score
///
/// While accumulating over several hypothetical secrets, `eliminated` holds the
/// running total and `samples` the number of secrets added; [`WordElim::avg`]
/// turns that back into a single score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordElim {
    word: Word,
    eliminated: usize,
    samples: usize,
}

impl WordElim {
    #[must_use]
    pub const fn new(word: Word, eliminated: usize) -> Self {
        Self {
            word,
            eliminated,
            samples: 1,
        }
    }

    #[must_use]
    pub const fn word(&self) -> Word {
        self.word
    }

    #[must_use]
    pub const fn eliminated(&self) -> usize {
        self.eliminated
    }

    #[must_use]
    pub const fn samples(&self) -> usize {
        self.samples
    }

    /// Sum two scores for the same word
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        debug_assert_eq!(self.word, other.word, "adding scores of different words");

        Self {
            word: self.word,
            eliminated: self.eliminated + other.eliminated,
            samples: self.samples + other.samples,
        }
    }

    /// Mean score, rounded half up to a whole count
    #[must_use]
    pub const fn avg(self) -> Self {
        let eliminated = if self.samples == 0 {
            0
        } else {
            (self.eliminated + self.samples / 2) / self.samples
        };

        Self {
            word: self.word,
            eliminated,
            samples: 1,
        }
    }
}

impl fmt::Display for WordElim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.word, self.eliminated)
    }
}

/// Score `guess` assuming `secret` is the answer
///
/// The guess's feedback is merged into `constraints` and the candidates that
/// survive are counted. Feedback that contradicts `constraints` leaves no
/// candidate standing.
#[must_use]
pub fn score_against(
    candidates: &[Word],
    constraints: &Constraints,
    guess: Word,
    secret: Word,
) -> WordElim {
    let revealed = Constraints::against(secret, guess);
    let remaining = constraints
        .merged(&revealed)
        .map_or(0, |merged| merged.count_viable(candidates));

    WordElim::new(guess, candidates.len() - remaining)
}

/// Rank every candidate as a guess against a known secret
///
/// Sorted by elimination, highest first; ties keep word order.
///
/// # Examples
/// ```
/// use wordle_wrangler::core::{Constraints, Word};
/// use wordle_wrangler::solver::rank_for_secret;
///
/// let candidates: Vec<Word> = ["ABCDE", "FGHIJ", "KLMNO"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let secret = candidates[1];
///
/// let ranking = rank_for_secret(&candidates, &Constraints::new(), secret);
/// assert_eq!(ranking[0].word(), secret);
/// assert_eq!(ranking[0].eliminated(), 2);
/// ```
#[must_use]
pub fn rank_for_secret(candidates: &[Word], constraints: &Constraints, secret: Word) -> Vec<WordElim> {
    let mut ranking: Vec<WordElim> = candidates
        .par_iter()
        .map(|&guess| score_against(candidates, constraints, guess, secret))
        .collect();

    sort_ranking(&mut ranking);
    ranking
}

/// Rank every candidate as a guess, averaged over every candidate as secret
///
/// Hypothetical secrets are split across the rayon pool; each partition builds
/// its own guess→score map and the maps are merged with [`WordElim::add`]
/// before averaging.
#[must_use]
pub fn rank_averaged(candidates: &[Word], constraints: &Constraints) -> Vec<WordElim> {
    let totals = candidates
        .par_iter()
        .fold(FxHashMap::default, |mut totals, &secret| {
            for &guess in candidates {
                accumulate(
                    &mut totals,
                    score_against(candidates, constraints, guess, secret),
                );
            }
            totals
        })
        .reduce(FxHashMap::default, |mut left, right| {
            for scored in right.into_values() {
                accumulate(&mut left, scored);
            }
            left
        });

    let mut ranking: Vec<WordElim> = totals.into_values().map(WordElim::avg).collect();
    sort_ranking(&mut ranking);
    ranking
}

/// Entries of `ranking` sharing the highest elimination score
#[must_use]
pub fn hottest(ranking: &[WordElim]) -> Vec<WordElim> {
    let Some(max) = ranking.iter().map(WordElim::eliminated).max() else {
        return Vec::new();
    };

    ranking
        .iter()
        .filter(|scored| scored.eliminated == max)
        .copied()
        .collect()
}

fn accumulate(totals: &mut FxHashMap<Word, WordElim>, scored: WordElim) {
    totals
        .entry(scored.word)
        .and_modify(|total| *total = total.add(scored))
        .or_insert(scored);
}

fn sort_ranking(ranking: &mut [WordElim]) {
    ranking.sort_by(|a, b| {
        b.eliminated
            .cmp(&a.eliminated)
            .then_with(|| a.word.cmp(&b.word))
    });
}
