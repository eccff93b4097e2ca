//! Auto-play command
//!
//! Plays a game against a known secret: a random opening guess, then one of
//! the hottest candidates every turn until the secret is found.

use crate::core::{Constraints, Word};
use crate::solver::{Chooser, Game, GameError, WordElim, choose};

/// Configuration for an auto-played game
pub struct PlayConfig {
    /// Secret to solve; picked at random when absent
    pub secret: Option<Word>,
    /// Give up after this many guesses
    pub max_turns: usize,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(secret: Option<Word>) -> Self {
        Self {
            secret,
            max_turns: 20,
        }
    }
}

/// State after one guess
pub struct PlayTurn {
    pub guess: Word,
    pub constraints: Constraints,
    pub candidates: Vec<Word>,
    /// Hottest candidates for the next guess; empty once the game is over
    pub hottest: Vec<WordElim>,
}

/// Result of an auto-played game
pub struct PlayResult {
    pub secret: Word,
    pub turns: Vec<PlayTurn>,
    pub solved: bool,
}

/// Play a full game over `words`
///
/// # Errors
///
/// Returns an error if the configured secret is not in `words`, or `words`
/// is empty.
pub fn play_game<C: Chooser + ?Sized>(
    config: &PlayConfig,
    words: Vec<Word>,
    chooser: &mut C,
) -> Result<PlayResult, GameError> {
    let fresh = match config.secret {
        Some(secret) => Game::with_secret(secret, words)?,
        None => Game::with_random_secret(words, chooser)?,
    };
    let secret = fresh.secret().ok_or(GameError::SecretUnknown)?;

    let mut game = fresh.guess_word(chooser)?;
    let mut turns = Vec::new();

    loop {
        let over = game.done() || game.is_impossible();
        let hottest = if over {
            Vec::new()
        } else {
            game.hottest_candidates()
        };

        let next = choose(&hottest, chooser).map(WordElim::word);
        turns.push(PlayTurn {
            guess: game.last_guess().ok_or(GameError::NoCandidates)?,
            constraints: game.constraints().clone(),
            candidates: game.candidates().to_vec(),
            hottest,
        });

        match next {
            Some(guess) if turns.len() < config.max_turns => game = game.try_word(guess)?,
            _ => break,
        }
    }

    Ok(PlayResult {
        secret,
        turns,
        solved: game.done(),
    })
}
