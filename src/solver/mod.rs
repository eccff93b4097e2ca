//! Elimination scoring and game state
//!
//! [`Game`] ties guesses, constraints and candidates together; the
//! `elimination` functions rank guesses by how many candidates they remove.

mod chooser;
mod elimination;
mod game;

pub use chooser::{Chooser, RandomChooser, choose};
pub use elimination::{WordElim, hottest, rank_averaged, rank_for_secret, score_against};
pub use game::{Game, GameError, GameState};
