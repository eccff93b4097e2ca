//! Wordle Wrangler
//!
//! A Wordle constraint engine: feedback becomes per-letter constraints, the
//! constraints narrow the candidate list, and guesses are ranked by how many
//! candidates they would eliminate.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_wrangler::core::Word;
//! use wordle_wrangler::solver::Game;
//!
//! let words: Vec<Word> = ["DAUNT", "FOYER", "PAINT", "TAUNT"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//!
//! let game = Game::with_secret(Word::new("TAUNT").unwrap(), words).unwrap();
//! let game = game.try_word(Word::new("FOYER").unwrap()).unwrap();
//! assert_eq!(game.candidates().len(), 3);
//!
//! let game = game.try_word(Word::new("TAUNT").unwrap()).unwrap();
//! assert!(game.done());
//! ```

// Core domain types
pub mod core;

// Scoring and game state
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
