//! Word lists for Wordle games
//!
//! Provides the embedded dictionary plus loading and cleaning of word files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
