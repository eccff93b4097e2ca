//! Core domain types for Wordle
//!
//! Words and the letter constraints derived from guess feedback. Everything
//! here is a pure value type with no I/O.

mod constraint;
mod word;

pub use constraint::{Constraint, ConstraintConflict, Constraints, Feedback, FeedbackError};
pub use word::{IndexedLetter, WORD_LENGTH, Word, WordError};
