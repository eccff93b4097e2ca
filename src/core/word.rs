//! Wordle word representation
//!
//! A Word is a fixed-length run of upper-case ASCII letters. It is `Copy`, so
//! game states can hold and share them freely.

use std::fmt;
use std::str::FromStr;

/// Number of letters in every word of a game
pub const WORD_LENGTH: usize = 5;

/// A 5-letter word, stored upper-case
///
/// Equality and ordering are lexicographic on the letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

/// A letter of a word together with its position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedLetter {
    pub position: usize,
    pub letter: u8,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::InvalidCharacters => write!(f, "Word must contain only ASCII letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Letters are normalised to upper case.
    ///
    /// # Errors
    /// Returns `WordError` if the length is not exactly 5 or the text holds
    /// anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_wrangler::core::Word;
    ///
    /// let word = Word::new("taunt").unwrap();
    /// assert_eq!(word.to_string(), "TAUNT");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let text = text.trim();

        if text.chars().count() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.chars().count()));
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, byte) in letters.iter_mut().zip(text.bytes()) {
            *slot = byte.to_ascii_uppercase();
        }

        Ok(Self(letters))
    }

    /// Get the letters as bytes
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }

    /// Positions at which `letter` occurs, in ascending order
    pub fn positions_of(&self, letter: u8) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(move |&(_, &c)| c == letter)
            .map(|(i, _)| i)
    }

    /// Every letter paired with its position
    ///
    /// The iterator borrows nothing, so it can be cloned and restarted.
    pub fn indexed_letters(self) -> impl Iterator<Item = IndexedLetter> + Clone {
        self.0
            .into_iter()
            .enumerate()
            .map(|(position, letter)| IndexedLetter { position, letter })
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.0 {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}
