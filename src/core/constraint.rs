//! Letter constraints derived from guess feedback
//!
//! Each guess yields one fact per letter:
//! - `Fixed` = letter confirmed at the listed positions
//! - `Present` = letter in the secret, but at none of the listed positions
//! - `Unused` = letter not in the secret
//!
//! Facts about the same letter are merged so that a [`Constraints`] set holds
//! at most one constraint per letter.
//!
//! # Duplicate letters
//! Constraints track letters, not letter counts. When one guess reports a
//! letter both as `Fixed`/`Present` and as `Unused` (Wordle greys the surplus
//! copies of a repeated letter), the positive observation wins and the
//! `Unused` one is dropped. A word satisfies `Present` when at least one of its
//! copies of the letter sits outside the excluded positions.

use super::word::{IndexedLetter, WORD_LENGTH, Word};
use std::collections::BTreeSet;
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// Feedback code for one position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// `F`: letter confirmed at this position
    Fixed,
    /// `P`: letter present elsewhere
    Present,
    /// `U`: letter absent
    Unused,
}

impl Feedback {
    /// Parse a single feedback code (`F`, `P` or `U`, any case)
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'F' | 'f' => Some(Self::Fixed),
            'P' | 'p' => Some(Self::Present),
            'U' | 'u' => Some(Self::Unused),
            _ => None,
        }
    }
}

/// A fact about one letter of the secret
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Constraint {
    Fixed {
        letter: u8,
        positions: BTreeSet<usize>,
    },
    Present {
        letter: u8,
        excluded: BTreeSet<usize>,
    },
    Unused {
        letter: u8,
    },
}

/// Error for a malformed feedback spec
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    InvalidLength { spec: String, expected: usize },
    UnknownCode { spec: String, code: char },
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { spec, expected } => {
                write!(f, "Feedback '{spec}' must have exactly {expected} codes")
            }
            Self::UnknownCode { spec, code } => {
                write!(f, "Feedback '{spec}' has unknown code '{code}' (use F, P or U)")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

/// A letter was reported absent in one guess and present in another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintConflict {
    pub letter: u8,
}

impl fmt::Display for ConstraintConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Letter {} was reported both unused and present",
            char::from(self.letter)
        )
    }
}

impl std::error::Error for ConstraintConflict {}

impl Constraint {
    /// Letter confirmed at `position`
    #[must_use]
    pub fn fixed(letter: u8, position: usize) -> Self {
        Self::Fixed {
            letter,
            positions: BTreeSet::from([position]),
        }
    }

    /// Letter present, but not at `position`
    #[must_use]
    pub fn present(letter: u8, position: usize) -> Self {
        Self::Present {
            letter,
            excluded: BTreeSet::from([position]),
        }
    }

    /// Letter absent from the secret
    #[must_use]
    pub const fn unused(letter: u8) -> Self {
        Self::Unused { letter }
    }

    /// Feedback for one guess letter when `secret` is the answer
    ///
    /// # Examples
    /// ```
    /// use wordle_wrangler::core::{Constraint, IndexedLetter, Word};
    ///
    /// let secret = Word::new("TAUNT").unwrap();
    /// let a = IndexedLetter { position: 1, letter: b'A' };
    /// let n = IndexedLetter { position: 0, letter: b'N' };
    ///
    /// assert_eq!(Constraint::derive(secret, a), Constraint::fixed(b'A', 1));
    /// assert_eq!(Constraint::derive(secret, n), Constraint::present(b'N', 0));
    /// ```
    #[must_use]
    pub fn derive(secret: Word, guessed: IndexedLetter) -> Self {
        let IndexedLetter { position, letter } = guessed;

        if secret.char_at(position) == letter {
            Self::fixed(letter, position)
        } else if secret.contains(letter) {
            Self::present(letter, position)
        } else {
            Self::unused(letter)
        }
    }

    /// The letter this constraint is about
    #[must_use]
    pub const fn letter(&self) -> u8 {
        match self {
            Self::Fixed { letter, .. } | Self::Present { letter, .. } | Self::Unused { letter } => {
                *letter
            }
        }
    }

    /// Whether `word` is ruled out by this constraint
    #[must_use]
    pub fn excludes(&self, word: &Word) -> bool {
        match self {
            Self::Fixed { letter, positions } => positions.iter().any(|&p| word.char_at(p) != *letter),
            // Vacuously true when the word lacks the letter
            Self::Present { letter, excluded } => {
                word.positions_of(*letter).all(|p| excluded.contains(&p))
            }
            Self::Unused { letter } => word.contains(*letter),
        }
    }

    /// Combine two facts about the same letter
    ///
    /// `Fixed` dominates `Present`; two `Fixed` or two `Present` facts union
    /// their position sets.
    ///
    /// # Errors
    /// Returns `ConstraintConflict` when one side is `Unused` and the other is not.
    pub fn merge(&self, other: &Self) -> Result<Self, ConstraintConflict> {
        debug_assert_eq!(self.letter(), other.letter(), "merging different letters");

        self.union(other).ok_or(ConstraintConflict {
            letter: self.letter(),
        })
    }

    /// Combine two facts from the same guess, where `Unused` marks a surplus copy
    fn absorb(&self, other: &Self) -> Self {
        self.union(other).unwrap_or_else(|| match self {
            Self::Unused { .. } => other.clone(),
            _ => self.clone(),
        })
    }

    fn union(&self, other: &Self) -> Option<Self> {
        match (self, other) {
            (Self::Fixed { letter, positions }, Self::Fixed { positions: more, .. }) => {
                Some(Self::Fixed {
                    letter: *letter,
                    positions: positions.union(more).copied().collect(),
                })
            }
            (Self::Present { letter, excluded }, Self::Present { excluded: more, .. }) => {
                Some(Self::Present {
                    letter: *letter,
                    excluded: excluded.union(more).copied().collect(),
                })
            }
            (Self::Fixed { .. }, Self::Present { .. }) | (Self::Unused { .. }, Self::Unused { .. }) => {
                Some(self.clone())
            }
            (Self::Present { .. }, Self::Fixed { .. }) => Some(other.clone()),
            _ => None,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = |set: &BTreeSet<usize>| {
            set.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",")
        };

        match self {
            Self::Fixed { letter, positions } => {
                write!(f, "[✅{} {}]", char::from(*letter), joined(positions))
            }
            Self::Present { letter, excluded } => {
                write!(f, "[🟨{}🚫 {}]", char::from(*letter), joined(excluded))
            }
            Self::Unused { letter } => write!(f, "[❌{}]", char::from(*letter)),
        }
    }
}

/// Accumulated constraints, at most one per letter, ordered by letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints(BTreeMap<u8, Constraint>);

impl Constraints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constraints revealed by guessing `guess` when `secret` is the answer
    #[must_use]
    pub fn against(secret: Word, guess: Word) -> Self {
        Self::from_guess(
            guess
                .indexed_letters()
                .map(|indexed| Constraint::derive(secret, indexed)),
        )
    }

    /// Parse a feedback spec such as `"FUUUP"` for `guess`
    ///
    /// # Errors
    /// Returns `FeedbackError` if the spec length differs from the word length
    /// or it contains a code other than `F`, `P` or `U`.
    ///
    /// # Examples
    /// ```
    /// use wordle_wrangler::core::{Constraint, Constraints, Word};
    ///
    /// let guess = Word::new("FOOBR").unwrap();
    /// let constraints = Constraints::from_feedback(guess, "FUUUP").unwrap();
    ///
    /// assert_eq!(constraints.len(), 4);
    /// assert_eq!(constraints.get(b'R'), Some(&Constraint::present(b'R', 4)));
    /// ```
    pub fn from_feedback(guess: Word, spec: &str) -> Result<Self, FeedbackError> {
        let spec = spec.trim();

        if spec.chars().count() != WORD_LENGTH {
            return Err(FeedbackError::InvalidLength {
                spec: spec.to_string(),
                expected: WORD_LENGTH,
            });
        }

        let observed = guess
            .indexed_letters()
            .zip(spec.chars())
            .map(|(IndexedLetter { position, letter }, code)| {
                match Feedback::from_code(code) {
                    Some(Feedback::Fixed) => Ok(Constraint::fixed(letter, position)),
                    Some(Feedback::Present) => Ok(Constraint::present(letter, position)),
                    Some(Feedback::Unused) => Ok(Constraint::unused(letter)),
                    None => Err(FeedbackError::UnknownCode {
                        spec: spec.to_string(),
                        code,
                    }),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_guess(observed))
    }

    /// Collapse the per-position observations of a single guess
    fn from_guess(observed: impl IntoIterator<Item = Constraint>) -> Self {
        let mut by_letter: BTreeMap<u8, Constraint> = BTreeMap::new();

        for constraint in observed {
            match by_letter.entry(constraint.letter()) {
                btree_map::Entry::Vacant(slot) => {
                    slot.insert(constraint);
                }
                btree_map::Entry::Occupied(mut slot) => {
                    let absorbed = slot.get().absorb(&constraint);
                    slot.insert(absorbed);
                }
            }
        }

        Self(by_letter)
    }

    /// Merge two constraint sets letter by letter
    ///
    /// # Errors
    /// Returns `ConstraintConflict` if a letter is `Unused` on one side and
    /// `Fixed` or `Present` on the other.
    pub fn merged(&self, other: &Self) -> Result<Self, ConstraintConflict> {
        let mut by_letter = self.0.clone();

        for (letter, constraint) in &other.0 {
            let combined = match by_letter.get(letter) {
                Some(existing) => existing.merge(constraint)?,
                None => constraint.clone(),
            };
            by_letter.insert(*letter, combined);
        }

        Ok(Self(by_letter))
    }

    /// Whether `word` is consistent with every constraint
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        self.0.values().all(|constraint| !constraint.excludes(word))
    }

    /// Candidates consistent with every constraint, in their original order
    #[must_use]
    pub fn viable(&self, candidates: &[Word]) -> Vec<Word> {
        candidates
            .iter()
            .filter(|word| self.admits(word))
            .copied()
            .collect()
    }

    /// Count of candidates consistent with every constraint
    #[must_use]
    pub fn count_viable(&self, candidates: &[Word]) -> usize {
        candidates.iter().filter(|word| self.admits(word)).count()
    }

    /// Whether `letter` is confirmed at `position`
    #[must_use]
    pub fn is_fixed_at(&self, letter: u8, position: usize) -> bool {
        matches!(
            self.0.get(&letter),
            Some(Constraint::Fixed { positions, .. }) if positions.contains(&position)
        )
    }

    #[must_use]
    pub fn get(&self, letter: u8) -> Option<&Constraint> {
        self.0.get(&letter)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Constraint> {
        self.0.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
