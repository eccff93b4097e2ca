//! Immutable game state
//!
//! A [`Game`] is a snapshot: the optional secret, the candidates still viable,
//! the accumulated constraints and the guesses so far. Every transition
//! returns a new `Game`, so earlier states stay valid for undo and replay.

use super::chooser::{Chooser, choose};
use super::elimination::{WordElim, hottest, rank_averaged, rank_for_secret};
use crate::core::{ConstraintConflict, Constraints, FeedbackError, Word, WordError};
use std::fmt;

/// Observable phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No guesses yet
    Fresh,
    /// Guesses made, candidates left, not solved
    InProgress,
    /// Last guess was the answer
    Solved,
    /// Feedback ruled out every candidate
    Impossible,
}

/// Error type for game transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidWord(WordError),
    InvalidFeedback(FeedbackError),
    Conflict(ConstraintConflict),
    /// Secret must be one of the candidates
    NotACandidate(Word),
    /// Secret can only be set before the first guess
    InProgress,
    /// `try_word` needs a secret; use `tried` with feedback instead
    SecretUnknown,
    /// Nothing left to guess
    NoCandidates,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(e) => write!(f, "Invalid word: {e}"),
            Self::InvalidFeedback(e) => write!(f, "Invalid feedback: {e}"),
            Self::Conflict(e) => write!(f, "Contradictory feedback: {e}"),
            Self::NotACandidate(word) => write!(f, "No such candidate: {word}"),
            Self::InProgress => write!(f, "Game is already in progress"),
            Self::SecretUnknown => write!(
                f,
                "Secret is unknown, feedback must be supplied with each guess"
            ),
            Self::NoCandidates => write!(f, "No candidates remain"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(e) => Some(e),
            Self::InvalidFeedback(e) => Some(e),
            Self::Conflict(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WordError> for GameError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}

impl From<FeedbackError> for GameError {
    fn from(e: FeedbackError) -> Self {
        Self::InvalidFeedback(e)
    }
}

impl From<ConstraintConflict> for GameError {
    fn from(e: ConstraintConflict) -> Self {
        Self::Conflict(e)
    }
}

/// Snapshot of a Wordle game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    secret: Option<Word>,
    candidates: Vec<Word>,
    constraints: Constraints,
    guesses: Vec<Word>,
}

impl Game {
    /// Fresh game with an unknown secret; feedback is supplied per guess
    ///
    /// # Examples
    /// ```
    /// use wordle_wrangler::core::Word;
    /// use wordle_wrangler::solver::{Game, GameState};
    ///
    /// let words: Vec<Word> = ["DAUNT", "PAINT", "TAUNT"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    ///
    /// let game = Game::new(words).tried(Word::new("PAINT").unwrap(), "UFUFF").unwrap();
    /// assert_eq!(game.candidates().len(), 2);
    /// assert_eq!(game.state(), GameState::InProgress);
    /// ```
    #[must_use]
    pub fn new(candidates: Vec<Word>) -> Self {
        Self {
            secret: None,
            candidates,
            constraints: Constraints::new(),
            guesses: Vec::new(),
        }
    }

    /// Fresh game against a known secret
    ///
    /// # Errors
    /// Returns `GameError::NotACandidate` if `secret` is not among `candidates`.
    pub fn with_secret(secret: Word, candidates: Vec<Word>) -> Result<Self, GameError> {
        Self::new(candidates).set(secret)
    }

    /// Fresh game with a secret picked among the candidates
    ///
    /// # Errors
    /// Returns `GameError::NoCandidates` if `candidates` is empty.
    pub fn with_random_secret<C: Chooser + ?Sized>(
        candidates: Vec<Word>,
        chooser: &mut C,
    ) -> Result<Self, GameError> {
        let secret = *choose(&candidates, chooser).ok_or(GameError::NoCandidates)?;
        Self::with_secret(secret, candidates)
    }

    /// Fix the secret before the first guess
    ///
    /// # Errors
    /// Returns `GameError::InProgress` once a guess has been made, or
    /// `GameError::NotACandidate` if `secret` is not a candidate.
    pub fn set(&self, secret: Word) -> Result<Self, GameError> {
        if !self.guesses.is_empty() {
            return Err(GameError::InProgress);
        }
        if !self.candidates.contains(&secret) {
            return Err(GameError::NotACandidate(secret));
        }

        Ok(Self {
            secret: Some(secret),
            ..self.clone()
        })
    }

    /// Guess `guess` against the known secret
    ///
    /// # Errors
    /// Returns `GameError::SecretUnknown` if no secret is set.
    pub fn try_word(&self, guess: Word) -> Result<Self, GameError> {
        let secret = self.secret.ok_or(GameError::SecretUnknown)?;
        self.apply(guess, &Constraints::against(secret, guess))
    }

    /// Record `guess` with externally supplied feedback such as `"FUUPU"`
    ///
    /// # Errors
    /// Returns `GameError::InvalidFeedback` for a malformed spec, or
    /// `GameError::Conflict` if the feedback contradicts earlier feedback.
    pub fn tried(&self, guess: Word, spec: &str) -> Result<Self, GameError> {
        let revealed = Constraints::from_feedback(guess, spec)?;
        self.apply(guess, &revealed)
    }

    /// Guess a random candidate against the known secret
    ///
    /// # Errors
    /// Returns `GameError::NoCandidates` if no candidate remains, or
    /// `GameError::SecretUnknown` if no secret is set.
    pub fn guess_word<C: Chooser + ?Sized>(&self, chooser: &mut C) -> Result<Self, GameError> {
        let guess = *choose(&self.candidates, chooser).ok_or(GameError::NoCandidates)?;
        self.try_word(guess)
    }

    fn apply(&self, guess: Word, revealed: &Constraints) -> Result<Self, GameError> {
        let constraints = self.constraints.merged(revealed)?;
        let candidates = constraints.viable(&self.candidates);
        let mut guesses = self.guesses.clone();
        guesses.push(guess);

        Ok(Self {
            secret: self.secret,
            candidates,
            constraints,
            guesses,
        })
    }

    /// Untried candidates ranked by elimination, highest first
    ///
    /// Exact when the secret is known, otherwise averaged over every candidate
    /// as a hypothetical secret. Words already guessed stay candidates (a
    /// greyed repeat letter leaves no trace in the constraints) but are never
    /// ranked, so they are not suggested twice.
    #[must_use]
    pub fn hot_candidates(&self) -> Vec<WordElim> {
        let ranking = match self.secret {
            Some(secret) => rank_for_secret(&self.candidates, &self.constraints, secret),
            None => rank_averaged(&self.candidates, &self.constraints),
        };

        ranking
            .into_iter()
            .filter(|scored| !self.guesses.contains(&scored.word()))
            .collect()
    }

    /// Candidates sharing the highest elimination score
    #[must_use]
    pub fn hottest_candidates(&self) -> Vec<WordElim> {
        hottest(&self.hot_candidates())
    }

    /// One of the hottest candidates, or `None` when no candidate remains
    pub fn some_hot_candidate<C: Chooser + ?Sized>(&self, chooser: &mut C) -> Option<WordElim> {
        choose(&self.hottest_candidates(), chooser).copied()
    }

    /// Whether the last guess was the answer
    ///
    /// With a known secret the last guess must equal it; otherwise every
    /// letter of the last guess must be confirmed in place.
    #[must_use]
    pub fn done(&self) -> bool {
        let Some(last) = self.last_guess() else {
            return false;
        };

        match self.secret {
            Some(secret) => last == secret,
            None => last
                .indexed_letters()
                .all(|indexed| self.constraints.is_fixed_at(indexed.letter, indexed.position)),
        }
    }

    /// Whether the accumulated feedback excludes every candidate
    #[must_use]
    pub fn is_impossible(&self) -> bool {
        self.candidates.is_empty()
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        if self.done() {
            GameState::Solved
        } else if self.is_impossible() {
            GameState::Impossible
        } else if self.guesses.is_empty() {
            GameState::Fresh
        } else {
            GameState::InProgress
        }
    }

    #[must_use]
    pub const fn secret(&self) -> Option<Word> {
        self.secret
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub const fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn last_guess(&self) -> Option<Word> {
        self.guesses.last().copied()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secret = self
            .secret
            .map_or_else(|| "<secret>".to_string(), |word| word.to_string());
        let guesses: Vec<String> = self.guesses.iter().map(ToString::to_string).collect();

        write!(
            f,
            "Game[{secret}, guesses:{}, candidates:{}]",
            guesses.join(" "),
            self.candidates.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| word(w)).collect()
    }

    fn dictionary() -> Vec<Word> {
        words(&[
            "BEACH", "CRANE", "DAUNT", "FAINT", "FOYER", "GAUNT", "HAUNT", "PAINT", "PLANT",
            "ROUTE", "SAINT", "SLATE", "TAUNT", "VAUNT",
        ])
    }

    #[test]
    fn fresh_game_state() {
        let game = Game::new(dictionary());

        assert_eq!(game.state(), GameState::Fresh);
        assert!(!game.done());
        assert!(game.guesses().is_empty());
        assert!(game.constraints().is_empty());
        assert_eq!(game.secret(), None);
        assert_eq!(game.last_guess(), None);
    }

    #[test]
    fn solve_taunt_with_known_secret() {
        let game = Game::new(dictionary()).set(word("TAUNT")).unwrap();

        let after_foyer = game.try_word(word("FOYER")).unwrap();
        assert!(after_foyer.candidates().len() < game.candidates().len());
        assert_eq!(after_foyer.candidates().len(), 8);

        let after_paint = after_foyer.try_word(word("PAINT")).unwrap();
        assert!(after_paint.candidates().len() < after_foyer.candidates().len());
        assert_eq!(
            after_paint.candidates(),
            words(&["DAUNT", "GAUNT", "HAUNT", "TAUNT", "VAUNT"]).as_slice()
        );

        let hottest = after_paint.hottest_candidates();
        assert!(hottest.iter().any(|scored| scored.word() == word("TAUNT")));

        let solved = after_paint.try_word(word("TAUNT")).unwrap();
        assert!(solved.done());
        assert_eq!(solved.state(), GameState::Solved);
        assert_eq!(solved.guesses(), words(&["FOYER", "PAINT", "TAUNT"]).as_slice());
    }

    #[test]
    fn transitions_leave_previous_state_untouched() {
        let game = Game::with_secret(word("TAUNT"), dictionary()).unwrap();
        let before = game.clone();

        let next = game.try_word(word("FOYER")).unwrap();

        assert_eq!(game, before);
        assert_eq!(next.guesses().len(), 1);
        assert_eq!(next.state(), GameState::InProgress);
    }

    #[test]
    fn candidates_never_grow() {
        let mut game = Game::with_secret(word("GAUNT"), dictionary()).unwrap();

        for guess in ["SLATE", "BEACH", "PAINT", "TAUNT", "GAUNT"] {
            let next = game.try_word(word(guess)).unwrap();
            assert!(next.candidates().len() <= game.candidates().len());
            assert!(next.candidates().contains(&word("GAUNT")));
            game = next;
        }
        assert!(game.done());
    }

    #[test]
    fn set_rejects_unknown_word() {
        let result = Game::new(dictionary()).set(word("ZEBRA"));
        assert_eq!(result, Err(GameError::NotACandidate(word("ZEBRA"))));
    }

    #[test]
    fn set_rejected_after_first_guess() {
        let game = Game::new(dictionary()).tried(word("CRANE"), "UUPFU").unwrap();
        assert_eq!(game.set(word("TAUNT")), Err(GameError::InProgress));
    }

    #[test]
    fn try_word_needs_secret() {
        let game = Game::new(dictionary());
        assert_eq!(game.try_word(word("CRANE")), Err(GameError::SecretUnknown));
    }

    #[test]
    fn tried_filters_by_feedback() {
        let game = Game::new(dictionary()).tried(word("CRANE"), "UUPFU").unwrap();

        assert_eq!(
            game.candidates(),
            words(&[
                "DAUNT", "FAINT", "GAUNT", "HAUNT", "PAINT", "SAINT", "TAUNT", "VAUNT"
            ])
            .as_slice()
        );
        assert!(!game.done());
    }

    #[test]
    fn tried_rejects_malformed_spec() {
        let game = Game::new(dictionary());

        assert!(matches!(
            game.tried(word("CRANE"), "UUP"),
            Err(GameError::InvalidFeedback(FeedbackError::InvalidLength { .. }))
        ));
        assert!(matches!(
            game.tried(word("CRANE"), "UUPQU"),
            Err(GameError::InvalidFeedback(FeedbackError::UnknownCode { code: 'Q', .. }))
        ));
    }

    #[test]
    fn tried_rejects_conflicting_feedback() {
        let game = Game::new(dictionary()).tried(word("CRANE"), "UUUUU").unwrap();
        let result = game.tried(word("PAINT"), "UFUUU");

        assert_eq!(result, Err(GameError::Conflict(ConstraintConflict { letter: b'A' })));
    }

    #[test]
    fn contradictory_feedback_is_impossible_not_done() {
        let game = Game::new(words(&["ABCDE", "FGHIJ", "KLMNO"]))
            .tried(word("ABCDE"), "FUUUU")
            .unwrap();
        assert_eq!(game.candidates(), words(&["ABCDE"]).as_slice());

        let stuck = game.tried(word("FGHIJ"), "FUUUU").unwrap();
        assert!(stuck.candidates().is_empty());
        assert!(stuck.is_impossible());
        assert!(!stuck.done());
        assert_eq!(stuck.state(), GameState::Impossible);

        let still = stuck.tried(word("KLMNO"), "UUUUU").unwrap();
        assert!(!still.done());
        assert!(still.hot_candidates().is_empty());
        assert_eq!(still.some_hot_candidate(&mut |_: usize| 0), None);
    }

    #[test]
    fn feedback_all_fixed_is_solved() {
        let game = Game::new(dictionary()).tried(word("HAUNT"), "FFFFF").unwrap();

        assert!(game.done());
        assert_eq!(game.candidates(), words(&["HAUNT"]).as_slice());
    }

    #[test]
    fn guess_word_uses_chooser() {
        let game = Game::with_secret(word("TAUNT"), dictionary()).unwrap();
        let next = game.guess_word(&mut |_: usize| 0).unwrap();

        assert_eq!(next.last_guess(), Some(word("BEACH")));
    }

    #[test]
    fn guess_word_on_empty_candidates() {
        let game = Game::new(Vec::new());
        assert_eq!(game.guess_word(&mut |_: usize| 0), Err(GameError::NoCandidates));
    }

    #[test]
    fn with_random_secret_uses_chooser() {
        let game = Game::with_random_secret(dictionary(), &mut |len: usize| len - 1).unwrap();
        assert_eq!(game.secret(), Some(word("VAUNT")));
    }

    #[test]
    fn some_hot_candidate_is_deterministic_with_fixed_choice() {
        let game = Game::new(words(&["KLMNO", "ABCDE", "FGHIJ"]));

        assert_eq!(game.hottest_candidates().len(), 3);
        for _ in 0..5 {
            let picked = game.some_hot_candidate(&mut |len: usize| len - 1).unwrap();
            assert_eq!(picked.word(), word("KLMNO"));
        }
    }

    #[test]
    fn averaged_ranking_prefers_splitting_guess() {
        let game = Game::new(dictionary())
            .tried(word("FOYER"), "UUUUU")
            .unwrap()
            .tried(word("PAINT"), "UFUFF")
            .unwrap();

        assert_eq!(game.candidates().len(), 5);
        let ranking = game.hot_candidates();
        assert_eq!(ranking.len(), 5);
        assert!(ranking.windows(2).all(|p| p[0].eliminated() >= p[1].eliminated()));
    }

    #[test]
    fn repeated_letter_guess_is_not_suggested_again() {
        // The grey second L leaves SPELL consistent with its own feedback
        let game = Game::new(words(&["SPELL", "SPELT"]))
            .tried(word("SPELL"), "FFFFU")
            .unwrap();

        assert_eq!(game.candidates(), words(&["SPELL", "SPELT"]).as_slice());
        let ranked: Vec<Word> = game.hot_candidates().iter().map(WordElim::word).collect();
        assert_eq!(ranked, vec![word("SPELT")]);

        let next = game.some_hot_candidate(&mut |_: usize| 0).unwrap();
        assert_eq!(next.word(), word("SPELT"));

        let solved = game.tried(next.word(), "FFFFF").unwrap();
        assert!(solved.done());
    }

    #[test]
    fn repeated_letter_guess_skipped_with_known_secret() {
        let game = Game::with_secret(word("SPELT"), words(&["SPELL", "SPELT"]))
            .unwrap()
            .try_word(word("SPELL"))
            .unwrap();

        assert_eq!(game.candidates().len(), 2);
        let hottest: Vec<Word> = game.hottest_candidates().iter().map(WordElim::word).collect();
        assert_eq!(hottest, vec![word("SPELT")]);
    }

    #[test]
    fn display_hides_unknown_secret() {
        let game = Game::new(dictionary()).tried(word("CRANE"), "UUPFU").unwrap();
        assert_eq!(game.to_string(), "Game[<secret>, guesses:CRANE, candidates:8]");

        let known = Game::with_secret(word("TAUNT"), dictionary()).unwrap();
        assert_eq!(known.to_string(), "Game[TAUNT, guesses:, candidates:14]");
    }
}
