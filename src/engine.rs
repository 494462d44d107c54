//! The engine module contains the game-state machine: it draws words, resolves guesses and reports
//! the transitions between the states of a round.
//!
//! The engine performs no I/O. Every operation returns either a snapshot of the round for a
//! presenter to draw, or an error describing why nothing changed.

use fastrand::Rng;
use tracing::{debug, info, trace};

use crate::round::Round;
use crate::view::{Outcome, Resolution, RoundView, Status};
use crate::words::WordSource;

/// The mistake budget used when none is configured.
pub const DEFAULT_MAX_WRONG: u32 = 6;

/// The errors raised when building an [`EngineConfig`].
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The mistake budget was zero, which would lose every round before it starts.
    #[error("the mistake budget must be at least one")]
    ZeroMistakeBudget,
}

/// The settings fixed for the whole lifetime of an engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// This field contains the amount of wrong guesses that loses a round.
    max_wrong: u32,
}

impl EngineConfig {
    /// Returns the mistake budget.
    #[must_use]
    pub const fn max_wrong(&self) -> u32 {
        self.max_wrong
    }

    /// Creates a configuration with the given mistake budget.
    ///
    /// # Errors
    ///
    /// Fails with [`ConfigError::ZeroMistakeBudget`] if `max_wrong` is zero.
    pub const fn new(max_wrong: u32) -> Result<Self, ConfigError> {
        if max_wrong == 0 {
            return Err(ConfigError::ZeroMistakeBudget);
        }

        Ok(Self { max_wrong })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_wrong: DEFAULT_MAX_WRONG,
        }
    }
}

/// This structure owns the single active round of one game, together with the source words are
/// drawn from.
///
/// Independent games are independent engines. All mutation goes through `&mut self`, so calls on
/// one engine are always serialized; sharing an engine across threads takes a single `Mutex`
/// around it.
#[derive(Debug)]
pub struct GameEngine<S> {
    /// This field contains the settings the engine was built with.
    config: EngineConfig,
    /// This field contains the generator used to draw words.
    rng: Rng,
    /// This field contains the active round, if there is one.
    round: Option<Round>,
    /// This field contains the supplier of words.
    source: S,
}

impl<S: WordSource> GameEngine<S> {
    /// Returns the mistake budget configured for this engine.
    #[must_use]
    pub const fn max_wrong(&self) -> u32 {
        self.config.max_wrong
    }

    /// Creates an engine drawing from `source`, with a randomly seeded generator and no active
    /// round.
    #[must_use]
    pub fn new(source: S, config: EngineConfig) -> Self {
        Self::with_rng(source, config, Rng::new())
    }

    /// Replaces the word source. The active round, if any, is left untouched; the new source is
    /// drawn from on the next call to [`GameEngine::start_round`].
    pub fn replace_source(&mut self, source: S) {
        self.source = source;
    }

    /// Starts a new round with a word drawn uniformly at random from the source, discarding the
    /// previous round entirely.
    ///
    /// # Errors
    ///
    /// Fails with [`StartError::NoWordsAvailable`] if the source is empty, in which case the
    /// engine is left without an active round.
    pub fn start_round(&mut self) -> Result<RoundView, StartError> {
        self.round = None;

        let entries = self.source.entries();
        if entries.is_empty() {
            info!("no words available to start a round");
            return Err(StartError::NoWordsAvailable);
        }

        let entry = entries
            .get(self.rng.usize(..entries.len()))
            .ok_or(StartError::NoWordsAvailable)?;
        let round = Round::new(
            entry.word().to_ascii_lowercase(),
            entry.hint().to_owned(),
            self.config.max_wrong,
        );

        debug!(
            available = entries.len(),
            length = entry.word().len(),
            "round started"
        );
        trace!(word = entry.word(), "secret word drawn");

        let view = RoundView::of(&round);
        self.round = Some(round);

        Ok(view)
    }

    /// Submits a single letter, in either case.
    ///
    /// # Errors
    ///
    /// The input is checked in this order, and the first failing check is reported without
    /// changing the round:
    ///
    /// - [`GuessError::InvalidLetter`] if the letter is not in a-z once lowercased.
    /// - [`GuessError::RoundNotActive`] if there is no round or it has already been won or lost.
    /// - [`GuessError::AlreadyGuessed`] if the letter was guessed earlier in the round.
    pub fn submit_guess(&mut self, letter: char) -> Result<Resolution, GuessError> {
        let letter = letter.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return Err(GuessError::InvalidLetter(letter.to_string()));
        }

        let round = self
            .round
            .as_mut()
            .filter(|round| round.status() == Status::InProgress)
            .ok_or(GuessError::RoundNotActive)?;

        if round.has_guessed(letter) {
            return Err(GuessError::AlreadyGuessed(letter));
        }

        let hit = round.record(letter);
        let view = RoundView::of(round);
        let outcome = Outcome::from(view.status());

        debug!(
            %letter,
            hit,
            wrong = view.wrong_count(),
            max_wrong = view.max_wrong(),
            "guess resolved"
        );
        match outcome {
            Outcome::Continues => {}
            Outcome::Loses => info!(wrong = view.wrong_count(), "round lost"),
            Outcome::Wins => info!(wrong = view.wrong_count(), "round won"),
        }

        Ok(Resolution {
            hit,
            letter,
            outcome,
            view,
        })
    }

    /// Submits a guess typed as text, which must be exactly one character. No trimming happens
    /// here: `" a"` is two characters, and is rejected like any other string.
    ///
    /// # Errors
    ///
    /// Fails with [`GuessError::InvalidLetter`] if the input isn't a single character, and
    /// otherwise as [`GameEngine::submit_guess`] does.
    pub fn submit_text(&mut self, input: &str) -> Result<Resolution, GuessError> {
        let mut chars = input.chars();

        match (chars.next(), chars.next()) {
            (Some(letter), None) => self.submit_guess(letter),
            _ => Err(GuessError::InvalidLetter(input.to_owned())),
        }
    }

    /// Returns a snapshot of the active round, or `None` when there is nothing to display.
    #[must_use]
    pub fn view(&self) -> Option<RoundView> {
        self.round.as_ref().map(RoundView::of)
    }

    /// Creates an engine with an explicit generator, which makes word selection reproducible when
    /// the generator is seeded.
    #[must_use]
    pub const fn with_rng(source: S, config: EngineConfig, rng: Rng) -> Self {
        Self {
            config,
            rng,
            round: None,
            source,
        }
    }
}

/// The reasons a guess can be rejected. None of them change the round.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// The letter was already guessed this round.
    #[error("'{0}' was already guessed")]
    AlreadyGuessed(char),
    /// The input was not a single letter a-z.
    #[error("'{0}' is not a single letter a-z")]
    InvalidLetter(String),
    /// There is no round in progress.
    #[error("there is no round in progress")]
    RoundNotActive,
}

/// The reasons a round can fail to start.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StartError {
    /// The word source had no entries.
    #[error("no words are available to start a round")]
    NoWordsAvailable,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::Entry;

    fn engine(words: &[(&str, &str)], max_wrong: u32) -> GameEngine<Vec<Entry>> {
        let entries = words
            .iter()
            .map(|&(word, hint)| Entry::new(word, hint).unwrap())
            .collect();
        let config = EngineConfig::new(max_wrong).unwrap();

        GameEngine::with_rng(entries, config, Rng::with_seed(7))
    }

    #[test]
    fn scenario_cat_is_won_after_one_miss() {
        let mut engine = engine(&[("cat", "feline pet")], 6);
        let view = engine.start_round().unwrap();
        assert_eq!(view.hint(), "feline pet", "hint is exposed");
        assert_eq!(view.masked_word(), "_ _ _", "fully masked");
        assert!(view.used_letters().is_empty(), "nothing used yet");

        let miss = engine.submit_guess('z').unwrap();
        assert!(!miss.hit, "z is not in cat");
        assert_eq!(miss.view.wrong_count(), 1, "one mistake");
        assert_eq!(miss.view.status(), Status::InProgress, "playing");
        assert_eq!(miss.view.masked_word(), "_ _ _", "nothing revealed");
        assert_eq!(miss.outcome, Outcome::Continues, "continues");

        let hit = engine.submit_guess('c').unwrap();
        assert_eq!(hit.view.masked_word(), "c _ _", "c revealed");
        assert_eq!(hit.view.status(), Status::InProgress, "playing");

        let hit = engine.submit_guess('a').unwrap();
        assert_eq!(hit.view.masked_word(), "c a _", "a revealed");

        let last = engine.submit_guess('t').unwrap();
        assert_eq!(last.view.masked_word(), "c a t", "all revealed");
        assert_eq!(last.view.status(), Status::Won, "won");
        assert_eq!(last.outcome, Outcome::Wins, "reported once");
        assert_eq!(
            last.view.used_letters(),
            &['z', 'c', 'a', 't'],
            "letters are listed in guess order"
        );
    }

    #[test]
    fn scenario_dog_is_lost_with_a_budget_of_one() {
        let mut engine = engine(&[("dog", "barks")], 1);
        let _view = engine.start_round().unwrap();

        let miss = engine.submit_guess('x').unwrap();
        assert_eq!(miss.view.wrong_count(), 1, "one mistake");
        assert_eq!(miss.view.status(), Status::Lost, "budget spent");
        assert_eq!(miss.view.revealed_word(), Some("dog"), "revealed");
        assert_eq!(miss.outcome, Outcome::Loses, "reported once");

        assert_eq!(
            engine.submit_guess('d'),
            Err(GuessError::RoundNotActive),
            "terminal rounds take no guesses"
        );
    }

    #[test]
    fn scenario_empty_source_has_no_round() {
        let mut engine = engine(&[], 6);

        assert_eq!(
            engine.start_round(),
            Err(StartError::NoWordsAvailable),
            "there is nothing to draw from"
        );
        assert_eq!(engine.view(), None, "no active round");
        assert_eq!(
            engine.submit_guess('a'),
            Err(GuessError::RoundNotActive),
            "there is no round to guess in"
        );
    }

    #[test]
    fn failed_start_discards_the_previous_round() {
        let mut engine = engine(&[("cat", "feline pet")], 6);
        let _view = engine.start_round().unwrap();
        engine.replace_source(Vec::new());

        assert_eq!(
            engine.start_round(),
            Err(StartError::NoWordsAvailable),
            "the source is empty now"
        );
        assert_eq!(engine.view(), None, "the old round is gone");
    }

    #[test]
    fn guessing_before_any_round_is_rejected() {
        let mut engine = engine(&[("cat", "feline pet")], 6);
        let result = engine.submit_guess('c');

        assert_eq!(result, Err(GuessError::RoundNotActive), "no round");
    }

    #[test]
    fn same_letter_twice_is_already_guessed() {
        let mut engine = engine(&[("cat", "feline pet")], 6);
        let _view = engine.start_round().unwrap();

        assert!(engine.submit_guess('q').is_ok(), "first time is fine");
        assert_eq!(
            engine.submit_guess('q'),
            Err(GuessError::AlreadyGuessed('q')),
            "a repeated miss is rejected"
        );
        assert!(engine.submit_guess('a').is_ok(), "first time is fine");
        assert_eq!(
            engine.submit_guess('A'),
            Err(GuessError::AlreadyGuessed('a')),
            "a repeated hit is rejected in any case"
        );

        let view = engine.view().unwrap();
        assert_eq!(view.wrong_count(), 1, "repeats cost nothing");
    }

    #[test]
    fn uppercase_guesses_are_normalized() {
        let mut engine = engine(&[("cat", "feline pet")], 6);
        let _view = engine.start_round().unwrap();
        let resolution = engine.submit_guess('C').unwrap();

        assert!(resolution.hit, "C counts as c");
        assert_eq!(resolution.letter, 'c', "reported lowercase");
        assert_eq!(resolution.view.masked_word(), "c _ _", "revealed");
    }

    #[test]
    fn invalid_input_never_mutates_the_round() {
        let mut engine = engine(&[("cat", "feline pet")], 6);
        let _view = engine.start_round().unwrap();
        let before = engine.view();

        for input in ["7", "ab", "", " ", "?", "\u{e9}", "cat"] {
            let result = engine.submit_text(input);
            let invalid = GuessError::InvalidLetter(input.to_owned());
            assert_eq!(result, Err(invalid), "{input:?} is not a letter");
        }
        for letter in ['1', '-', '\u{df}', ' '] {
            let result = engine.submit_guess(letter);
            let invalid = GuessError::InvalidLetter(letter.to_string());
            assert_eq!(result, Err(invalid), "{letter:?} is not a letter");
        }

        assert_eq!(engine.view(), before, "round unchanged");
    }

    #[test]
    fn invalid_letter_is_checked_before_round_state() {
        let mut engine = engine(&[], 6);
        let result = engine.submit_guess('5');
        let invalid = GuessError::InvalidLetter("5".to_owned());

        assert_eq!(result, Err(invalid), "validation comes first");
    }

    #[test]
    fn padded_text_is_not_a_single_letter() {
        let mut engine = engine(&[("cat", "feline pet")], 6);
        let _view = engine.start_round().unwrap();
        let before = engine.view();

        for input in [" a", "b\n", "  t\n", "c "] {
            let result = engine.submit_text(input);
            let invalid = GuessError::InvalidLetter(input.to_owned());
            assert_eq!(result, Err(invalid), "{input:?} has whitespace");
        }

        assert_eq!(engine.view(), before, "no letter recorded, no mistake");
        assert!(engine.submit_text("t").unwrap().hit, "bare letters work");
    }

    #[test]
    fn wrong_count_never_exceeds_the_budget() {
        let mut engine = engine(&[("jazz", "music")], 3);
        let _view = engine.start_round().unwrap();

        for letter in 'a'..='z' {
            let _result = engine.submit_guess(letter);
            let view = engine.view().unwrap();
            assert!(view.wrong_count() <= view.max_wrong(), "{letter}");
        }

        let view = engine.view().unwrap();
        assert_eq!(view.status(), Status::Lost, "b, c and d are misses");
    }

    #[test]
    fn won_exactly_when_every_distinct_letter_is_guessed() {
        let mut engine = engine(&[("banana", "yellow fruit")], 6);
        let _view = engine.start_round().unwrap();
        let steps = [
            ('b', Status::InProgress),
            ('n', Status::InProgress),
            ('a', Status::Won),
        ];

        for (letter, expected) in steps {
            let resolution = engine.submit_guess(letter).unwrap();
            assert_eq!(resolution.view.status(), expected, "after {letter}");
        }
    }

    #[test]
    fn new_round_starts_from_scratch() {
        let mut engine = engine(&[("dog", "barks")], 2);
        let _view = engine.start_round().unwrap();
        let _miss = engine.submit_guess('x').unwrap();
        let lost = engine.submit_guess('y').unwrap();
        assert_eq!(lost.view.status(), Status::Lost, "lost first");

        let view = engine.start_round().unwrap();
        assert_eq!(view.status(), Status::InProgress, "playing again");
        assert_eq!(view.wrong_count(), 0, "no leftover mistakes");
        assert!(view.used_letters().is_empty(), "no leftover letters");
        assert!(engine.submit_guess('x').is_ok(), "x is fresh again");
    }

    #[test]
    fn seeded_engines_draw_the_same_words() {
        let words = [("cat", "a"), ("dog", "b"), ("owl", "c"), ("fox", "d")];
        let mut first = engine(&words, 6);
        let mut second = engine(&words, 6);

        for _ in 0..10 {
            let expected = first.start_round();
            assert_eq!(second.start_round(), expected, "same seed");
        }
    }

    #[test]
    fn every_entry_can_be_drawn() {
        let words = [("cat", "a"), ("dog", "b"), ("owl", "c")];
        let mut engine = engine(&words, 6);
        let mut hints = Vec::new();

        for _ in 0..200 {
            let view = engine.start_round().unwrap();
            if !hints.contains(&view.hint().to_owned()) {
                hints.push(view.hint().to_owned());
            }
        }

        assert_eq!(hints.len(), 3, "uniform draws reach every entry");
    }

    #[test]
    fn zero_budget_is_rejected() {
        let zero = EngineConfig::new(0);
        let default = EngineConfig::default();

        assert_eq!(zero, Err(ConfigError::ZeroMistakeBudget), "zero");
        assert_eq!(default.max_wrong(), DEFAULT_MAX_WRONG, "default");
    }
}
