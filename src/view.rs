//! The view module contains the declarative snapshots handed out by the engine. A presenter renders
//! exclusively from these, never from the engine's internal state.

use serde::Serialize;

use crate::round::Round;

/// This enum holds the transition produced by a single accepted guess, so that one-time effects
/// such as a result message fire exactly once rather than on every render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The round is still in progress after the guess.
    Continues,
    /// The guess spent the last allowed mistake.
    Loses,
    /// The guess revealed the last missing letter.
    Wins,
}

impl From<Status> for Outcome {
    fn from(status: Status) -> Self {
        match status {
            Status::InProgress => Self::Continues,
            Status::Lost => Self::Loses,
            Status::Won => Self::Wins,
        }
    }
}

/// The result of an accepted guess: the transition it caused and the state of the round after it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Whether the guessed letter occurs in the secret word.
    pub hit: bool,
    /// The letter that was accepted, normalized to lowercase.
    pub letter: char,
    /// The transition this guess caused.
    pub outcome: Outcome,
    /// The round as it stands after the guess.
    pub view: RoundView,
}

/// This structure is a snapshot of the active round with everything a presenter needs to draw it.
///
/// The secret word is only exposed once the round is lost; a won round shows it through the
/// masked word anyway.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundView {
    /// This field contains the hint paired with the secret word.
    hint: String,
    /// This field contains the masked secret word.
    masked: String,
    /// This field contains the mistake budget of the engine.
    max_wrong: u32,
    /// This field contains the secret word, only once the round is lost.
    revealed: Option<String>,
    /// This field contains the status of the round.
    status: Status,
    /// This field contains the guessed letters in the order they were submitted.
    used: Vec<char>,
    /// This field contains the amount of wrong guesses so far.
    wrong_count: u32,
}

impl RoundView {
    /// Returns the hint paired with the secret word.
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Returns the secret word with unguessed letters blanked out, e.g. `c _ t`.
    #[must_use]
    pub fn masked_word(&self) -> &str {
        &self.masked
    }

    /// Returns the mistake budget.
    #[must_use]
    pub const fn max_wrong(&self) -> u32 {
        self.max_wrong
    }

    /// This function takes a snapshot of the given round.
    pub(crate) fn of(round: &Round) -> Self {
        let status = round.status();
        let lost = status == Status::Lost;

        Self {
            hint: round.hint().to_owned(),
            masked: round.mask(),
            max_wrong: round.max_wrong(),
            revealed: lost.then(|| round.secret().to_owned()),
            status,
            used: round.guessed().to_vec(),
            wrong_count: round.wrong_count(),
        }
    }

    /// Returns the amount of mistakes left before the round is lost.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.max_wrong.saturating_sub(self.wrong_count)
    }

    /// Returns the secret word if the round has been lost, and `None` otherwise.
    #[must_use]
    pub fn revealed_word(&self) -> Option<&str> {
        self.revealed.as_deref()
    }

    /// Returns the status of the round.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the guessed letters in the order they were submitted.
    #[must_use]
    pub fn used_letters(&self) -> &[char] {
        &self.used
    }

    /// Returns the amount of wrong guesses so far.
    #[must_use]
    pub const fn wrong_count(&self) -> u32 {
        self.wrong_count
    }
}

/// This enum holds the state of a round. It is derived from the round's fields and can't be set
/// directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Guesses are still accepted.
    InProgress,
    /// The mistake budget was spent; the round is terminal.
    Lost,
    /// Every letter of the word was revealed; the round is terminal.
    Won,
}

impl Status {
    /// Returns whether the round no longer accepts guesses.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lost_view_reveals_the_word() {
        let mut round = Round::new("dog".to_owned(), "barks".to_owned(), 1);
        let _hit = round.record('x');
        let view = RoundView::of(&round);

        assert_eq!(view.status(), Status::Lost, "budget of one");
        assert_eq!(view.revealed_word(), Some("dog"), "lost rounds reveal");
        assert_eq!(view.remaining(), 0, "nothing left");
    }

    #[test]
    fn view_in_progress_keeps_the_word_hidden() {
        let mut round = Round::new("dog".to_owned(), "barks".to_owned(), 6);
        let _hit = round.record('d');
        let view = RoundView::of(&round);

        assert_eq!(view.revealed_word(), None, "still playing");
        assert_eq!(view.masked_word(), "d _ _", "d was guessed");
        assert_eq!(view.used_letters(), &['d'], "one letter used");
        assert_eq!(view.hint(), "barks", "hint is carried over");
        assert_eq!(view.remaining(), 6, "a hit costs nothing");
    }

    #[test]
    fn outcome_mirrors_status() {
        let pairs = [
            (Status::InProgress, Outcome::Continues),
            (Status::Lost, Outcome::Loses),
            (Status::Won, Outcome::Wins),
        ];

        for (status, outcome) in pairs {
            assert_eq!(Outcome::from(status), outcome, "{status:?}");
        }
        assert!(Status::Won.is_terminal(), "won is terminal");
        assert!(!Status::InProgress.is_terminal(), "in progress is not");
    }
}
