//! The round module holds the mutable state of a single game in progress, and the pure functions
//! derived from it, namely the status of the round and the masked rendition of the secret word.

use crate::view::Status;

/// The placeholder shown in the masked word for every position whose letter is yet to be guessed.
pub(crate) const BLANK: char = '_';

/// This structure holds the state of one round, from the moment a word is drawn until a new round
/// replaces it.
///
/// The status is never stored; it is computed from the guessed letters and the mistake count, so
/// it can't drift away from the fields it depends on.
#[derive(Clone, Debug)]
pub(crate) struct Round {
    /// This field contains the guessed letters in the order they were submitted.
    guessed: Vec<char>,
    /// This field contains the hint paired with the secret word.
    hint: String,
    /// This field contains the amount of wrong guesses that ends the round.
    max_wrong: u32,
    /// This field contains the lowercase word to be guessed.
    secret: String,
    /// This field contains the amount of guessed letters that are not in the secret word.
    wrong_count: u32,
}

impl Round {
    /// This function returns the guessed letters in submission order.
    pub(crate) fn guessed(&self) -> &[char] {
        &self.guessed
    }

    /// This function returns whether the letter has already been guessed this round.
    pub(crate) fn has_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter)
    }

    /// This function returns the hint paired with the secret word.
    pub(crate) fn hint(&self) -> &str {
        &self.hint
    }

    /// This function returns whether every distinct letter of the secret word has been guessed.
    fn is_complete(&self) -> bool {
        self.secret.chars().all(|letter| self.has_guessed(letter))
    }

    /// This function renders the secret word with every unguessed position replaced by the blank
    /// placeholder, and positions separated by a single space.
    ///
    /// Repeated letters are revealed together, since every position is checked on its own against
    /// the guessed set.
    pub(crate) fn mask(&self) -> String {
        let mut masked = String::with_capacity(self.secret.len() * 2);

        for (position, letter) in self.secret.chars().enumerate() {
            if position > 0 {
                masked.push(' ');
            }

            masked.push(if self.has_guessed(letter) {
                letter
            } else {
                BLANK
            });
        }

        masked
    }

    /// This function returns the mistake budget of the round.
    pub(crate) const fn max_wrong(&self) -> u32 {
        self.max_wrong
    }

    /// This function creates a fresh round for an already normalized word.
    pub(crate) const fn new(secret: String, hint: String, max_wrong: u32) -> Self {
        Self {
            guessed: Vec::new(),
            hint,
            max_wrong,
            secret,
            wrong_count: 0,
        }
    }

    /// This function records a letter that has not been guessed before and returns whether it was
    /// part of the secret word. Misses count towards the mistake budget.
    pub(crate) fn record(&mut self, letter: char) -> bool {
        self.guessed.push(letter);

        let hit = self.secret.contains(letter);
        if !hit {
            self.wrong_count = self.wrong_count.saturating_add(1);
        }

        hit
    }

    /// This function returns the secret word.
    pub(crate) fn secret(&self) -> &str {
        &self.secret
    }

    /// This function derives the status of the round. A miss never completes the word, so a spent
    /// budget and a complete word never hold at once.
    pub(crate) fn status(&self) -> Status {
        if self.wrong_count >= self.max_wrong {
            Status::Lost
        } else if self.is_complete() {
            Status::Won
        } else {
            Status::InProgress
        }
    }

    /// This function returns the amount of misses so far.
    pub(crate) const fn wrong_count(&self) -> u32 {
        self.wrong_count
    }
}
