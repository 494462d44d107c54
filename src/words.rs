//! The words module contains everything related to supplying the engine with `(word, hint)` pairs.
//!
//! The engine only ever sees the [`WordSource`] trait. Loading a list, be it the built-in one, a
//! local file or a remote JSON listing, happens before a source is handed to the engine, and any
//! failure there is up to the caller to report. A source that failed to load is simply an empty
//! one as far as the engine is concerned.

mod embedded;
mod file;
mod remote;

use std::path::Path;

use tracing::debug;

/// A single `(word, hint)` pair. Words are validated and lowercased on construction, so an entry
/// always holds a non-empty word made of ASCII letters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// This field contains the free-form hint text.
    hint: String,
    /// This field contains the lowercase word.
    word: String,
}

impl Entry {
    /// Returns the hint paired with the word.
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Creates a new entry out of a word and its hint. The word is matched case-insensitively and
    /// stored in lowercase.
    ///
    /// # Errors
    ///
    /// Fails with [`WordsError::EmptyWord`] if the word is empty, and with
    /// [`WordsError::NonAlphabetic`] if it has anything other than ASCII letters in it.
    pub fn new(word: &str, hint: &str) -> Result<Self, WordsError> {
        if word.is_empty() {
            return Err(WordsError::EmptyWord);
        }

        if !word.chars().all(|letter| letter.is_ascii_alphabetic()) {
            return Err(WordsError::NonAlphabetic(word.to_owned()));
        }

        Ok(Self {
            hint: hint.to_owned(),
            word: word.to_ascii_lowercase(),
        })
    }

    /// Returns the lowercase word.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }
}

/// A loaded list of entries, whatever its origin.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordList {
    /// This field contains the entries, in the order they were loaded.
    entries: Vec<Entry>,
}

impl WordList {
    /// Returns the list that ships with the game.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_entries(embedded::entries())
    }

    /// Fetches a JSON array of `{ "word": ..., "hint": ... }` objects from the given URL. Objects
    /// with an invalid word are skipped.
    ///
    /// # Errors
    ///
    /// Fails with [`WordsError::Http`] if the request fails or the body isn't the expected JSON.
    pub fn fetch(url: &str) -> Result<Self, WordsError> {
        remote::fetch(url).map(Self::from_entries)
    }

    /// Wraps already built entries.
    #[must_use]
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        debug!(entries = entries.len(), "word list loaded");
        Self { entries }
    }

    /// Reads a word file from disk. See [`WordList::parse`] for the format.
    ///
    /// # Errors
    ///
    /// Fails with [`WordsError::Io`] if the file can't be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, WordsError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parses the contents of a word file: one `word = hint` entry per line. Blank lines and lines
    /// starting with `#` are ignored, and malformed lines are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Fails with [`WordsError::Pattern`] if the line pattern can't be compiled.
    pub fn parse(text: &str) -> Result<Self, WordsError> {
        file::parse(text).map(Self::from_entries)
    }
}

impl WordSource for WordList {
    fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

/// This trait describes a supplier of `(word, hint)` entries. The collection is pulled
/// synchronously every time a round starts, and may be empty.
pub trait WordSource {
    /// Returns every entry currently available.
    fn entries(&self) -> &[Entry];
}

impl WordSource for Vec<Entry> {
    fn entries(&self) -> &[Entry] {
        self
    }
}

/// The errors raised while building entries or loading a word list.
#[expect(
    clippy::arbitrary_source_item_ordering,
    reason = "The entry errors come first, then the loading errors."
)]
#[derive(thiserror::Error, Debug)]
pub enum WordsError {
    /// A word was empty.
    #[error("empty word")]
    EmptyWord,
    /// A word had characters other than ASCII letters.
    #[error("'{0}' is not made of letters a-z only")]
    NonAlphabetic(String),
    /// The remote word list couldn't be fetched or decoded.
    #[error("could not fetch the word list: {0}")]
    Http(#[from] ureq::Error),
    /// The word file couldn't be read.
    #[error("could not read the word file: {0}")]
    Io(#[from] std::io::Error),
    /// The pattern for word file lines failed to compile.
    #[error("invalid word file pattern: {0}")]
    Pattern(#[from] regex::Error),
}
