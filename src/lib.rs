//! The library components of the game. They allow drawing words from a word list, resolving
//! guesses against the secret word and rendering the state of a round on the terminal.
//!
//! The heart of the library is [`GameEngine`], a small state machine that owns the active round.
//! It performs no I/O: it hands out [`RoundView`] snapshots and leaves drawing to a
//! [`Presenter`]. The starting point of the binary is [`init`], which contains the game loop.

#![expect(
    clippy::cargo_common_metadata,
    reason = "The package has not yet been pushed to a remote."
)]

mod engine;
mod game;
mod input;
mod messages;
mod presenter;
mod round;
mod view;
mod words;

pub use engine::{
    ConfigError, EngineConfig, GameEngine, GuessError, StartError, DEFAULT_MAX_WRONG,
};
pub use game::{init, play_round};
pub use presenter::Presenter;
pub use view::{Outcome, Resolution, RoundView, Status};
pub use words::{Entry, WordList, WordSource, WordsError};
