//! # gallows
//!
//! This crate is the classic word-guessing game of hangman, played on the terminal. A word and its
//! hint are drawn at random, and you guess the word one letter at a time before the figure on the
//! gallows is complete.
//!
//! Words come from a built-in list by default, or from a local word file or a JSON list served
//! over HTTP. Run with `--help` for the options.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use anyhow::Result;
use gallows::init;

fn main() -> Result<()> {
    init()
}
