//! This module contains all functions related to taking input from the user. They all use the
//! `dialoguer` crate to prompt on the terminal.
//!
//! Guesses are taken as text with the surrounding whitespace stripped; whether what's left makes up
//! a valid letter is for the engine to decide, so that every rejection is reported the same way.

use anyhow::Result;
use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};

/// This function asks a yes or no question, defaulting to yes.
pub(crate) fn confirm(term: &Term, question: &str) -> Result<bool> {
    let answer = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style(question).bold()))
        .default(true)
        .interact_on(term)?;

    Ok(answer)
}

/// This function is in charge of taking the next guess from the user.
pub(crate) fn take_guess(term: &Term) -> Result<String> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style("Guess a letter").bold()))
        .interact_text_on(term)?;

    Ok(tidy(&input))
}

/// This function strips the whitespace the terminal leaves around what the user typed.
fn tidy(input: &str) -> String {
    input.trim().to_owned()
}
