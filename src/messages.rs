//! This module contains the console presenter. It draws the gallows, the masked word and the rest
//! of the round's state on the terminal, and prints a message after every guess.
//!
//! Every line is built from a [`RoundView`] alone; styling is only applied when writing to the
//! terminal, so the plain text can be checked on its own.

use anyhow::Result;
use console::{style, Term};

use crate::engine::{GuessError, StartError};
use crate::presenter::Presenter;
use crate::view::{Outcome, Resolution, RoundView, Status};

/// The amount of body parts drawn on the gallows once the mistake budget is spent.
const PARTS: u32 = 6;

/// This struct renders rounds on a terminal.
pub(crate) struct Console {
    /// This field contains the terminal every line is written to.
    term: Term,
}

impl Console {
    /// This function draws the whole board for the given view, replacing whatever was on screen.
    fn draw(&self, view: &RoundView) -> Result<()> {
        self.term.clear_screen()?;

        for line in board(view) {
            self.term.write_line(&line)?;
        }

        Ok(())
    }

    /// This function creates a presenter that writes to the given terminal.
    pub(crate) const fn new(term: Term) -> Self {
        Self { term }
    }
}

impl Presenter for Console {
    fn guess_rejected(&mut self, error: &GuessError) -> Result<()> {
        let message = style(capitalized(error)).yellow();
        self.term.write_line(&format!("{message}"))?;

        Ok(())
    }

    fn guess_resolved(&mut self, resolution: &Resolution) -> Result<()> {
        self.draw(&resolution.view)?;

        let message = verdict(resolution);
        let message = match resolution.outcome {
            Outcome::Continues => style(message),
            Outcome::Loses => style(message).bold().red(),
            Outcome::Wins => style(message).bold().green(),
        };
        self.term.write_line(&format!("{message}"))?;

        Ok(())
    }

    fn no_round(&mut self, error: &StartError) -> Result<()> {
        let message = style(capitalized(error)).bold().red();
        self.term.clear_screen()?;
        self.term.write_line(&format!("{message}"))?;
        self.term
            .write_line("Check the word list passed with --words or --words-url.")?;

        Ok(())
    }

    fn round_started(&mut self, view: &RoundView) -> Result<()> {
        self.draw(view)
    }
}

/// This function lays out the gallows followed by the state of the round, one string per line.
fn board(view: &RoundView) -> Vec<String> {
    let used = if view.used_letters().is_empty() {
        String::from("-")
    } else {
        view.used_letters()
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    };

    let mut lines = gallows(parts_shown(view)).to_vec();
    lines.extend([
        String::new(),
        format!("Word:     {}", view.masked_word()),
        format!("Hint:     {}", view.hint()),
        format!("Used:     {used}"),
        format!("Mistakes: {}/{}", view.wrong_count(), view.max_wrong()),
        String::new(),
    ]);

    lines
}

/// This function turns an error message into a sentence.
fn capitalized<E: ToString>(error: &E) -> String {
    let message = error.to_string();
    let mut chars = message.chars();

    chars.next().map_or_else(String::new, |first| {
        format!("{}{}.", first.to_ascii_uppercase(), chars.as_str())
    })
}

/// This function draws the gallows with the given amount of body parts, in the order head, body,
/// left arm, right arm, left leg and right leg.
fn gallows(parts: u32) -> [String; 7] {
    let part = |index: u32, symbol: char| if parts > index { symbol } else { ' ' };

    [
        String::from("  +---+"),
        String::from("  |   |"),
        format!("  |   {}", part(0, 'O')),
        format!("  |  {}{}{}", part(2, '/'), part(1, '|'), part(3, '\\')),
        format!("  |  {} {}", part(4, '/'), part(5, '\\')),
        String::from("  |"),
        String::from("====="),
    ]
    .map(|line| line.trim_end().to_owned())
}

/// This function maps the mistakes made onto the body parts of the drawing, so that the figure is
/// complete exactly when the round is lost, whatever the mistake budget.
fn parts_shown(view: &RoundView) -> u32 {
    if view.status() == Status::Lost {
        return PARTS;
    }

    view.wrong_count()
        .saturating_mul(PARTS)
        .checked_div(view.max_wrong())
        .unwrap_or(PARTS)
        .min(PARTS)
}

/// This function returns the message printed under the board after an accepted guess.
fn verdict(resolution: &Resolution) -> String {
    let view = &resolution.view;
    let letter = resolution.letter;

    match resolution.outcome {
        Outcome::Continues if resolution.hit => format!("Good guess! '{letter}' is in the word."),
        Outcome::Continues => format!(
            "No luck, '{letter}' is not in the word. {} mistake(s) left.",
            view.remaining()
        ),
        Outcome::Loses => format!(
            "Out of mistakes! The word was '{}'.",
            view.revealed_word().unwrap_or_default()
        ),
        Outcome::Wins => format!(
            "You got it! The word was '{}'.",
            view.masked_word().replace(' ', "")
        ),
    }
}
