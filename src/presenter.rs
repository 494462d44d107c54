//! The presenter module defines the observer that renders the engine's snapshots.

use anyhow::Result;

use crate::engine::{GuessError, StartError};
use crate::view::{Resolution, RoundView};

/// This trait is implemented by anything that shows the game to the player.
///
/// The session calls it after every engine operation; an implementation derives every visual
/// effect from the snapshot it is handed, and never asks the engine for more.
pub trait Presenter {
    /// Called after a guess was rejected. The round is unchanged.
    ///
    /// # Errors
    ///
    /// Any error raised while drawing.
    fn guess_rejected(&mut self, error: &GuessError) -> Result<()>;

    /// Called after a guess was accepted. `resolution.outcome` is `Wins` or `Loses` only on the
    /// one call that ended the round.
    ///
    /// # Errors
    ///
    /// Any error raised while drawing.
    fn guess_resolved(&mut self, resolution: &Resolution) -> Result<()>;

    /// Called when a round couldn't start; there is nothing to display.
    ///
    /// # Errors
    ///
    /// Any error raised while drawing.
    fn no_round(&mut self, error: &StartError) -> Result<()>;

    /// Called after a new round started.
    ///
    /// # Errors
    ///
    /// Any error raised while drawing.
    fn round_started(&mut self, view: &RoundView) -> Result<()>;
}
