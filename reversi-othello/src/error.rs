//! Errors raised by the rules engine.

use crate::{Location, Player};
use derive_more::{Display, Error};

/// A board index outside `0..64`. Correct callers never see this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "index {} is outside the board", index)]
pub struct IndexError {
    pub index: usize,
}

/// A move submission the [`Game`](crate::Game) refused. The board is left untouched,
/// so the caller can ask the same player for another move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum IllegalMoveError {
    #[display(fmt = "{} cannot play {}", player, location)]
    NotLegal { player: Player, location: Location },
    #[display(fmt = "it is not {}'s turn", player)]
    NotYourTurn { player: Player },
    #[display(fmt = "the game is over")]
    GameOver,
}
