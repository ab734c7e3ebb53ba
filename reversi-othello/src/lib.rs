//! `reversi-othello` implements the rules of Reversi (Othello) for engines and UIs.
//!
//! This package implements three levels of abstraction:
//!
//!  - [`Board`] is a flat, 64-cell occupancy model with unchecked neighbourhood semantics:
//!    setting a cell never touches its neighbours.
//!  - [`movegen`] casts rays in the eight [`Direction`]s to find legal moves and the cells
//!    each one captures, and applies captures to a [`Board`].
//!  - [`Game`] is the turn state machine. It validates submitted moves, skips players who
//!    are forced to pass and detects the end of the game.
//!
//! Cells are indexed `row * 8 + col`, so index 0 is the upper-left corner ("A1") and
//! index 63 the lower-right ("H8").

pub mod movegen;
pub mod test_utils;

mod board;
mod direction;
mod error;
mod game;
mod location;
mod utils;

pub use board::*;
pub use direction::*;
pub use error::*;
pub use game::*;
pub use location::*;
pub use movegen::{Move, MoveList};

/// The number of spaces on one edge of a Reversi board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on a Reversi board.
pub const NUM_SPACES: usize = 64;
