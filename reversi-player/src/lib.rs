//! `reversi-player` is a computer opponent for [`reversi_othello`].
//!
//!  - [`eval`] scores a board with a fixed corner / edge / piece-count heuristic.
//!  - [`search`] runs depth-bounded minimax over copies of the board.
//!  - [`Match`] drives a human-versus-computer game; [`agents`] let two
//!    programs play each other.

pub mod agents;
pub mod eval;
pub mod search;

mod config;
mod interactive;
mod session;

pub use agents::{play_out, Agent, MinimaxAgent, PlayError, RandomAgent};
pub use config::{ConfigError, PlayerConfig};
pub use eval::evaluate;
pub use interactive::play_interactive;
pub use search::{Minimax, SearchExhaustedError, SearchResult};
pub use session::{ComputerTurnError, Match};
