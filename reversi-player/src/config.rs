//! Settings fixed at the start of a human-versus-computer game.

use derive_more::{Display, Error};
use reversi_othello::Player;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerConfig {
    /// The color the human plays. The computer takes the other one.
    pub human: Player,

    /// Minimax lookahead in plies (difficulty). Must be at least 1.
    pub search_depth: u8,

    /// Stop expanding the search tree once this much time has passed,
    /// scoring the remaining nodes statically.
    pub time_limit: Option<Duration>,

    /// Use alpha-beta pruning. Does not change the chosen move.
    pub pruning: bool,

    /// Search each top-level move on its own thread.
    pub parallel: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    #[display(fmt = "search depth must be at least 1")]
    ZeroDepth,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            human: Player::Black,
            search_depth: 3,
            time_limit: None,
            pruning: true,
            parallel: false,
        }
    }
}

impl PlayerConfig {
    pub fn with_human(mut self, human: Player) -> Self {
        self.human = human;
        self
    }

    pub fn with_search_depth(mut self, depth: u8) -> Self {
        self.search_depth = depth;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The color the computer plays.
    pub fn computer(&self) -> Player {
        !self.human
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }
}
