//! Programs that can take a turn, and a loop that lets two of them play.

use crate::search::Minimax;
use derive_more::{Display, Error};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;
use reversi_othello::{Game, IllegalMoveError, Location, Player};

/// Something that picks moves for whichever player is to move in a [`Game`].
pub trait Agent {
    /// Choose one of `game`'s legal moves, or `None` if there is nothing to play.
    fn choose_move(&mut self, game: &Game) -> Option<Location>;
}

/// Plays the move a [`Minimax`] search prefers.
#[derive(Clone, Copy, Debug)]
pub struct MinimaxAgent {
    depth: u8,
    pruning: bool,
}

impl MinimaxAgent {
    pub fn new(depth: u8) -> Self {
        Self {
            depth,
            pruning: true,
        }
    }

    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }
}

impl Agent for MinimaxAgent {
    fn choose_move(&mut self, game: &Game) -> Option<Location> {
        let player = game.to_move()?;
        Minimax::new(player, self.depth)
            .with_pruning(self.pruning)
            .choose_move(game)
            .ok()
    }
}

/// Plays uniformly at random among the legal moves. Seeded, so games are reproducible.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn choose_move(&mut self, game: &Game) -> Option<Location> {
        game.legal_moves()
            .locations()
            .into_iter()
            .choose(&mut self.rng)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum PlayError {
    #[display(fmt = "{} had no move to play", player)]
    NoMove { player: Player },
    #[display(fmt = "{} chose an illegal move: {}", player, source)]
    Illegal {
        player: Player,
        source: IllegalMoveError,
    },
}

/// Play `game` to the end with `black` and `white` taking their turns.
pub fn play_out(
    mut game: Game,
    black: &mut dyn Agent,
    white: &mut dyn Agent,
) -> Result<Game, PlayError> {
    while let Some(player) = game.to_move() {
        let agent: &mut dyn Agent = match player {
            Player::Black => &mut *black,
            Player::White => &mut *white,
        };

        let location = agent
            .choose_move(&game)
            .ok_or(PlayError::NoMove { player })?;
        game.submit_move(player, location)
            .map_err(|source| PlayError::Illegal { player, source })?;
    }

    Ok(game)
}
