//! Implements game-level Reversi logic: the turn state machine.
//!
//! A [`Game`] is always either waiting for a specific player to move or finished. When a
//! player has no legal move the turn passes straight to the opponent, so callers never
//! submit passes themselves; the game ends once neither player can move.

use crate::movegen::{self, Move, MoveList};
use crate::{utils, Board, IllegalMoveError, Location, LocationSet, Occupant};
use derive_more::{Display, Error};
use log::debug;
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Player {
    Black,
    White,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "expected \"black\" or \"white\"")]
pub struct ParsePlayerError;

impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" | "x" => Ok(Player::Black),
            "white" | "w" | "o" => Ok(Player::White),
            _ => Err(ParsePlayerError),
        }
    }
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Outcome {
    #[display(fmt = "{} wins", _0)]
    Winner(Player),
    #[display(fmt = "tie")]
    Tie,
}

impl Outcome {
    /// Decide the outcome by piece count alone.
    pub fn of(board: &Board) -> Self {
        let black = board.count_of(Player::Black);
        let white = board.count_of(Player::White);

        if black > white {
            Outcome::Winner(Player::Black)
        } else if white > black {
            Outcome::Winner(Player::White)
        } else {
            Outcome::Tie
        }
    }
}

/// Where the turn state machine stands.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GameStatus {
    InProgress { to_move: Player },
    Over { outcome: Outcome },
}

/// Everything a renderer needs to animate one accepted move.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MoveReport {
    pub player: Player,
    pub location: Location,
    pub flips: LocationSet,
    /// The player who was skipped after this move for lack of legal moves.
    pub passed: Option<Player>,
    pub status: GameStatus,
}

/// Place `mv.location` and flip its capture set for `player`.
/// Works on any board; no turn bookkeeping happens here.
#[inline]
pub fn apply_capture(board: &mut Board, player: Player, mv: &Move) {
    let occupant = Occupant::from(player);
    board.put(mv.location, occupant);
    for loc in mv.flips {
        board.put(loc, occupant);
    }
}

/// The complete state of a Reversi game.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Game {
    board: Board,
    status: GameStatus,
    legal_moves: MoveList,
}

impl Default for Game {
    /// Gets the starting position with Black to move.
    fn default() -> Self {
        Self::with_board(Board::new(), Player::default())
    }
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary position with `first` to move. If `first` cannot move the
    /// turn passes immediately, and if neither player can the game is already over.
    pub fn with_board(board: Board, first: Player) -> Self {
        let mut game = Self {
            board,
            status: GameStatus::InProgress { to_move: first },
            legal_moves: MoveList::default(),
        };
        game.enter_turn(first);
        game
    }

    /// Hand the turn to `player`, skipping them if they cannot move.
    /// Returns the player who was forced to pass, if any.
    fn enter_turn(&mut self, player: Player) -> Option<Player> {
        let moves = movegen::legal_moves(&self.board, player);
        if !moves.is_empty() {
            self.status = GameStatus::InProgress { to_move: player };
            self.legal_moves = moves;
            return None;
        }

        let opponent_moves = movegen::legal_moves(&self.board, !player);
        if opponent_moves.is_empty() {
            let outcome = Outcome::of(&self.board);
            debug!("no legal moves for either player: {}", outcome);
            self.status = GameStatus::Over { outcome };
            self.legal_moves = MoveList::default();
            return None;
        }

        debug!("{} has no legal moves and passes", player);
        self.status = GameStatus::InProgress { to_move: !player };
        self.legal_moves = opponent_moves;
        Some(player)
    }

    /// Play `location` for `player`. Fails without touching the board unless the game is
    /// running, it is `player`'s turn and `location` is one of their legal moves.
    pub fn submit_move(
        &mut self,
        player: Player,
        location: Location,
    ) -> Result<MoveReport, IllegalMoveError> {
        let to_move = match self.status {
            GameStatus::Over { .. } => return Err(IllegalMoveError::GameOver),
            GameStatus::InProgress { to_move } => to_move,
        };
        if to_move != player {
            return Err(IllegalMoveError::NotYourTurn { player });
        }

        let mv = self
            .legal_moves
            .get(location)
            .ok_or(IllegalMoveError::NotLegal { player, location })?;

        apply_capture(&mut self.board, player, &mv);
        let passed = self.enter_turn(!player);

        Ok(MoveReport {
            player,
            location,
            flips: mv.flips,
            passed,
            status: self.status,
        })
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Legal moves for the player to move; empty once the game is over.
    #[inline]
    pub fn legal_moves(&self) -> &MoveList {
        &self.legal_moves
    }

    /// The player whose turn it is, or `None` if the game is over.
    pub fn to_move(&self) -> Option<Player> {
        match self.status {
            GameStatus::InProgress { to_move } => Some(to_move),
            GameStatus::Over { .. } => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::Over { .. })
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::Over { outcome } => Some(outcome),
            GameStatus::InProgress { .. } => None,
        }
    }

    /// Get the winning player, if the game is over and not tied.
    pub fn winner(&self) -> Option<Player> {
        match self.outcome() {
            Some(Outcome::Winner(player)) => Some(player),
            _ => None,
        }
    }

    /// Piece counts as (black, white).
    pub fn score(&self) -> (u8, u8) {
        (
            self.board.count_of(Player::Black),
            self.board.count_of(Player::White),
        )
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(f, |loc| {
            if self.legal_moves.contains(loc) {
                '*'
            } else {
                self.board.get(loc).symbol()
            }
        })?;

        let (black, white) = self.score();
        write!(f, "\nBlack (X): {}  White (O): {}\n", black, white)?;
        match self.status {
            GameStatus::InProgress { to_move } => write!(f, "{} to move", to_move),
            GameStatus::Over { outcome } => write!(f, "Game over: {}", outcome),
        }
    }
}
