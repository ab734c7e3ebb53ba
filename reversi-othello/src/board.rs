//! The flat 64-cell board.
//!
//! A [`Board`] only stores who occupies each cell. It does not know the rules:
//! [`Board::set`] changes exactly one cell, and keeping the position consistent is the job
//! of [`movegen`](crate::movegen).

use crate::{utils, IndexError, Location, LocationSet, Player, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt::{self, Formatter};

/// What sits on a single cell.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Occupant {
    Black,
    White,
    Empty,
}

impl Default for Occupant {
    fn default() -> Self {
        Occupant::Empty
    }
}

impl From<Player> for Occupant {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Occupant::Black,
            Player::White => Occupant::White,
        }
    }
}

impl Occupant {
    /// The player owning this cell, if any.
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Occupant::Black => Some(Player::Black),
            Occupant::White => Some(Player::White),
            Occupant::Empty => None,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Occupant::Empty
    }

    /// The character used for this occupant in board text.
    pub fn symbol(self) -> char {
        match self {
            Occupant::Black => 'X',
            Occupant::White => 'O',
            Occupant::Empty => '-',
        }
    }
}

/// 64 cells in row-major order (`row * 8 + col`).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    cells: [Occupant; NUM_SPACES],
}

/// Starting cells for Black.
pub const BLACK_START: [usize; 2] = [27, 36];

/// Starting cells for White.
pub const WHITE_START: [usize; 2] = [28, 35];

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The four-piece starting position.
    pub fn new() -> Self {
        let mut cells = [Occupant::Empty; NUM_SPACES];
        for &index in BLACK_START.iter() {
            cells[index] = Occupant::Black;
        }
        for &index in WHITE_START.iter() {
            cells[index] = Occupant::White;
        }
        Self { cells }
    }

    /// A board with no pieces on it.
    pub fn empty() -> Self {
        Self::from_cells([Occupant::Empty; NUM_SPACES])
    }

    pub fn from_cells(cells: [Occupant; NUM_SPACES]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Occupant; NUM_SPACES] {
        &self.cells
    }

    /// The occupant at a raw index.
    #[inline]
    pub fn occupant_at(&self, index: usize) -> Result<Occupant, IndexError> {
        self.cells.get(index).copied().ok_or(IndexError { index })
    }

    /// Overwrite a single cell at a raw index. Neighbours are left as they are.
    #[inline]
    pub fn set(&mut self, index: usize, occupant: Occupant) -> Result<(), IndexError> {
        let cell = self.cells.get_mut(index).ok_or(IndexError { index })?;
        *cell = occupant;
        Ok(())
    }

    /// The occupant at an already-validated location.
    #[inline]
    pub fn get(&self, loc: Location) -> Occupant {
        self.cells[loc.index()]
    }

    /// Overwrite the cell at an already-validated location.
    #[inline]
    pub fn put(&mut self, loc: Location, occupant: Occupant) {
        self.cells[loc.index()] = occupant;
    }

    /// Count the cells owned by `player`.
    pub fn count_of(&self, player: Player) -> u8 {
        let occupant = Occupant::from(player);
        self.cells.iter().filter(|&&cell| cell == occupant).count() as u8
    }

    /// Count the empty cells.
    pub fn count_empty(&self) -> u8 {
        self.cells.iter().filter(|cell| cell.is_empty()).count() as u8
    }

    /// Every location owned by `player`.
    pub fn pieces(&self, player: Player) -> LocationSet {
        let occupant = Occupant::from(player);
        Location::all()
            .filter(|&loc| self.get(loc) == occupant)
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(f, |loc| self.get(loc).symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "unexpected character {:?} in board", symbol)]
    BadSymbol { symbol: char },
    #[display(fmt = "board has {} cells, expected 64", count)]
    WrongLength { count: usize },
}

/// Parse 64 cell symbols in row-major order: `X`/`B` for Black, `O`/`W` for White,
/// `-`/`.` for Empty. Whitespace is ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(board_string: &str) -> Result<Self, Self::Err> {
        let mut cells = [Occupant::Empty; NUM_SPACES];
        let mut count = 0;

        for symbol in board_string.chars().filter(|c| !c.is_whitespace()) {
            let occupant = match symbol.to_ascii_uppercase() {
                'X' | 'B' => Occupant::Black,
                'O' | 'W' => Occupant::White,
                '-' | '.' => Occupant::Empty,
                _ => return Err(ParseBoardError::BadSymbol { symbol }),
            };
            if count < NUM_SPACES {
                cells[count] = occupant;
            }
            count += 1;
        }

        if count != NUM_SPACES {
            return Err(ParseBoardError::WrongLength { count });
        }
        Ok(Self::from_cells(cells))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_board() {
        let board = Board::new();
        for index in 0..NUM_SPACES {
            let expected = match index {
                27 | 36 => Occupant::Black,
                28 | 35 => Occupant::White,
                _ => Occupant::Empty,
            };
            assert_eq!(board.occupant_at(index), Ok(expected));
        }
        assert_eq!(board.count_of(Player::Black), 2);
        assert_eq!(board.count_of(Player::White), 2);
        assert_eq!(board.count_empty(), 60);
    }

    #[test]
    fn out_of_range_access_fails() {
        let mut board = Board::new();
        assert_eq!(board.occupant_at(64), Err(IndexError { index: 64 }));
        assert_eq!(
            board.set(100, Occupant::Black),
            Err(IndexError { index: 100 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn set_touches_one_cell() {
        let mut board = Board::new();
        board.set(19, Occupant::Black).unwrap();
        assert_eq!(board.occupant_at(19), Ok(Occupant::Black));
        assert_eq!(board.occupant_at(27), Ok(Occupant::Black));
        assert_eq!(board.occupant_at(28), Ok(Occupant::White));
        assert_eq!(board.count_of(Player::Black), 3);
    }

    #[test]
    fn copies_are_independent() {
        let original = Board::new();
        let mut copy = original;
        copy.set(0, Occupant::White).unwrap();
        assert_eq!(original.occupant_at(0), Ok(Occupant::Empty));
        assert_eq!(copy.occupant_at(0), Ok(Occupant::White));
    }

    #[test]
    fn parse_round_trips_display_symbols() {
        let text = "
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - X O - - -
            - - - O X - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -";
        let board: Board = text.parse().unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn parse_failures() {
        assert_eq!(
            "X".parse::<Board>(),
            Err(ParseBoardError::WrongLength { count: 1 })
        );
        let too_long = "-".repeat(65);
        assert_eq!(
            too_long.parse::<Board>(),
            Err(ParseBoardError::WrongLength { count: 65 })
        );
        let bad = format!("{}?", "-".repeat(63));
        assert_eq!(
            bad.parse::<Board>(),
            Err(ParseBoardError::BadSymbol { symbol: '?' })
        );
    }

    #[test]
    fn pieces_lists_owned_cells() {
        let board = Board::new();
        let black: Vec<usize> = board
            .pieces(Player::Black)
            .into_iter()
            .map(Location::index)
            .collect();
        assert_eq!(black, vec![27, 36]);
    }
}
