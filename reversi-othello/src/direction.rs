//! The eight ray directions and the wall checks that keep rays on the board.
//!
//! Every step a ray takes goes through [`Direction::step`], which consults the
//! direction's wall test *before* computing the next index. A horizontal component must
//! not wrap from column 7 to column 0 (or back), and a vertical component must not leave
//! the top or bottom row.

use crate::{Location, EDGE_LENGTH};
use derive_more::Display;

/// One of the eight compass directions a capture ray can travel in.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Direction {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl Direction {
    /// All directions, in the order rays are cast.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::S,
        Direction::E,
        Direction::W,
        Direction::NE,
        Direction::NW,
        Direction::SE,
        Direction::SW,
    ];

    /// Row and column offsets of a single step.
    #[inline]
    pub const fn offsets(self) -> (isize, isize) {
        match self {
            Direction::N => (-1, 0),
            Direction::S => (1, 0),
            Direction::E => (0, 1),
            Direction::W => (0, -1),
            Direction::NE => (-1, 1),
            Direction::NW => (-1, -1),
            Direction::SE => (1, 1),
            Direction::SW => (1, -1),
        }
    }

    /// Change in row-major index of a single step.
    #[inline]
    pub const fn delta(self) -> isize {
        let (row, col) = self.offsets();
        row * EDGE_LENGTH as isize + col
    }

    /// Whether a step from `loc` in this direction would leave the board.
    #[inline]
    pub fn at_wall(self, loc: Location) -> bool {
        const LAST: usize = EDGE_LENGTH - 1;
        let (row, col) = loc.to_coords();
        let (row_offset, col_offset) = self.offsets();

        (row_offset < 0 && row == 0)
            || (row_offset > 0 && row == LAST)
            || (col_offset < 0 && col == 0)
            || (col_offset > 0 && col == LAST)
    }

    /// The neighbour of `loc` in this direction, or `None` at a wall.
    #[inline]
    pub fn step(self, loc: Location) -> Option<Location> {
        if self.at_wall(loc) {
            return None;
        }
        let next = loc.index() as isize + self.delta();
        Some(Location::from_index_unchecked(next as u8))
    }

    /// The direction pointing the opposite way.
    pub const fn reverse(self) -> Self {
        match self {
            Direction::N => Direction::S,
            Direction::S => Direction::N,
            Direction::E => Direction::W,
            Direction::W => Direction::E,
            Direction::NE => Direction::SW,
            Direction::NW => Direction::SE,
            Direction::SE => Direction::NW,
            Direction::SW => Direction::NE,
        }
    }

    /// Walk from `origin` (exclusive) in this direction until the wall.
    pub fn ray(self, origin: Location) -> Ray {
        Ray {
            direction: self,
            current: origin,
        }
    }
}

/// The cells met when walking from an origin towards a wall, origin excluded.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    direction: Direction,
    current: Location,
}

impl Iterator for Ray {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        let next = self.direction.step(self.current)?;
        self.current = next;
        Some(next)
    }
}
