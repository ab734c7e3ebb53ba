//! Code for working with [`Location`]s and [`LocationSet`]s on the board.

use crate::{IndexError, EDGE_LENGTH, NUM_SPACES};
use derive_more::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};
use itertools::Itertools;
use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter, Write};

/// A location on the board, stored as a row-major index in `0..64`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Location(u8);

/// A set of locations on the board, one bit per index.
/// Iterates in ascending index order.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct LocationSet(u64);

impl Location {
    /// The four corners, in index order.
    pub const CORNERS: [Location; 4] = [Location(0), Location(7), Location(56), Location(63)];

    /// Convert from a row-major index, failing outside `0..64`.
    #[inline]
    pub fn from_index(index: usize) -> Result<Self, IndexError> {
        if index < NUM_SPACES {
            Ok(Self(index as u8))
        } else {
            Err(IndexError { index })
        }
    }

    /// Convert from a row-major index without checking bounds.
    /// Results in inconsistent state if `index >= 64`.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Self {
        Self(index)
    }

    /// Convert into a row-major index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Convert from row and column coordinates.
    pub fn from_coords(row: usize, col: usize) -> Result<Self, IndexError> {
        if row >= EDGE_LENGTH || col >= EDGE_LENGTH {
            return Err(IndexError {
                index: row * EDGE_LENGTH + col,
            });
        }
        Ok(Self((row * EDGE_LENGTH + col) as u8))
    }

    #[inline]
    pub fn row(self) -> usize {
        self.index() / EDGE_LENGTH
    }

    #[inline]
    pub fn col(self) -> usize {
        self.index() % EDGE_LENGTH
    }

    /// Get the row and column coordinates.
    pub fn to_coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    /// Whether this location lies on the outer ring of the board.
    pub fn is_edge(self) -> bool {
        let last = EDGE_LENGTH - 1;
        self.row() == 0 || self.row() == last || self.col() == 0 || self.col() == last
    }

    pub fn is_corner(self) -> bool {
        Self::CORNERS.contains(&self)
    }

    /// Iterate over every location in index order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..NUM_SPACES as u8).map(Location)
    }
}

impl TryFrom<usize> for Location {
    type Error = IndexError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

impl From<Location> for usize {
    fn from(loc: Location) -> Self {
        loc.index()
    }
}

/// Convert this [`Location`] into string notation ("A4").
impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = "ABCDEFGH".chars().nth(self.col()).ok_or(fmt::Error)?;
        let row_str = "12345678".chars().nth(self.row()).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Debug, PartialEq)]
pub struct ParseLocationError;

impl Display for ParseLocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid location string")
    }
}

impl std::error::Error for ParseLocationError {}

/// Build a [`Location`] from a 1-indexed string notation ("A4") or a bare index ("27").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return Self::from_index(index).or(Err(ParseLocationError));
        }

        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if row == 0 || chars.next() != None {
            return Err(ParseLocationError);
        }

        Self::from_coords(row - 1, col).or(Err(ParseLocationError))
    }
}

impl LocationSet {
    pub const EMPTY: Self = Self(0);

    #[inline]
    pub fn single(loc: Location) -> Self {
        Self(1 << loc.0)
    }

    #[inline]
    pub fn insert(&mut self, loc: Location) {
        self.0 |= 1 << loc.0;
    }

    /// Returns whether `loc` is in this set.
    #[inline]
    pub fn contains(self, loc: Location) -> bool {
        self.0 & (1 << loc.0) != 0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Count the locations in this set.
    #[inline]
    pub fn count(self) -> u8 {
        self.0.count_ones() as u8
    }
}

impl std::iter::FromIterator<Location> for LocationSet {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for loc in iter {
            set.insert(loc);
        }
        set
    }
}

/// Iterator over the members of a [`LocationSet`], lowest index first.
#[derive(Clone, Copy, Debug)]
pub struct Locations(u64);

impl Iterator for Locations {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        if self.0 == 0 {
            return None;
        }

        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Location(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Locations {}

impl IntoIterator for LocationSet {
    type Item = Location;
    type IntoIter = Locations;

    fn into_iter(self) -> Self::IntoIter {
        Locations(self.0)
    }
}

impl Display for LocationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.into_iter().join(", "))
    }
}
