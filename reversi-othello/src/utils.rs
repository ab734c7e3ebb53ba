//! Miscellaneous project utilities.

use crate::{Location, EDGE_LENGTH};
use std::fmt::{self, Formatter};

/// Lay out the board as a grid labelled with column letters and row numbers,
/// asking `symbol` for the character to draw at each location.
pub fn format_grid<F>(f: &mut Formatter, symbol: F) -> fmt::Result
where
    F: Fn(Location) -> char,
{
    f.write_str("   A B C D E F G H")?;

    for row in 0..EDGE_LENGTH {
        write!(f, "\n {} ", row + 1)?;
        for col in 0..EDGE_LENGTH {
            let loc = Location::from_coords(row, col).map_err(|_| fmt::Error)?;
            write!(f, "{} ", symbol(loc))?;
        }
    }
    Ok(())
}
