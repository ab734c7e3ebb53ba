//! Legal move generation by ray casting.
//!
//! From every cell the acting player owns, a ray is cast in each [`Direction`]. A ray that
//! crosses one or more opponent cells and then lands on an empty cell makes that empty cell
//! a legal move, capturing the opponent cells it crossed. The same destination can be
//! reached from several origins and directions; its capture sets are unioned.

use crate::{Board, Direction, Location, LocationSet, Occupant, Player, NUM_SPACES};
use std::fmt;

/// A legal placement and every cell it captures.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Move {
    pub location: Location,
    pub flips: LocationSet,
}

/// The legal moves of one player, keyed by destination.
/// Iterates in ascending destination index, which is the order search breaks ties in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct MoveList {
    destinations: LocationSet,
    flips: [LocationSet; NUM_SPACES],
}

impl Default for MoveList {
    fn default() -> Self {
        Self {
            destinations: LocationSet::EMPTY,
            flips: [LocationSet::EMPTY; NUM_SPACES],
        }
    }
}

impl MoveList {
    /// Record a capture run ending at `destination`, merging with earlier runs.
    fn add(&mut self, destination: Location, run: LocationSet) {
        self.destinations.insert(destination);
        self.flips[destination.index()] |= run;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.destinations.count() as usize
    }

    #[inline]
    pub fn contains(&self, loc: Location) -> bool {
        self.destinations.contains(loc)
    }

    /// The move at `loc`, if it is legal.
    pub fn get(&self, loc: Location) -> Option<Move> {
        if !self.contains(loc) {
            return None;
        }
        Some(Move {
            location: loc,
            flips: self.flips[loc.index()],
        })
    }

    /// All legal destinations.
    #[inline]
    pub fn locations(&self) -> LocationSet {
        self.destinations
    }

    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.destinations.into_iter().map(move |loc| Move {
            location: loc,
            flips: self.flips[loc.index()],
        })
    }
}

impl fmt::Display for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.destinations, f)
    }
}

/// Compute every legal move for `player` on `board`.
pub fn legal_moves(board: &Board, player: Player) -> MoveList {
    let mut moves = MoveList::default();

    for origin in board.pieces(player) {
        for &direction in Direction::ALL.iter() {
            if let Some((destination, run)) = cast(board, player, origin, direction) {
                moves.add(destination, run);
            }
        }
    }

    moves
}

/// Whether `player` has at least one legal move.
pub fn has_moves(board: &Board, player: Player) -> bool {
    !legal_moves(board, player).is_empty()
}

/// Follow one ray out of `origin`. Yields the empty cell that ends a capture run, with the
/// run itself, or `None` if the ray hits a wall, an own piece, or an empty cell too early.
fn cast(
    board: &Board,
    player: Player,
    origin: Location,
    direction: Direction,
) -> Option<(Location, LocationSet)> {
    let opponent = Occupant::from(!player);
    let mut run = LocationSet::EMPTY;

    for loc in direction.ray(origin) {
        match board.get(loc) {
            cell if cell == opponent => run.insert(loc),
            Occupant::Empty if !run.is_empty() => return Some((loc, run)),
            _ => return None,
        }
    }

    None
}

/// Compute the cells a placement at `loc` would capture, walking outward from the
/// destination. Empty when `loc` is occupied or captures nothing.
pub fn flips_from(board: &Board, player: Player, loc: Location) -> LocationSet {
    if !board.get(loc).is_empty() {
        return LocationSet::EMPTY;
    }

    let own = Occupant::from(player);
    let opponent = Occupant::from(!player);
    let mut flips = LocationSet::EMPTY;

    for &direction in Direction::ALL.iter() {
        let mut run = LocationSet::EMPTY;
        for cell in direction.ray(loc) {
            match board.get(cell) {
                occupant if occupant == opponent => run.insert(cell),
                occupant if occupant == own => {
                    flips |= run;
                    break;
                }
                _ => break,
            }
        }
    }

    flips
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(index: usize) -> Location {
        Location::from_index(index).unwrap()
    }

    fn indices(set: LocationSet) -> Vec<usize> {
        set.into_iter().map(Location::index).collect()
    }

    #[test]
    fn black_opening_moves() {
        let moves = legal_moves(&Board::new(), Player::Black);
        assert_eq!(indices(moves.locations()), vec![20, 29, 34, 43]);
        for mv in moves.iter() {
            assert_eq!(mv.flips.count(), 1, "{}", mv.location);
        }
        assert_eq!(indices(moves.get(loc(20)).unwrap().flips), vec![28]);
        assert_eq!(indices(moves.get(loc(43)).unwrap().flips), vec![35]);
    }

    #[test]
    fn white_opening_moves() {
        let moves = legal_moves(&Board::new(), Player::White);
        assert_eq!(indices(moves.locations()), vec![19, 26, 37, 44]);
    }

    #[test]
    fn mirrored_layout_gives_mirrored_moves() {
        let board: Board = "
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - O X - - -
            - - - X O - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -"
            .parse()
            .unwrap();
        let moves = legal_moves(&board, Player::Black);
        assert_eq!(indices(moves.locations()), vec![19, 26, 37, 44]);
        assert!(moves.iter().all(|mv| mv.flips.count() == 1));
    }

    #[test]
    fn capture_sets_union_across_directions() {
        // A1 captures B1 eastwards and B2 diagonally.
        let board: Board = "
            - O X - - - - -
            - O - - - - - -
            - - X - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -"
            .parse()
            .unwrap();
        let moves = legal_moves(&board, Player::Black);
        let corner = moves.get(loc(0)).unwrap();
        assert_eq!(indices(corner.flips), vec![1, 9]);
        assert_eq!(corner.flips, flips_from(&board, Player::Black, loc(0)));
    }

    #[test]
    fn rays_do_not_wrap_rows() {
        // H1 and A2 are adjacent in memory. A wrapping ray would let Black capture H1
        // westwards from A2, or White capture A2 eastwards from H1.
        let board: Board = "
            - - - - - - - O
            X - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -"
            .parse()
            .unwrap();
        let moves = legal_moves(&board, Player::Black);
        assert!(moves.is_empty(), "phantom moves: {}", moves);
        assert!(legal_moves(&board, Player::White).is_empty());

        let board: Board = "
            - - - - - - - -
            - - - - - - - O
            X - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -"
            .parse()
            .unwrap();
        // H2 is index 15 and A3 is 16: adjacent in memory, not on the board.
        assert!(legal_moves(&board, Player::Black).is_empty());
        assert!(legal_moves(&board, Player::White).is_empty());
    }

    #[test]
    fn no_move_without_flankable_run() {
        let board: Board = "
            X X - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - O"
            .parse()
            .unwrap();
        assert!(legal_moves(&board, Player::Black).is_empty());
        assert!(!has_moves(&board, Player::White));
    }

    #[test]
    fn long_run_ending_at_wall_is_not_a_move() {
        let board: Board = "
            X O O O O O O O
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -"
            .parse()
            .unwrap();
        assert!(legal_moves(&board, Player::Black).is_empty());
    }

    #[test]
    fn flips_from_occupied_cell_is_empty() {
        let board = Board::new();
        assert!(flips_from(&board, Player::Black, loc(27)).is_empty());
        assert!(flips_from(&board, Player::Black, loc(0)).is_empty());
    }

    #[test]
    fn generator_agrees_with_flips_from() {
        let board = Board::new();
        for &player in [Player::Black, Player::White].iter() {
            let moves = legal_moves(&board, player);
            for cell in Location::all() {
                let flips = flips_from(&board, player, cell);
                assert_eq!(moves.contains(cell), !flips.is_empty());
                if let Some(mv) = moves.get(cell) {
                    assert_eq!(mv.flips, flips);
                }
            }
        }
    }
}
