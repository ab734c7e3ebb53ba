//! Static evaluation of a board.
//!
//! The score is a weighted sum of three balances, each counting +1 for every cell the
//! perspective player owns and -1 for every cell the opponent owns:
//!
//!  - corners (the four corner cells), weight 20;
//!  - edges (every cell on the outer ring, corners included), weight 10;
//!  - pieces (every cell), weight 1.
//!
//! Corners therefore count three times and other edge cells twice. Scores are only
//! meaningful relative to each other.

use reversi_othello::{Board, Location, Player};

pub const CORNER_WEIGHT: f64 = 20.0;
pub const EDGE_WEIGHT: f64 = 10.0;
pub const PIECE_WEIGHT: f64 = 1.0;

/// Score `board` for `perspective` against `opponent`.
pub fn evaluate(board: &Board, perspective: Player, opponent: Player) -> f64 {
    let corner = corner_score(board, perspective, opponent);
    let edge = edge_score(board, perspective, opponent);
    let pieces = piece_score(board, perspective, opponent);

    f64::from(corner) * CORNER_WEIGHT
        + f64::from(edge) * EDGE_WEIGHT
        + f64::from(pieces) * PIECE_WEIGHT
}

pub fn corner_score(board: &Board, perspective: Player, opponent: Player) -> i32 {
    balance(board, Location::CORNERS.iter().copied(), perspective, opponent)
}

pub fn edge_score(board: &Board, perspective: Player, opponent: Player) -> i32 {
    balance(board, Location::all().filter(|loc| loc.is_edge()), perspective, opponent)
}

pub fn piece_score(board: &Board, perspective: Player, opponent: Player) -> i32 {
    balance(board, Location::all(), perspective, opponent)
}

fn balance<I>(board: &Board, cells: I, perspective: Player, opponent: Player) -> i32
where
    I: Iterator<Item = Location>,
{
    cells
        .map(|loc| match board.get(loc).player() {
            Some(owner) if owner == perspective => 1,
            Some(owner) if owner == opponent => -1,
            _ => 0,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reversi_othello::Occupant;

    fn with_black_at(index: usize) -> Board {
        let mut board = Board::empty();
        board.set(index, Occupant::Black).unwrap();
        board
    }

    #[test]
    fn starting_position_is_balanced() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Player::Black, Player::White), 0.0);
        assert_eq!(evaluate(&board, Player::White, Player::Black), 0.0);
    }

    #[test]
    fn corners_count_three_times() {
        for &corner in [0, 7, 56, 63].iter() {
            let board = with_black_at(corner);
            assert_eq!(corner_score(&board, Player::Black, Player::White), 1);
            assert_eq!(edge_score(&board, Player::Black, Player::White), 1);
            assert_eq!(piece_score(&board, Player::Black, Player::White), 1);
            assert_eq!(evaluate(&board, Player::Black, Player::White), 31.0);
            assert_eq!(evaluate(&board, Player::White, Player::Black), -31.0);
        }
    }

    #[test]
    fn edges_count_twice() {
        for &edge in [1, 8, 15, 62].iter() {
            let board = with_black_at(edge);
            assert_eq!(evaluate(&board, Player::Black, Player::White), 11.0);
        }
    }

    #[test]
    fn interior_counts_once() {
        let board = with_black_at(27);
        assert_eq!(evaluate(&board, Player::Black, Player::White), 1.0);
    }

    #[test]
    fn full_board_bounds() {
        let board: Board = "X".repeat(64).parse().unwrap();
        // 4 corners, 28 edge cells, 64 pieces.
        assert_eq!(evaluate(&board, Player::Black, Player::White), 424.0);
        assert_eq!(evaluate(&board, Player::White, Player::Black), -424.0);
    }

    #[test]
    fn mixed_board() {
        let board: Board = "
            X - - - - - - O
            - - - - - - - -
            O - - - - - - -
            - - - X O - - -
            - - - O X - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - X"
            .parse()
            .unwrap();
        // corners: X at 0 and 63, O at 7 -> +1
        // edges: X at 0, 63; O at 7, 16 -> 0
        // pieces: 4 X, 4 O -> 0
        assert_eq!(evaluate(&board, Player::Black, Player::White), 20.0);
    }
}
