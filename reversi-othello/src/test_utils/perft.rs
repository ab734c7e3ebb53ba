//! "Perft" move generation test: count the number of leaves at a given depth.
//! A pass counts as a ply; two passes in a row end the game.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::game::apply_capture;
use crate::{movegen, Board, Player};

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Board::new(), Player::Black, depth, false)
}

fn leaves_below(board: Board, player: Player, depth: u64, passed: bool) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = movegen::legal_moves(&board, player);
    if moves.is_empty() {
        if passed {
            return 1;
        }
        return leaves_below(board, !player, depth - 1, true);
    }

    moves
        .iter()
        .map(|mv| {
            let mut next = board;
            apply_capture(&mut next, player, &mv);
            leaves_below(next, !player, depth - 1, false)
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), 1396);
}

#[test]
fn perft_06() {
    assert_eq!(run_perft(6), 8200);
}

#[test]
fn perft_07() {
    assert_eq!(run_perft(7), 55092);
}

#[test]
#[ignore]
fn perft_08() {
    assert_eq!(run_perft(8), 390216);
}

// Passing moves begin here.
#[test]
#[ignore]
fn perft_09() {
    assert_eq!(run_perft(9), 3005288);
}
