//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for checking the mobility and flip kernels against known counts.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::board::Board;

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Board::new(), depth, false)
}

fn leaves_below(board: Board, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    if !board.has_legal_moves() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        let mut next = board;
        next.advance_turn();
        return leaves_below(next, depth - 1, true);
    }

    board
        .legal_moves()
        .map(|pos| {
            let mut next = board;
            match next.make_move(pos) {
                Ok(_) => leaves_below(next, depth - 1, false),
                Err(err) => panic!("mobility produced an unplayable move: {}", err),
            }
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
