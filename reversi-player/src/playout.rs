//! Uniform-random playouts.
//!
//! A playout plays uniformly random legal moves until neither side can move.

use crate::random::RandomSource;
use reversi_core::{Board, Position, ReversiError, Result};

/// Pick one of the side to move's legal moves, each with equal probability.
///
/// Draws an index in `[0, mobility_count - 1]` and returns the legal move at
/// that rank in ascending position order.
pub fn select_random_move<R: RandomSource + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Result<Position> {
    let count = board.mobility_count() as i32;
    if count == 0 {
        return Err(ReversiError::EmptyMobilitySet);
    }

    let rank = rng.next_int(0, count - 1);
    debug_assert!(
        (0..count).contains(&rank),
        "random source drew {} outside [0, {}]",
        rank,
        count - 1
    );
    board
        .legal_moves()
        .nth(rank as usize)
        .ok_or(ReversiError::EmptyMobilitySet)
}

/// Play random moves until the game ends, passing whenever the side to move is
/// stuck. Returns the number of disks placed.
///
/// The game ends on two consecutive passes; a single pass just hands the turn over.
pub fn play_to_completion<R: RandomSource + ?Sized>(board: &mut Board, rng: &mut R) -> Result<u32> {
    let mut plies = 0;
    let mut passes = 0;

    while passes < 2 {
        if board.has_legal_moves() {
            let pos = select_random_move(board, rng)?;
            board.make_move(pos)?;
            plies += 1;
            passes = 0;
        } else {
            board.advance_turn();
            passes += 1;
        }
    }

    Ok(plies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::StdRandom;
    use reversi_core::{Bitboard, Color};

    /// Always returns the same value, whatever range is asked for.
    struct Fixed(i32);

    impl RandomSource for Fixed {
        fn reseed(&mut self, _seed: u32) {}

        fn next_int(&mut self, _min: i32, _max: i32) -> i32 {
            self.0
        }
    }

    #[test]
    fn rank_maps_to_ascending_moves() {
        let board = Board::new();
        let expected = [19, 26, 37, 44];
        for (rank, &index) in expected.iter().enumerate() {
            let pos = select_random_move(&board, &mut Fixed(rank as i32)).unwrap();
            assert_eq!(pos.index(), index);
        }
    }

    #[test]
    fn no_moves_is_an_error() {
        let mut board = Board::new();
        board.replace_occupancy(Color::White, Bitboard::EMPTY).unwrap();
        assert_eq!(
            select_random_move(&board, &mut Fixed(0)),
            Err(ReversiError::EmptyMobilitySet)
        );
    }

    #[test]
    fn playout_reaches_game_over() {
        let mut rng = StdRandom::new(42);
        for _ in 0..20 {
            let mut board = Board::new();
            let plies = play_to_completion(&mut board, &mut rng).unwrap();
            assert!(board.is_game_over());
            assert!(plies <= 60);
            assert_eq!(
                plies as u8,
                board.disk_count(Color::Black) + board.disk_count(Color::White) - 4
            );
        }
    }
}
