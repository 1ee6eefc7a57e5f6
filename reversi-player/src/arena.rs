//! Play full games between two strategies.

use crate::strategy::Strategy;
use reversi_core::{Board, Color, Result};
use tracing::trace;

/// How a finished game turned out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchOutcome {
    pub winner: Option<Color>,
    pub black_disks: u8,
    pub white_disks: u8,
    pub moves: u32,
    pub passes: u32,
    pub final_board: Board,
}

/// Play from `board` until neither side can move. The side to move asks its
/// strategy for a move, or passes if it has none.
pub fn play_match(
    mut board: Board,
    black: &mut dyn Strategy,
    white: &mut dyn Strategy,
) -> Result<MatchOutcome> {
    let mut moves = 0;
    let mut passes = 0;

    while !board.is_game_over() {
        if !board.has_legal_moves() {
            trace!(player = %board.current_player(), "pass");
            board.pass()?;
            passes += 1;
            continue;
        }

        let strategy: &mut dyn Strategy = match board.current_player() {
            Color::Black => &mut *black,
            Color::White => &mut *white,
        };
        let pos = strategy.choose_move(&board)?;
        trace!(player = %board.current_player(), strategy = strategy.name(), %pos, "move");
        board.make_move(pos)?;
        moves += 1;
    }

    Ok(MatchOutcome {
        winner: board.winner(),
        black_disks: board.disk_count(Color::Black),
        white_disks: board.disk_count(Color::White),
        moves,
        passes,
        final_board: board,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::StdRandom;
    use crate::strategy::RandomStrategy;

    #[test]
    fn random_match_finishes() {
        let mut black = RandomStrategy::new(StdRandom::new(1));
        let mut white = RandomStrategy::new(StdRandom::new(2));
        let outcome = play_match(Board::new(), &mut black, &mut white).unwrap();

        assert!(outcome.final_board.is_game_over());
        assert_eq!(outcome.winner, outcome.final_board.winner());
        assert_eq!(
            outcome.moves as u8,
            outcome.black_disks + outcome.white_disks - 4
        );
    }

    #[test]
    fn finished_board_plays_nothing() {
        let mut board = Board::new();
        board
            .replace_occupancy(Color::White, reversi_core::Bitboard::EMPTY)
            .unwrap();

        let mut black = RandomStrategy::new(StdRandom::new(1));
        let mut white = RandomStrategy::new(StdRandom::new(2));
        let outcome = play_match(board, &mut black, &mut white).unwrap();
        assert_eq!(outcome.moves, 0);
        assert_eq!(outcome.passes, 0);
        assert_eq!(outcome.winner, Some(Color::Black));
    }
}
