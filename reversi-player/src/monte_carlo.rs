//! Flat Monte Carlo move ranking.
//!
//! Every legal move gets the same number of independent random playouts, and
//! the move whose playouts win most often is recommended. There is no tree:
//! playouts are never shared between candidates.

use crate::playout::play_to_completion;
use crate::random::RandomSource;
use reversi_core::{Board, Color, Position, ReversiError, Result};
use tracing::debug;

/// Playout results for one candidate move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CandidateStats {
    pub position: Position,
    pub trials: u32,
    pub wins: u32,
}

impl CandidateStats {
    /// Fraction of playouts won, or 0 if none were played.
    pub fn win_rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.wins as f64 / self.trials as f64
        }
    }
}

/// Run `total_trials / mobility_count` playouts after each legal move and
/// report how often the side to move won, in ascending position order.
///
/// A playout counts as a win only if the side to move now ends with strictly
/// more disks; draws count for nobody. The remainder of the division is not played.
pub fn rank_moves<R: RandomSource + ?Sized>(
    board: &Board,
    total_trials: u32,
    rng: &mut R,
) -> Result<Vec<CandidateStats>> {
    let candidates = board.mobility_positions()?;
    if candidates.is_empty() {
        return Err(ReversiError::EmptyMobilitySet);
    }

    let player = board.current_player();
    let trials = total_trials / candidates.len() as u32;

    let mut ranking = Vec::new();
    ranking.try_reserve_exact(candidates.len())?;

    for position in candidates {
        let mut after_move = *board;
        after_move.make_move(position)?;

        let mut wins = 0;
        for _ in 0..trials {
            let mut rollout = after_move;
            play_to_completion(&mut rollout, rng)?;
            if is_win(&rollout, player) {
                wins += 1;
            }
        }

        let stats = CandidateStats {
            position,
            trials,
            wins,
        };
        debug!(
            candidate = %position,
            wins,
            trials,
            win_rate = stats.win_rate(),
            "ranked candidate"
        );
        ranking.push(stats);
    }

    Ok(ranking)
}

/// Recommend the legal move with the most playout wins.
/// Ties go to the lowest position.
pub fn recommend_move<R: RandomSource + ?Sized>(
    board: &Board,
    total_trials: u32,
    rng: &mut R,
) -> Result<Position> {
    let ranking = rank_moves(board, total_trials, rng)?;

    let mut best_index = 0;
    let mut best_wins = 0;
    for (index, stats) in ranking.iter().enumerate() {
        if stats.wins > best_wins {
            best_index = index;
            best_wins = stats.wins;
        }
    }

    let best = ranking[best_index];
    debug!(
        player = %board.current_player(),
        best = %best.position,
        wins = best.wins,
        trials = best.trials,
        "recommended move"
    );
    Ok(best.position)
}

fn is_win(board: &Board, player: Color) -> bool {
    board.disk_count(player) > board.disk_count(!player)
}
