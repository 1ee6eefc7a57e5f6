//! Move-selection policies behind one interface, so a match runner can treat
//! a random mover and a Monte Carlo searcher the same way.

use crate::monte_carlo::recommend_move;
use crate::playout::select_random_move;
use crate::random::RandomSource;
use reversi_core::{Board, Position, Result};

/// Something that picks a move for the side to move.
pub trait Strategy {
    /// A short label for logs.
    fn name(&self) -> &str;

    /// Choose one of `board`'s legal moves. Only called when one exists.
    fn choose_move(&mut self, board: &Board) -> Result<Position>;
}

/// Plays a uniformly random legal move.
#[derive(Clone, Debug)]
pub struct RandomStrategy<R> {
    rng: R,
}

impl<R: RandomSource> RandomStrategy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RandomSource> Strategy for RandomStrategy<R> {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, board: &Board) -> Result<Position> {
        select_random_move(board, &mut self.rng)
    }
}

/// Plays the flat Monte Carlo recommendation with a fixed playout budget.
#[derive(Clone, Debug)]
pub struct MonteCarloStrategy<R> {
    rng: R,
    trials: u32,
}

impl<R: RandomSource> MonteCarloStrategy<R> {
    /// `trials` playouts per decision, split evenly over the legal moves.
    pub fn new(rng: R, trials: u32) -> Self {
        Self { rng, trials }
    }
}

impl<R: RandomSource> Strategy for MonteCarloStrategy<R> {
    fn name(&self) -> &str {
        "monte-carlo"
    }

    fn choose_move(&mut self, board: &Board) -> Result<Position> {
        recommend_move(board, self.trials, &mut self.rng)
    }
}
