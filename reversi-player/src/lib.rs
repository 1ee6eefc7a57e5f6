//! Players for `reversi-core`: uniform-random rollouts, flat Monte Carlo move
//! ranking built on them, and a runner that plays strategies against each other.
//!
//! Nothing in here owns global state. Every function that needs randomness takes
//! an explicit [`RandomSource`], so two searches never share a generator unless
//! the caller hands them the same one.

pub mod arena;
pub mod monte_carlo;
pub mod playout;
pub mod random;
pub mod strategy;

pub use arena::{play_match, MatchOutcome};
pub use monte_carlo::{rank_moves, recommend_move, CandidateStats};
pub use playout::{play_to_completion, select_random_move};
pub use random::{RandomSource, StdRandom};
pub use strategy::{MonteCarloStrategy, RandomStrategy, Strategy};
