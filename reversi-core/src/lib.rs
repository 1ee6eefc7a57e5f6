//! `reversi-core` implements the rules of Reversi (Othello) on a bitboard.
//!
//! This package implements two levels of abstraction:
//!
//!  - [`bitboard`] contains the raw, unchecked operations for working with occupancy masks:
//!    bit counting, position lists, and the mobility and flip kernels.
//!    These are fast, but say nothing about whether their inputs describe a real position.
//!  - [`Board`] owns a complete game state and keeps its cached legal-move set in sync
//!    after every mutation. Moves are checked against that set before they are applied.
//!
//! Squares are numbered `x + 8 * y`, with `(0, 0)` in the upper-left corner.

pub mod bitboard;
pub mod test_utils;

mod board;
mod color;
mod error;
mod location;
mod moves;
mod render;

pub use bitboard::Bitboard;
pub use board::*;
pub use color::*;
pub use error::*;
pub use location::*;
pub use render::MobilityView;

/// The version of this library, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The number of spaces on one edge of a Reversi board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on a Reversi board.
pub const NUM_SPACES: usize = 64;
