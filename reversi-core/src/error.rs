use crate::location::Position;
use derive_more::Display;
use std::collections::TryReserveError;

/// Everything that can go wrong when driving a [`Board`](crate::Board).
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ReversiError {
    /// A square index outside `[0, 63]`, coordinates outside `[0, 7]`,
    /// or unreadable square notation.
    #[display(fmt = "position is off the board")]
    InvalidPosition,

    /// The square is not in the current player's mobility set.
    #[display(fmt = "illegal move at {}", _0)]
    IllegalMove(Position),

    /// A pass was requested while the current player still has a move.
    #[display(fmt = "cannot pass while legal moves remain")]
    IllegalPass,

    /// A move was requested from a position where the side to move has none.
    #[display(fmt = "no legal moves for the side to move")]
    EmptyMobilitySet,

    /// Allocating a position list failed.
    #[display(fmt = "out of memory while building a position list")]
    ResourceExhausted,

    /// A color code other than 0 (black), 1 (white) or 2 (empty).
    #[display(fmt = "invalid color code {}", _0)]
    InvalidColorCode(u8),

    /// A raw occupancy layer would overlap the other color's disks.
    #[display(fmt = "black and white occupancy would overlap")]
    OverlappingOccupancy,
}

impl std::error::Error for ReversiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl From<TryReserveError> for ReversiError {
    fn from(_: TryReserveError) -> Self {
        ReversiError::ResourceExhausted
    }
}

pub type Result<T> = std::result::Result<T, ReversiError>;
