//! The two sides of a game, and their boundary encoding.

use crate::error::{ReversiError, Result};
use derive_more::Display;

/// One of the two players in a game, and the color of their disks.
/// An empty square is `Option::<Color>::None`.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Default for Color {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl Color {
    /// Boundary code for an empty square.
    pub const NONE_CODE: u8 = 2;

    /// Index of this color's occupancy layer.
    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Encode a square owner: 0 black, 1 white, 2 empty.
    pub fn to_code(owner: Option<Color>) -> u8 {
        match owner {
            Some(color) => color as u8,
            None => Self::NONE_CODE,
        }
    }

    /// Decode a square owner from its boundary code.
    pub fn from_code(code: u8) -> Result<Option<Color>> {
        match code {
            0 => Ok(Some(Color::Black)),
            1 => Ok(Some(Color::White)),
            Self::NONE_CODE => Ok(None),
            _ => Err(ReversiError::InvalidColorCode(code)),
        }
    }
}
