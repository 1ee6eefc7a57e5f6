//! Code for working with [`Position`]s on the Reversi board.

use crate::bitboard::Bitboard;
use crate::error::{ReversiError, Result};
use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{From, Into};
use std::fmt::{self, Display, Formatter, Write};

/// A square on the board, stored as its index `x + 8 * y`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Position(u8);

/// A set of positions, iterated in ascending index order.
/// Usually the legal moves out of a board.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, From, Into)]
pub struct MoveList(Bitboard);

impl Position {
    /// Convert from a square index in `[0, 63]`.
    #[inline]
    pub fn new(index: u8) -> Result<Self> {
        if (index as usize) < NUM_SPACES {
            Ok(Self(index))
        } else {
            Err(ReversiError::InvalidPosition)
        }
    }

    /// Convert from a square index without checking its range.
    /// Results in inconsistent state if `index` is 64 or more.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Self {
        Self(index)
    }

    /// Convert from column `x` and row `y`, both in `[0, 7]`.
    pub fn from_xy(x: u8, y: u8) -> Result<Self> {
        let edge = EDGE_LENGTH as u8;
        if x >= edge || y >= edge {
            return Err(ReversiError::InvalidPosition);
        }
        Ok(Self(x + y * edge))
    }

    /// The square index, `x + 8 * y`.
    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    /// The column, counted from the left.
    #[inline]
    pub fn x(self) -> u8 {
        self.0 % EDGE_LENGTH as u8
    }

    /// The row, counted from the top.
    #[inline]
    pub fn y(self) -> u8 {
        self.0 / EDGE_LENGTH as u8
    }

    /// A one-hot bitboard of this square.
    #[inline]
    pub fn to_bitboard(self) -> Bitboard {
        Bitboard::from(1u64 << self.0)
    }
}

impl TryFrom<u8> for Position {
    type Error = ReversiError;

    fn try_from(index: u8) -> Result<Self> {
        Self::new(index)
    }
}

impl From<Position> for u8 {
    fn from(pos: Position) -> u8 {
        pos.0
    }
}

/// Convert this [`Position`] into string notation ("D3").
impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = "ABCDEFGH".chars().nth(self.x() as usize).ok_or(fmt::Error)?;
        let row_str = "12345678".chars().nth(self.y() as usize).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

/// Build a [`Position`] from a 1-indexed string notation ("D3").
impl std::str::FromStr for Position {
    type Err = ReversiError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        let col_str = chars
            .next()
            .ok_or(ReversiError::InvalidPosition)?
            .to_ascii_uppercase();
        let col = "ABCDEFGH"
            .find(col_str)
            .ok_or(ReversiError::InvalidPosition)? as u8;
        let row = chars
            .next()
            .ok_or(ReversiError::InvalidPosition)?
            .to_digit(10)
            .ok_or(ReversiError::InvalidPosition)? as u8;

        if row == 0 || chars.next().is_some() {
            return Err(ReversiError::InvalidPosition);
        }

        Self::from_xy(col, row - 1)
    }
}

impl MoveList {
    /// Returns whether `pos` is in this list.
    #[inline]
    pub fn contains(self, pos: Position) -> bool {
        self.0.is_set_at(pos)
    }

    /// Returns whether the list is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }
}

impl ExactSizeIterator for MoveList {
    fn len(&self) -> usize {
        self.0.count_set_bits() as usize
    }
}

impl Iterator for MoveList {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.0.is_empty() {
            return None;
        }

        let bitboard: u64 = self.0.into();
        let index = bitboard.trailing_zeros() as u8;
        self.0 ^= Bitboard::from(1u64 << index);

        Some(Position::from_index_unchecked(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl Display for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|pos| pos.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}
