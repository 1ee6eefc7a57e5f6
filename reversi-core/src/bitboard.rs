//! Low-level bitboard operations.
//!
//! For efficiency, the mobility and flip kernels here are unchecked: they assume
//! the two occupancy masks are disjoint and return garbage otherwise.
//! [`Board`](crate::Board) is the checked interface built on top of them.
//!
//! Under the hood, all these operations work on u64 bitboards. Bit `x + 8 * y`
//! holds the square in column `x` and row `y`, so bit 0 is the upper-left.

use crate::error::Result;
use crate::location::{MoveList, Position};
use crate::{render, NUM_SPACES};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per square of a Reversi board.
/// Wraps [`u64`] for efficient bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

/// Starting bitboard for Black: squares 28 and 35.
pub const BLACK_START: Bitboard = Bitboard(0x0000000810000000);

/// Starting bitboard for White: squares 27 and 36.
pub const WHITE_START: Bitboard = Bitboard(0x0000001008000000);

/// Every square except the leftmost and rightmost columns.
/// Opponent runs are clipped with this along any axis that moves sideways.
const EDGE_MASK: u64 = 0x7e7e7e7e7e7e7e7e;

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        render::format_grid(
            self.into_iter().map(|bit| match bit {
                false => '.',
                true => '#',
            }),
            f,
        )
    }
}

impl Bitboard {
    /// The board with no square set.
    pub const EMPTY: Self = Self(0);

    /// The board with every square set.
    pub const FULL: Self = Self(u64::MAX);

    /// Count the leading zero bits, with bit 63 the most significant.
    /// An empty bitboard has 64.
    #[inline]
    pub fn count_leading_zeros(self) -> u32 {
        self.0.leading_zeros()
    }

    /// Count the number of set squares in the bitboard.
    #[inline]
    pub fn count_set_bits(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Count the number of unset squares in the bitboard.
    #[inline]
    pub fn count_empty(self) -> u8 {
        self.0.count_zeros() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return true if the square at `pos` is set.
    #[inline]
    pub fn is_set_at(self, pos: Position) -> bool {
        self.0 & (1u64 << pos.index()) != 0
    }

    /// Iterate over the set squares in ascending order without allocating.
    #[inline]
    pub fn iter_positions(self) -> MoveList {
        MoveList::from(self)
    }

    /// Collect the set squares in ascending order.
    /// Fails with [`ResourceExhausted`](crate::ReversiError::ResourceExhausted)
    /// if the list cannot be allocated.
    pub fn positions(self) -> Result<Vec<Position>> {
        let mut positions = Vec::new();
        positions.try_reserve_exact(self.count_set_bits() as usize)?;
        positions.extend(self.iter_positions());
        Ok(positions)
    }

    /// Set every square in `positions`. Duplicates are harmless.
    pub fn from_positions<I: IntoIterator<Item = Position>>(positions: I) -> Self {
        positions
            .into_iter()
            .fold(Self::EMPTY, |bitboard, pos| bitboard | pos.to_bitboard())
    }
}

impl FromIterator<Position> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self::from_positions(iter)
    }
}

/// Shift in the direction of increasing square index.
#[inline]
fn shift_up(bits: u64, shift: u32) -> u64 {
    bits << shift
}

/// Shift in the direction of decreasing square index.
#[inline]
fn shift_down(bits: u64, shift: u32) -> u64 {
    bits >> shift
}

/// Moves found by smearing `player` through runs of `masked_opponent`
/// in a single direction. Runs longer than six disks cannot occur.
#[inline]
fn moves_one_direction(
    player: u64,
    masked_opponent: u64,
    shift: u32,
    step: fn(u64, u32) -> u64,
) -> u64 {
    let double = shift * 2;

    let mut flip = masked_opponent & step(player, shift);
    flip |= masked_opponent & step(flip, shift);

    // Opponent pairs, so each of the next steps crosses two disks at once.
    let pairs = masked_opponent & step(masked_opponent, shift);
    flip |= pairs & step(flip, double);
    flip |= pairs & step(flip, double);

    step(flip, shift)
}

/// Compute a mask of the legal moves for the player owning `player` against
/// `opponent`. Undefined behavior if the two masks intersect.
#[inline]
pub fn mobility_mask(player: Bitboard, opponent: Bitboard) -> Bitboard {
    // Shifts for each axis: E/W, N/S, and the two diagonals.
    const SHIFTS: [u32; 4] = [1, 8, 7, 9];

    // Vertical shifts never leave their column, so only they see the edges.
    let opponent_edge_mask = EDGE_MASK & opponent.0;
    let masks: [u64; 4] = [
        opponent_edge_mask,
        opponent.0,
        opponent_edge_mask,
        opponent_edge_mask,
    ];

    let mut moves = 0u64;
    for (&shift, &mask) in SHIFTS.iter().zip(masks.iter()) {
        moves |= moves_one_direction(player.0, mask, shift, shift_up);
        moves |= moves_one_direction(player.0, mask, shift, shift_down);
    }

    // Moves can only land on empties.
    let empties = !(player.0 | opponent.0);
    Bitboard(moves & empties)
}

/// One axis of the flip computation: the rays below and above the played square.
struct Ray {
    /// Squares below the played square when it is square 63, spaced by the axis step.
    descending: u64,
    /// Squares above the played square when it is square 0, spaced by the axis step.
    ascending: u64,
    /// Whether opponent runs along this axis must stop at the side edges.
    clip_edges: bool,
}

const RAYS: [Ray; 4] = [
    // N/S
    Ray {
        descending: 0x0080808080808080,
        ascending: 0x0101010101010100,
        clip_edges: false,
    },
    // E/W
    Ray {
        descending: 0x7f00000000000000,
        ascending: 0x00000000000000fe,
        clip_edges: true,
    },
    // NE/SW
    Ray {
        descending: 0x0102040810204000,
        ascending: 0x0002040810204080,
        clip_edges: true,
    },
    // NW/SE
    Ray {
        descending: 0x0040201008040201,
        ascending: 0x8040201008040200,
        clip_edges: true,
    },
];

/// Squares flipped along one axis when `player` plays at `index`.
#[inline]
fn flips_one_axis(index: u32, player: u64, masked_opponent: u64, ray: &Ray) -> u64 {
    // Descending ray: the nearest non-opponent square is the highest set bit.
    let mask = ray.descending >> (63 - index);
    let nearest = (1u64 << 63)
        .checked_shr((!masked_opponent & mask).leading_zeros())
        .unwrap_or(0);
    let outflank = nearest & player;
    let mut flipped = outflank.wrapping_neg().wrapping_shl(1) & mask;

    // Ascending ray: a carry runs through the opponent disks to the first
    // square that breaks the run.
    let mask = ray.ascending << index;
    let outflank = mask & (masked_opponent | !mask).wrapping_add(1) & player;
    flipped |= outflank.wrapping_sub((outflank != 0) as u64) & mask;

    flipped
}

/// Compute the disks flipped when the owner of `player` plays at `pos`
/// against `opponent`. The result never includes `pos` itself.
/// Undefined behavior if the masks intersect or `pos` is occupied.
#[inline]
pub fn flip_mask(player: Bitboard, opponent: Bitboard, pos: Position) -> Bitboard {
    let index = pos.index() as u32;
    let opponent_edge_mask = EDGE_MASK & opponent.0;

    let flipped = RAYS.iter().fold(0u64, |flipped, ray| {
        let masked_opponent = if ray.clip_edges {
            opponent_edge_mask
        } else {
            opponent.0
        };
        flipped | flips_one_axis(index, player.0, masked_opponent, ray)
    });

    Bitboard(flipped)
}

/// Iterator for the bits in a [`Bitboard`], from square 0 to square 63.
#[derive(Clone, Copy, Debug)]
pub struct Bits {
    next: usize,
    bitboard: Bitboard,
}

impl Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == NUM_SPACES {
            return None;
        }

        let bit = self.bitboard.0 & (1u64 << self.next) != 0;
        self.next += 1;

        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = NUM_SPACES - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bits {}

/// Iterate over the bits in row-major order.
impl IntoIterator for Bitboard {
    type Item = bool;
    type IntoIter = Bits;

    fn into_iter(self) -> Self::IntoIter {
        Bits {
            next: 0,
            bitboard: self,
        }
    }
}
