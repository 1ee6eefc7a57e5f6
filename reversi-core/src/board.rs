//! The complete state of a game and its cached legal-move set.
//!
//! Every method that changes the disks or the side to move recomputes the
//! mobility cache before returning, so [`Board::mobility`] never goes stale.

use crate::bitboard::{self, Bitboard, BLACK_START, WHITE_START};
use crate::color::Color;
use crate::error::{ReversiError, Result};
use crate::location::{MoveList, Position};
use crate::render::MobilityView;

/// Disks of both colors, the side to move, and that side's legal moves.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    /// Occupancy layers, indexed by [`Color`]. Always disjoint.
    disks: [Bitboard; 2],
    current_player: Color,
    mobility: Bitboard,
    mobility_count: u8,
}

impl Default for Board {
    /// The standard opening: four center disks, black to move.
    fn default() -> Self {
        let mut board = Self {
            disks: [BLACK_START, WHITE_START],
            current_player: Color::Black,
            mobility: Bitboard::EMPTY,
            mobility_count: 0,
        };
        board.recompute_mobility();
        board
    }
}

impl Board {
    /// Construct the opening position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return this board to the opening position in place.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Iterate over all 64 squares in ascending order.
    pub(crate) fn all_positions() -> MoveList {
        MoveList::from(Bitboard::FULL)
    }

    /// Get the disks of one color.
    #[inline]
    pub fn occupancy(&self, color: Color) -> Bitboard {
        self.disks[color.index()]
    }

    /// Get the squares holding one color's disks, in ascending order.
    pub fn occupancy_positions(&self, color: Color) -> Result<Vec<Position>> {
        self.occupancy(color).positions()
    }

    /// Overwrite one color's disks wholesale. No flipping happens, but the
    /// mobility cache is rebuilt. Fails without changing anything if the new
    /// layer overlaps the other color's disks.
    pub fn replace_occupancy(&mut self, color: Color, disks: Bitboard) -> Result<()> {
        if !(disks & self.occupancy(!color)).is_empty() {
            return Err(ReversiError::OverlappingOccupancy);
        }

        self.disks[color.index()] = disks;
        self.recompute_mobility();
        Ok(())
    }

    /// Overwrite the owner of a single square without flipping anything.
    /// `None` empties the square.
    pub fn set_square(&mut self, pos: Position, owner: Option<Color>) {
        let mask = pos.to_bitboard();
        for layer in self.disks.iter_mut() {
            *layer &= !mask;
        }
        if let Some(color) = owner {
            self.disks[color.index()] |= mask;
        }
        self.recompute_mobility();
    }

    /// Exchange ownership of every square in `flipped`.
    /// Leaves the mobility cache stale; the caller must recompute it.
    #[inline]
    pub(crate) fn flip(&mut self, flipped: Bitboard) {
        for layer in self.disks.iter_mut() {
            *layer ^= flipped;
        }
    }

    /// Put a disk on an empty square.
    /// Leaves the mobility cache stale; the caller must recompute it.
    #[inline]
    pub(crate) fn place(&mut self, color: Color, pos: Position) {
        self.disks[color.index()] |= pos.to_bitboard();
    }

    /// [`Board::set_square`] addressed by column and row.
    pub fn set_square_xy(&mut self, x: u8, y: u8, owner: Option<Color>) -> Result<()> {
        self.set_square(Position::from_xy(x, y)?, owner);
        Ok(())
    }

    /// Get the owner of a square, or `None` if it is empty.
    #[inline]
    pub fn square_owner(&self, pos: Position) -> Option<Color> {
        if self.occupancy(Color::Black).is_set_at(pos) {
            Some(Color::Black)
        } else if self.occupancy(Color::White).is_set_at(pos) {
            Some(Color::White)
        } else {
            None
        }
    }

    /// [`Board::square_owner`] addressed by column and row.
    pub fn square_owner_xy(&self, x: u8, y: u8) -> Result<Option<Color>> {
        Ok(self.square_owner(Position::from_xy(x, y)?))
    }

    /// Count one color's disks.
    #[inline]
    pub fn disk_count(&self, color: Color) -> u8 {
        self.occupancy(color).count_set_bits()
    }

    /// Count the empty squares.
    #[inline]
    pub fn empty_count(&self) -> u8 {
        self.occupied_mask().count_empty()
    }

    /// Get a mask of every occupied square.
    #[inline]
    pub fn occupied_mask(&self) -> Bitboard {
        self.disks[0] | self.disks[1]
    }

    /// The color with more disks, or `None` on equal counts.
    /// Meaningful at any point, but only final once [`Board::is_game_over`].
    pub fn winner(&self) -> Option<Color> {
        use std::cmp::Ordering;

        match self
            .disk_count(Color::Black)
            .cmp(&self.disk_count(Color::White))
        {
            Ordering::Greater => Some(Color::Black),
            Ordering::Less => Some(Color::White),
            Ordering::Equal => None,
        }
    }

    /// The side to move.
    #[inline]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Hand the turn to the other player without placing a disk.
    /// This is the unchecked pass; see [`Board::pass`] for the checked one.
    pub fn advance_turn(&mut self) {
        self.current_player = !self.current_player;
        self.recompute_mobility();
    }

    /// Rebuild the mobility cache from the occupancy layers.
    /// Every mutation already does this; calling it again changes nothing.
    pub fn recompute_mobility(&mut self) {
        let player = self.occupancy(self.current_player);
        let opponent = self.occupancy(!self.current_player);

        // Moves land on empty squares only.
        let occupied = player | opponent;
        self.mobility = bitboard::mobility_mask(player, opponent) & !occupied;
        self.mobility_count = self.mobility.count_set_bits();
    }

    /// Get a mask of the legal moves for the side to move.
    #[inline]
    pub fn mobility(&self) -> Bitboard {
        self.mobility
    }

    /// Get the number of legal moves for the side to move.
    #[inline]
    pub fn mobility_count(&self) -> u8 {
        self.mobility_count
    }

    /// Iterate over the legal moves in ascending order.
    #[inline]
    pub fn legal_moves(&self) -> MoveList {
        MoveList::from(self.mobility)
    }

    /// Collect the legal moves in ascending order.
    pub fn mobility_positions(&self) -> Result<Vec<Position>> {
        self.mobility.positions()
    }

    #[inline]
    pub fn has_legal_moves(&self) -> bool {
        self.mobility_count > 0
    }

    #[inline]
    pub fn is_legal_move(&self, pos: Position) -> bool {
        self.legal_moves().contains(pos)
    }

    /// [`Board::is_legal_move`] addressed by column and row.
    pub fn is_legal_move_xy(&self, x: u8, y: u8) -> Result<bool> {
        Ok(self.is_legal_move(Position::from_xy(x, y)?))
    }

    /// True once neither player can move.
    pub fn is_game_over(&self) -> bool {
        if self.has_legal_moves() {
            return false;
        }

        let player = self.occupancy(self.current_player);
        let opponent = self.occupancy(!self.current_player);
        bitboard::mobility_mask(opponent, player).is_empty()
    }

    /// Render this board with the legal moves of the side to move marked.
    pub fn with_mobility(&self) -> MobilityView<'_> {
        MobilityView::new(self)
    }
}
