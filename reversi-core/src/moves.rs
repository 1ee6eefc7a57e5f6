//! Making moves: flipping, placing, and handing over the turn.

use crate::bitboard::{self, Bitboard};
use crate::board::Board;
use crate::error::{ReversiError, Result};
use crate::location::Position;

impl Board {
    /// Play a disk for the side to move at `pos`.
    ///
    /// Flips every outflanked run, places the disk, and advances the turn.
    /// Returns the mask of flipped disks. Fails with
    /// [`ReversiError::IllegalMove`] and leaves the board untouched if `pos`
    /// is not a legal move.
    ///
    /// The turn always goes to the opponent, even if they have no moves;
    /// callers pass explicitly with [`Board::pass`] or [`Board::advance_turn`].
    pub fn make_move(&mut self, pos: Position) -> Result<Bitboard> {
        if !self.is_legal_move(pos) {
            return Err(ReversiError::IllegalMove(pos));
        }

        let mover = self.current_player();
        let flipped = bitboard::flip_mask(self.occupancy(mover), self.occupancy(!mover), pos);

        // Flips exchange ownership of exactly these squares.
        self.flip(flipped);
        self.place(mover, pos);
        self.advance_turn();

        Ok(flipped)
    }

    /// [`Board::make_move`] addressed by column and row.
    pub fn make_move_xy(&mut self, x: u8, y: u8) -> Result<Bitboard> {
        self.make_move(Position::from_xy(x, y)?)
    }

    /// Pass the turn. Only allowed when the side to move has no legal move.
    pub fn pass(&mut self) -> Result<()> {
        if self.has_legal_moves() {
            return Err(ReversiError::IllegalPass);
        }

        self.advance_turn();
        Ok(())
    }
}
