//! Text rendering for boards.

use crate::board::Board;
use crate::color::Color;
use crate::location::Position;
use crate::EDGE_LENGTH;
use std::fmt::{self, Display, Formatter};
use std::iter::Iterator;

const BLACK_CHAR: char = 'X';
const WHITE_CHAR: char = 'O';
const EMPTY_CHAR: char = '.';
const MOBILITY_CHAR: char = '*';

/// Format 64 characters into a grid: one row per line, cells separated by a space.
/// `piece_iter` must yield exactly 64 items.
pub(crate) fn format_grid<T: Iterator<Item = char>>(
    mut piece_iter: T,
    f: &mut Formatter,
) -> fmt::Result {
    for _ in 0..EDGE_LENGTH {
        for col in 0..EDGE_LENGTH {
            if col > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", piece_iter.next().ok_or(fmt::Error)?)?;
        }
        writeln!(f)?;
    }

    match piece_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}

fn square_char(board: &Board, pos: Position, show_mobility: bool) -> char {
    match board.square_owner(pos) {
        Some(Color::Black) => BLACK_CHAR,
        Some(Color::White) => WHITE_CHAR,
        None if show_mobility && board.is_legal_move(pos) => MOBILITY_CHAR,
        None => EMPTY_CHAR,
    }
}

/// Renders 'X' for black, 'O' for white and '.' for empty squares.
impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        format_grid(
            Board::all_positions().map(|pos| square_char(self, pos, false)),
            f,
        )
    }
}

/// A [`Board`] rendered with the current player's legal moves marked '*'.
/// Built by [`Board::with_mobility`].
#[derive(Clone, Copy, Debug)]
pub struct MobilityView<'a>(&'a Board);

impl<'a> MobilityView<'a> {
    pub(crate) fn new(board: &'a Board) -> Self {
        Self(board)
    }
}

impl Display for MobilityView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        format_grid(
            Board::all_positions().map(|pos| square_char(self.0, pos, true)),
            f,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::Board;

    const OPENING: &str = "\
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . O X . . .
. . . X O . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
";

    const OPENING_WITH_MOBILITY: &str = "\
. . . . . . . .
. . . . . . . .
. . . * . . . .
. . * O X . . .
. . . X O * . .
. . . . * . . .
. . . . . . . .
. . . . . . . .
";

    #[test]
    fn render_opening() {
        assert_eq!(Board::new().to_string(), OPENING);
    }

    #[test]
    fn render_opening_with_mobility() {
        assert_eq!(Board::new().with_mobility().to_string(), OPENING_WITH_MOBILITY);
    }

    #[test]
    fn render_bitboard() {
        let rendered = crate::bitboard::BLACK_START.to_string();
        assert_eq!(rendered.lines().nth(3), Some(". . . . # . . ."));
        assert_eq!(rendered.lines().nth(4), Some(". . . # . . . ."));
    }
}
