//! A slow, obviously-correct legal move scan to check the bitboard kernels against.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::location::Position;
use crate::EDGE_LENGTH;

const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Compute the current player's legal moves square by square, walking all
/// eight directions from every empty square.
pub fn reference_mobility(board: &Board) -> Bitboard {
    let player = board.current_player();
    let mut moves = Bitboard::EMPTY;

    for y in 0..EDGE_LENGTH as i8 {
        for x in 0..EDGE_LENGTH as i8 {
            let pos = at(x, y).unwrap();
            if board.square_owner(pos).is_some() {
                continue;
            }

            let legal = DIRECTIONS.iter().any(|&(dx, dy)| {
                let mut run = 0;
                let (mut cx, mut cy) = (x + dx, y + dy);
                while let Some(cur) = at(cx, cy) {
                    match board.square_owner(cur) {
                        Some(owner) if owner == player => return run > 0,
                        Some(_) => run += 1,
                        None => return false,
                    }
                    cx += dx;
                    cy += dy;
                }
                false
            });

            if legal {
                moves |= pos.to_bitboard();
            }
        }
    }

    moves
}

/// Compute the disks the current player would flip by playing at `pos`,
/// walking each of the eight directions until a run of opponent disks ends.
/// Empty if `pos` is occupied or flips nothing.
pub fn reference_flips(board: &Board, pos: Position) -> Bitboard {
    let player = board.current_player();
    let mut flipped = Bitboard::EMPTY;
    if board.square_owner(pos).is_some() {
        return flipped;
    }

    let (x, y) = (pos.x() as i8, pos.y() as i8);
    for &(dx, dy) in DIRECTIONS.iter() {
        let mut run = Bitboard::EMPTY;
        let (mut cx, mut cy) = (x + dx, y + dy);
        while let Some(cur) = at(cx, cy) {
            match board.square_owner(cur) {
                Some(owner) if owner == player => {
                    flipped |= run;
                    break;
                }
                Some(_) => run |= cur.to_bitboard(),
                None => break,
            }
            cx += dx;
            cy += dy;
        }
    }

    flipped
}

fn at(x: i8, y: i8) -> Option<Position> {
    if x < 0 || y < 0 {
        return None;
    }
    Position::from_xy(x as u8, y as u8).ok()
}
