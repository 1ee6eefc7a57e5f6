use reversi_core::test_utils::reference_mobility;
use reversi_core::{Bitboard, Board, Color, Position};

fn xy(x: u8, y: u8) -> Position {
    Position::from_xy(x, y).unwrap()
}

fn from_xys(squares: &[(u8, u8)]) -> Bitboard {
    squares.iter().map(|&(x, y)| xy(x, y)).collect()
}

#[test]
fn opening_layout() {
    let board = Board::new();
    let index = |pos: Position| pos.index();

    let black: Vec<u8> = board.occupancy(Color::Black).iter_positions().map(index).collect();
    let white: Vec<u8> = board.occupancy(Color::White).iter_positions().map(index).collect();
    assert_eq!(black, vec![28, 35]);
    assert_eq!(white, vec![27, 36]);

    let moves: Vec<u8> = board.legal_moves().map(index).collect();
    assert_eq!(moves, vec![19, 26, 37, 44]);
    assert_eq!(board.mobility_count(), 4);
}

#[test]
fn first_move_counts() {
    let mut board = Board::new();
    board.make_move(Position::new(19).unwrap()).unwrap();
    assert_eq!(board.disk_count(Color::Black), 4);
    assert_eq!(board.disk_count(Color::White), 1);
}

#[test]
fn new_game_after_play_is_pristine() {
    let mut board = Board::new();
    board.make_move_xy(3, 2).unwrap();
    board.make_move_xy(2, 2).unwrap();
    board.set_square(xy(7, 7), Some(Color::White));

    assert_ne!(board, Board::new());
    board.reset();
    assert_eq!(board, Board::new());
    assert_eq!(board.disk_count(Color::Black), 2);
    assert_eq!(board.disk_count(Color::White), 2);
}

#[test]
fn legal_move_queries() {
    let board = Board::new();
    assert_eq!(board.is_legal_move_xy(3, 2), Ok(true));
    assert_eq!(board.is_legal_move_xy(2, 3), Ok(true));
    assert_eq!(board.is_legal_move_xy(5, 4), Ok(true));
    assert_eq!(board.is_legal_move_xy(4, 5), Ok(true));
    assert_eq!(board.is_legal_move_xy(2, 2), Ok(false));
    assert_eq!(board.is_legal_move_xy(0, 7), Ok(false));
}

// White to move in a crowded upper-left corner.
#[test]
fn regression_corner_mobility() {
    let black = from_xys(&[
        (0, 0),
        (1, 0),
        (3, 0),
        (0, 1),
        (1, 1),
        (2, 1),
        (3, 1),
        (1, 2),
        (3, 2),
        (2, 3),
        (3, 3),
        (3, 4),
    ]);
    let white = from_xys(&[(4, 1), (2, 2), (4, 2), (1, 3), (4, 3), (5, 3), (4, 4)]);

    let mut board = Board::new();
    board.replace_occupancy(Color::Black, Bitboard::EMPTY).unwrap();
    board.replace_occupancy(Color::White, white).unwrap();
    board.replace_occupancy(Color::Black, black).unwrap();
    board.advance_turn();

    let expected = from_xys(&[(2, 0), (4, 0), (0, 2), (1, 4), (2, 4), (2, 5)]);
    assert_eq!(board.mobility(), expected);
    assert_eq!(board.mobility(), reference_mobility(&board));
}

// A long game ending with black to move on a nearly full board.
#[test]
fn regression_late_game_mobility() {
    const MOVES: [(u8, u8); 52] = [
        (3, 2),
        (2, 2),
        (2, 3),
        (2, 4),
        (3, 5),
        (4, 6),
        (1, 5),
        (1, 4),
        (2, 5),
        (2, 6),
        (0, 5),
        (5, 2),
        (2, 1),
        (2, 0),
        (4, 5),
        (5, 6),
        (2, 7),
        (1, 6),
        (5, 4),
        (3, 6),
        (0, 7),
        (0, 3),
        (0, 4),
        (4, 1),
        (1, 7),
        (5, 3),
        (3, 7),
        (1, 3),
        (4, 7),
        (5, 5),
        (6, 5),
        (6, 6),
        (4, 2),
        (5, 7),
        (7, 7),
        (5, 1),
        (6, 7),
        (6, 4),
        (4, 0),
        (5, 0),
        (6, 0),
        (3, 1),
        (0, 2),
        (0, 6),
        (1, 2),
        (7, 6),
        (7, 5),
        (7, 4),
        (7, 3),
        (6, 3),
        (7, 2),
        (0, 1),
    ];

    let mut board = Board::new();
    for &(x, y) in MOVES.iter() {
        board.make_move_xy(x, y).unwrap();
        assert_eq!(board.mobility(), reference_mobility(&board));
    }

    assert_eq!(board.current_player(), Color::Black);
    let expected = from_xys(&[(0, 0), (1, 0), (3, 0), (1, 1), (6, 1), (6, 2)]);
    assert_eq!(board.mobility(), expected);
}

#[test]
fn stalemate_winner() {
    // Black holds a column, white holds a column far away: nobody can move.
    let mut board = Board::new();
    board.replace_occupancy(Color::Black, Bitboard::EMPTY).unwrap();
    board
        .replace_occupancy(Color::White, from_xys(&[(7, 0), (7, 1)]))
        .unwrap();
    board
        .replace_occupancy(Color::Black, from_xys(&[(0, 0), (0, 1), (0, 2)]))
        .unwrap();

    assert!(!board.has_legal_moves());
    assert!(board.is_game_over());
    assert_eq!(board.winner(), Some(Color::Black));
}

#[test]
fn version_is_semver() {
    let parts: Vec<&str> = reversi_core::VERSION.split('.').collect();
    assert_eq!(parts.len(), 3);
    assert!(parts.iter().all(|part| part.parse::<u32>().is_ok()));
}
