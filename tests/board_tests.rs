//! Board tests - grid access and row sweep

use blockfall::core::Board;
use blockfall::types::{BOARD_HEIGHT, BOARD_WIDTH};

fn filled_row(value: u8) -> Vec<u8> {
    vec![value; BOARD_WIDTH as usize]
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(0), "Cell ({}, {}) should be empty", x, y);
        }
    }
    assert!(board.rows().all(|row| row.len() == BOARD_WIDTH as usize));
}

#[test]
fn test_board_with_size() {
    let board = Board::with_size(4, 6);
    assert_eq!(board.width(), 4);
    assert_eq!(board.height(), 6);
    assert_eq!(board.cells().len(), 24);
    assert!(board.is_empty());
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, 1));
    assert_eq!(board.get(5, 10), Some(1));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, 0));
    assert_eq!(board.get(5, 10), Some(0));
    assert!(!board.is_occupied(5, 10));
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new();

    assert!(!board.set(-1, 0, 1));
    assert!(!board.set(0, -1, 1));
    assert!(!board.set(BOARD_WIDTH as i8, 0, 1));
    assert!(!board.set(0, BOARD_HEIGHT as i8, 1));
    assert!(!board.is_occupied(-1, 0));
}

#[test]
fn test_clear_zeroes_in_place() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 19, 4);
    }
    board.set(3, 2, 2);

    board.clear();
    assert!(board.is_empty());
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
}

#[test]
fn test_sweep_without_full_rows_is_noop() {
    let mut board = Board::new();
    for x in 0..9 {
        board.set(x, 19, 1);
    }
    board.set(4, 10, 3);
    let before = board.clone();

    assert_eq!(board.sweep(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_sweep_removes_bottom_row_and_shifts() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 19, 2);
    }
    // Distinct partial content in every other row so the shift is observable.
    for y in 0..19 {
        board.set((y % 10) as i8, y as i8, (y % 4 + 1) as u8);
    }
    let before = board.to_rows();

    assert_eq!(board.sweep(), 1);

    let after = board.to_rows();
    assert_eq!(after[0], vec![0; BOARD_WIDTH as usize]);
    for y in 0..19 {
        assert_eq!(after[y + 1], before[y], "row {} should move to {}", y, y + 1);
    }
}

#[test]
fn test_sweep_multiple_rows_keeps_order() {
    let mut rows = vec![vec![0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    rows[19] = filled_row(1);
    rows[18] = filled_row(2);
    rows[17][0] = 3;
    rows[16] = filled_row(4);
    rows[15][9] = 1;
    let mut board = Board::from_rows(&rows);

    assert_eq!(board.sweep(), 3);

    let after = board.to_rows();
    assert_eq!(after[19][0], 3);
    assert_eq!(after[18][9], 1);
    assert!(after[..18].iter().all(|row| row.iter().all(|&c| c == 0)));
    assert_eq!(after.iter().flatten().filter(|&&c| c != 0).count(), 2);
}

#[test]
fn test_board_from_rows_roundtrip() {
    let mut rows = vec![vec![0u8; 10]; 20];
    rows[5][3] = 2;
    rows[10][7] = 3;

    let board = Board::from_rows(&rows);
    assert_eq!(board.to_rows(), rows);
    assert_eq!(board.row(5).unwrap()[3], 2);
    assert!(board.row(20).is_none());
}
