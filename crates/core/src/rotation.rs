//! Rotation engine - in-place matrix rotation with horizontal correction.
//!
//! Rotation is a transpose followed by either a per-row reverse (clockwise)
//! or a reverse of the row order (counter-clockwise). When the rotated shape
//! collides, the piece is nudged sideways with alternating offsets of growing
//! magnitude (`+1, -2, +3, -4, ...`, applied cumulatively) until it fits or
//! the next probe magnitude would exceed the shape width, in which case the
//! rotation is undone. Every applied probe is tested.

use log::trace;

use crate::board::Board;
use crate::collision::collides;
use crate::pieces::Shape;
use crate::player::Player;

/// Rotate a square shape by 90° in place.
///
/// `direction > 0` rotates clockwise, anything else counter-clockwise.
pub fn rotate(shape: &mut Shape, direction: i8) {
    let size = shape.size();
    for y in 0..size {
        for x in 0..y {
            shape.swap((x, y), (y, x));
        }
    }

    if direction > 0 {
        shape.reverse_rows_each();
    } else {
        shape.reverse_row_order();
    }
}

/// Rotate the player's shape and resolve collisions by shifting horizontally.
///
/// Returns `true` if the rotation was kept. On failure the shape and the
/// horizontal position are restored exactly and `false` is returned.
pub fn rotate_with_correction(board: &Board, player: &mut Player, direction: i8) -> bool {
    let original_x = player.x;
    let undo = if direction > 0 { -1 } else { 1 };
    let mut offset: i8 = 1;

    rotate(&mut player.shape, direction);

    while collides(board, player) {
        if offset.unsigned_abs() as usize > player.shape.width() {
            rotate(&mut player.shape, undo);
            player.x = original_x;
            trace!(
                "rotation of {} rejected at x={} y={}",
                player.shape.kind(),
                original_x,
                player.y
            );
            return false;
        }
        player.x += offset;
        offset = -(offset + offset.signum());
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::create_piece;
    use crate::types::PieceKind;

    #[test]
    fn test_rotate_t_clockwise() {
        let mut t = create_piece(PieceKind::T);
        rotate(&mut t, 1);
        assert_eq!(t.to_rows(), vec![vec![0, 1, 0], vec![0, 1, 1], vec![0, 1, 0]]);
    }

    #[test]
    fn test_rotate_t_counter_clockwise() {
        let mut t = create_piece(PieceKind::T);
        rotate(&mut t, -1);
        assert_eq!(t.to_rows(), vec![vec![0, 1, 0], vec![1, 1, 0], vec![0, 1, 0]]);
    }

    #[test]
    fn test_zero_direction_is_counter_clockwise() {
        let mut a = create_piece(PieceKind::L);
        let mut b = create_piece(PieceKind::L);
        rotate(&mut a, 0);
        rotate(&mut b, -1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_rotate_i_turns_horizontal() {
        let mut i = create_piece(PieceKind::I);
        rotate(&mut i, 1);
        assert_eq!(
            i.to_rows(),
            vec![
                vec![0, 0, 0, 0],
                vec![4, 4, 4, 4],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0]
            ]
        );
    }

    #[test]
    fn test_four_turns_is_identity() {
        for kind in PieceKind::ALL {
            let original = create_piece(kind);
            let mut shape = original.clone();
            for _ in 0..4 {
                rotate(&mut shape, 1);
            }
            assert_eq!(shape, original, "{kind}");
        }
    }

    #[test]
    fn test_correction_shifts_off_right_wall() {
        let board = Board::new();
        // Vertical I hugging the right wall: column 1 of the matrix at x=9.
        let mut player = Player::new(create_piece(PieceKind::I), 8, 5);
        assert!(!collides(&board, &player));

        assert!(rotate_with_correction(&board, &mut player, 1));
        // Horizontal I needs x <= 6. Probes: 9, 7, 10, 6 -> fits at 6.
        assert_eq!(player.x, 6);
        assert!(!collides(&board, &player));
    }

    #[test]
    fn test_correction_shifts_off_left_wall() {
        let board = Board::new();
        // L matrix column 0 is empty; x=-1 puts the stem on column 0.
        let mut player = Player::new(create_piece(PieceKind::L), -1, 5);
        assert!(!collides(&board, &player));

        assert!(rotate_with_correction(&board, &mut player, 1));
        assert_eq!(player.x, 0);
        assert!(!collides(&board, &player));
    }

    #[test]
    fn test_failed_correction_reverts() {
        // A one-column shaft: a vertical I fits, a horizontal one never does.
        let mut board = Board::new();
        for y in 0..20 {
            for x in 0..10 {
                if x != 4 {
                    board.set(x, y, 2);
                }
            }
        }
        let mut player = Player::new(create_piece(PieceKind::I), 3, 10);
        assert!(!collides(&board, &player));
        let before = player.shape.clone();

        assert!(!rotate_with_correction(&board, &mut player, 1));
        assert_eq!(player.shape, before);
        assert_eq!(player.x, 3);
        assert_eq!(player.y, 10);
    }

    #[test]
    fn test_failed_correction_with_extreme_directions_reverts() {
        let mut board = Board::new();
        for y in 0..20 {
            for x in 0..10 {
                if x != 4 {
                    board.set(x, y, 2);
                }
            }
        }
        for direction in [i8::MIN, i8::MAX, 0] {
            let mut player = Player::new(create_piece(PieceKind::I), 3, 10);
            let before = player.clone();

            assert!(!rotate_with_correction(&board, &mut player, direction));
            assert_eq!(player, before, "direction {direction}");
        }
    }

    #[test]
    fn test_min_direction_rotates_counter_clockwise() {
        let board = Board::new();
        let mut a = Player::new(create_piece(PieceKind::T), 4, 5);
        let mut b = a.clone();
        assert!(rotate_with_correction(&board, &mut a, i8::MIN));
        assert!(rotate_with_correction(&board, &mut b, -1));
        assert_eq!(a, b);
    }
}
