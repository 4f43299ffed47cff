//! Collision detection between a placed shape and the board.

use crate::board::Board;
use crate::pieces::Shape;
use crate::player::Player;

/// Check whether `shape` placed with its top-left corner at `(x, y)` overlaps
/// a wall, the floor or an occupied cell.
///
/// Cells above the board (negative absolute y) only collide with the side
/// walls; the top edge is open so pieces can spawn partially hidden.
pub fn collides_at(board: &Board, shape: &Shape, x: i8, y: i8) -> bool {
    shape.occupied().any(|(dx, dy, _)| {
        let bx = x + dx;
        let by = y + dy;
        bx < 0 || bx >= board.width() as i8 || by >= board.height() as i8 || board.is_occupied(bx, by)
    })
}

/// Check whether the player's current placement collides with the board.
pub fn collides(board: &Board, player: &Player) -> bool {
    collides_at(board, &player.shape, player.x, player.y)
}
