//! Player module - the active falling piece
//!
//! The player owns the current shape, its board position and the running
//! score. Position-only operations (spawn placement, sideways moves, merge,
//! landing preview) live here; the drop/score/spawn orchestration lives in
//! [`crate::game_state`].

use crate::board::Board;
use crate::collision::{collides, collides_at};
use crate::pieces::Shape;

/// Active falling piece plus the session score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub shape: Shape,
    /// Column of the shape matrix's left edge
    pub x: i8,
    /// Row of the shape matrix's top edge (may be negative above the board)
    pub y: i8,
    pub score: u32,
}

impl Player {
    pub fn new(shape: Shape, x: i8, y: i8) -> Self {
        Self {
            shape,
            x,
            y,
            score: 0,
        }
    }

    /// Column that horizontally centers a shape of `shape_width` on the board
    pub fn spawn_x(board_width: u8, shape_width: usize) -> i8 {
        (board_width / 2) as i8 - (shape_width / 2) as i8
    }

    /// Replace the shape and move it to the spawn position (top, centered).
    ///
    /// The score is kept.
    pub fn place_at_spawn(&mut self, shape: Shape, board: &Board) {
        self.x = Self::spawn_x(board.width(), shape.width());
        self.y = 0;
        self.shape = shape;
    }

    /// Shift sideways by `delta`, undoing the shift if it collides.
    ///
    /// Returns whether the piece moved.
    pub fn move_horizontal(&mut self, board: &Board, delta: i8) -> bool {
        self.x += delta;
        if collides(board, self) {
            self.x -= delta;
            return false;
        }
        true
    }

    /// Number of rows the piece can fall before it would collide
    pub fn drop_distance(&self, board: &Board) -> i8 {
        let mut distance = 0;
        while !collides_at(board, &self.shape, self.x, self.y + distance + 1) {
            distance += 1;
        }
        distance
    }

    /// Row the piece would come to rest on (for the ghost preview)
    pub fn ghost_y(&self, board: &Board) -> i8 {
        self.y + self.drop_distance(board)
    }
}

/// Write every occupied cell of the player's shape into the board.
///
/// The placement must already be collision-free. Cells above the top edge
/// are dropped.
pub fn merge(board: &mut Board, player: &Player) {
    debug_assert!(
        !collides(board, player),
        "merge called with a colliding placement"
    );
    for (dx, dy, cell) in player.shape.occupied() {
        board.set(player.x + dx, player.y + dy, cell);
    }
}
