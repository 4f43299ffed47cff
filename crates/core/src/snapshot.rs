use crate::pieces::Shape;
use crate::player::Player;
use crate::types::{Cell, GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, EMPTY, MAX_PIECE_SIZE};

/// Copy of the active piece, detached from the live shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    pub size: u8,
    pub cells: [[Cell; MAX_PIECE_SIZE]; MAX_PIECE_SIZE],
}

impl ActiveSnapshot {
    pub fn new(shape: &Shape, x: i8, y: i8) -> Self {
        let mut cells = [[EMPTY; MAX_PIECE_SIZE]; MAX_PIECE_SIZE];
        for (dx, dy, cell) in shape.occupied() {
            cells[dy as usize][dx as usize] = cell;
        }
        Self {
            kind: shape.kind(),
            x,
            y,
            size: shape.size() as u8,
            cells,
        }
    }

    /// Absolute board coordinates and value of every occupied cell
    pub fn board_cells(&self) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
        let size = self.size as usize;
        (0..size).flat_map(move |dy| {
            (0..size).filter_map(move |dx| {
                let cell = self.cells[dy][dx];
                (cell != EMPTY).then(|| (self.x + dx as i8, self.y + dy as i8, cell))
            })
        })
    }
}

impl From<&Player> for ActiveSnapshot {
    fn from(player: &Player) -> Self {
        Self::new(&player.shape, player.x, player.y)
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub status: GameStatus,
    pub score: u32,
    /// Piece randomizer seed, shown so a game can be replayed
    pub seed: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[EMPTY; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            status: GameStatus::Running,
            score: 0,
            seed: 0,
        }
    }
}
