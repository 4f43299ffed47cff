//! Board module - manages the game grid
//!
//! The board is a grid of cell values (`0` = empty, `1..=4` = piece fill).
//! Storage is a flat row-major buffer so rows can be compacted with
//! `copy_within` and no per-row allocation.
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges
//! 0..height (top to bottom).

use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

/// The game board - 10 columns x 20 rows by default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the standard 10x20 dimensions
    pub fn new() -> Self {
        Self::with_size(BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Create an empty board of the given dimensions
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or does not fit a signed coordinate.
    pub fn with_size(width: u8, height: u8) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be non-zero");
        assert!(
            width <= i8::MAX as u8 && height <= i8::MAX as u8,
            "board dimensions must fit in i8 coordinates"
        );
        Self {
            width,
            height,
            cells: vec![EMPTY; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(cell) if cell != EMPTY)
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8
    }

    /// A single row, left to right
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let start = y * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width as usize)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|&cell| cell != EMPTY))
    }

    /// Remove every complete row and compact the rest downwards.
    ///
    /// Rows are scanned bottom to top with a read and a write cursor, so a
    /// row that slides into the index of a removed one is still examined.
    /// The rows vacated at the top are zeroed. Returns the number of rows
    /// removed (0..=height).
    pub fn sweep(&mut self) -> usize {
        let width = self.width as usize;
        let mut write_y = self.height as usize;
        let mut cleared = 0;

        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src_start = read_y * width;
                self.cells
                    .copy_within(src_start..src_start + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(EMPTY);
        cleared
    }

    /// Set every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Check if every cell is empty
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == EMPTY)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the board into a fixed-size grid (for snapshots).
    ///
    /// Cells outside the overlap of the two sizes are left untouched.
    pub fn write_grid(&self, out: &mut [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            let n = dst.len().min(src.len());
            dst[..n].copy_from_slice(&src[..n]);
        }
    }

    /// Create from rows, top to bottom
    ///
    /// # Panics
    ///
    /// Panics if the rows are ragged or empty, or if either dimension does
    /// not fit in a `u8`.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Self {
        assert!(!rows.is_empty(), "board needs at least one row");
        let width = rows[0].len();
        assert!(
            rows.iter().all(|row| row.len() == width),
            "every row must have the same width"
        );
        let board_width = u8::try_from(width).expect("board width must fit in u8");
        let board_height = u8::try_from(rows.len()).expect("board height must fit in u8");
        let mut board = Self::with_size(board_width, board_height);
        for (y, row) in rows.iter().enumerate() {
            let start = y * width;
            board.cells[start..start + width].copy_from_slice(row);
        }
        board
    }

    /// Convert to rows, top to bottom
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
