//! Pieces module - piece shape matrices and the piece factory
//!
//! A [`Shape`] is a square matrix of cell values stored inline (no heap),
//! sized 2x2, 3x3 or 4x4 depending on the kind. Occupied cells hold the
//! kind's fill value, everything else is zero.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceError, PieceKind, EMPTY, MAX_PIECE_SIZE};

/// Square piece matrix in its current orientation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    kind: PieceKind,
    size: usize,
    /// Row-major, `size * size` entries
    cells: ArrayVec<Cell, { MAX_PIECE_SIZE * MAX_PIECE_SIZE }>,
}

impl Shape {
    fn from_rows<const N: usize>(kind: PieceKind, rows: [[Cell; N]; N]) -> Self {
        let mut cells = ArrayVec::new();
        for row in rows {
            cells.extend(row);
        }
        Self {
            kind,
            size: N,
            cells,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Edge length of the matrix (width == height)
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn width(&self) -> usize {
        self.size
    }

    pub fn height(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[y * self.size + x]
    }

    /// Swap two cells, used by the in-place rotation
    #[inline(always)]
    pub(crate) fn swap(&mut self, (ax, ay): (usize, usize), (bx, by): (usize, usize)) {
        self.cells.swap(ay * self.size + ax, by * self.size + bx);
    }

    pub(crate) fn reverse_rows_each(&mut self) {
        for row in self.cells.chunks_exact_mut(self.size) {
            row.reverse();
        }
    }

    pub(crate) fn reverse_row_order(&mut self) {
        let size = self.size;
        for y in 0..size / 2 {
            for x in 0..size {
                self.cells.swap(y * size + x, (size - 1 - y) * size + x);
            }
        }
    }

    /// Iterate the occupied cells as `(x, y, value)` offsets within the matrix
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell != EMPTY)
            .map(move |(i, &cell)| ((i % size) as i8, (i / size) as i8, cell))
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.size)
    }

    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

/// Create a fresh shape for a piece kind in its canonical orientation
///
/// # Examples
///
/// ```
/// use blockfall_core::create_piece;
/// use blockfall_core::types::PieceKind;
///
/// let o = create_piece(PieceKind::O);
/// assert_eq!(o.to_rows(), vec![vec![2, 2], vec![2, 2]]);
/// ```
pub fn create_piece(kind: PieceKind) -> Shape {
    let f = kind.fill();
    match kind {
        PieceKind::T => Shape::from_rows(kind, [[0, f, 0], [f, f, f], [0, 0, 0]]),
        PieceKind::O => Shape::from_rows(kind, [[f, f], [f, f]]),
        PieceKind::L => Shape::from_rows(kind, [[0, f, 0], [0, f, 0], [0, f, f]]),
        PieceKind::I => Shape::from_rows(
            kind,
            [[0, f, 0, 0], [0, f, 0, 0], [0, f, 0, 0], [0, f, 0, 0]],
        ),
    }
}

/// Create a shape from a textual identifier ("T", "o", ...)
///
/// Unknown identifiers fail with [`PieceError::InvalidPieceType`].
pub fn create_piece_from_id(id: &str) -> Result<Shape, PieceError> {
    Ok(create_piece(id.parse()?))
}
