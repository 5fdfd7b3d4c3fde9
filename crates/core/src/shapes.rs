//! Shapes module - the piece catalog and matrix rotation
//!
//! Each piece kind has a fixed boolean matrix (its bounding box, rows top to
//! bottom) and a display color. Matrices live in a fixed 4x4 buffer so that
//! rotating never allocates; `rows`/`cols` give the used extent.

use crate::rng::SimpleRng;
use crate::types::{Color, PieceKind, MAX_SHAPE_SIZE};

/// Offset of a filled cell relative to the shape's top-left corner, as (dx, dy)
pub type CellOffset = (i8, i8);

const X: bool = true;
const O: bool = false;

/// Boolean matrix of at most 4x4 cells.
///
/// Cells outside `rows` x `cols` are always `false`, so two matrices with the
/// same extent and the same filled cells compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl ShapeMatrix {
    /// Build a matrix from a padded cell grid.
    ///
    /// Cells outside the `rows` x `cols` extent are cleared.
    pub const fn new(rows: u8, cols: u8, grid: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE]) -> Self {
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut r = 0;
        while r < rows as usize && r < MAX_SHAPE_SIZE {
            let mut c = 0;
            while c < cols as usize && c < MAX_SHAPE_SIZE {
                cells[r][c] = grid[r][c];
                c += 1;
            }
            r += 1;
        }
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the cell at (row, col) is filled. Out of extent reads as empty.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// Offsets (dx, dy) of every filled cell, row by row.
    pub fn filled_cells(&self) -> impl Iterator<Item = CellOffset> + '_ {
        (0..self.rows as usize).flat_map(move |r| {
            (0..self.cols as usize)
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (c as i8, r as i8))
        })
    }

    pub fn filled_count(&self) -> usize {
        self.filled_cells().count()
    }

    /// Rotate 90° clockwise: the transpose of the row-reversed matrix.
    ///
    /// A `rows` x `cols` matrix becomes `cols` x `rows`, with
    /// `out[r][c] = self[rows - 1 - c][r]`.
    pub fn rotate_clockwise(&self) -> ShapeMatrix {
        let mut out = ShapeMatrix {
            rows: self.cols,
            cols: self.rows,
            cells: [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
        };
        let rows = self.rows as usize;
        for r in 0..out.rows as usize {
            for c in 0..out.cols as usize {
                out.cells[r][c] = self.cells[rows - 1 - c][r];
            }
        }
        out
    }
}

/// One entry of the catalog: a piece kind, its spawn matrix and its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDefinition {
    pub kind: PieceKind,
    pub matrix: ShapeMatrix,
    pub color: Color,
}

impl ShapeDefinition {
    /// Catalog entry for a kind.
    pub fn for_kind(kind: PieceKind) -> &'static ShapeDefinition {
        &SHAPES[kind.index()]
    }
}

const fn def(kind: PieceKind, matrix: ShapeMatrix) -> ShapeDefinition {
    ShapeDefinition {
        kind,
        matrix,
        color: kind.color(),
    }
}

/// The piece catalog, in `PieceKind::ALL` order.
pub static SHAPES: [ShapeDefinition; 7] = [
    def(
        PieceKind::I,
        ShapeMatrix::new(1, 4, [[X, X, X, X], [O; 4], [O; 4], [O; 4]]),
    ),
    def(
        PieceKind::T,
        ShapeMatrix::new(2, 3, [[X, X, X, O], [O, X, O, O], [O; 4], [O; 4]]),
    ),
    def(
        PieceKind::O,
        ShapeMatrix::new(2, 2, [[X, X, O, O], [X, X, O, O], [O; 4], [O; 4]]),
    ),
    def(
        PieceKind::S,
        ShapeMatrix::new(2, 3, [[O, X, X, O], [X, X, O, O], [O; 4], [O; 4]]),
    ),
    def(
        PieceKind::Z,
        ShapeMatrix::new(2, 3, [[X, X, O, O], [O, X, X, O], [O; 4], [O; 4]]),
    ),
    def(
        PieceKind::L,
        ShapeMatrix::new(2, 3, [[X, X, X, O], [X, O, O, O], [O; 4], [O; 4]]),
    ),
    def(
        PieceKind::J,
        ShapeMatrix::new(2, 3, [[X, X, X, O], [O, O, X, O], [O; 4], [O; 4]]),
    ),
];

/// Pick a catalog entry uniformly at random.
pub fn choose_random(rng: &mut SimpleRng) -> &'static ShapeDefinition {
    rng.choose(&SHAPES)
}
