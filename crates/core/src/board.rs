//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the color of a
//! locked piece. Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::types::{Cell, BOARD_COLS, BOARD_HEIGHT, BOARD_ROWS, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = BOARD_COLS * BOARD_ROWS;

/// Row indices removed by a single [`Board::clear_full_rows`] call, bottom to top.
pub type ClearedRows = ArrayVec<usize, BOARD_ROWS>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * BOARD_COLS + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is valid (within bounds and empty)
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_ROWS {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Check if a row has no filled cell
    pub fn is_row_empty(&self, y: usize) -> bool {
        if y >= BOARD_ROWS {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_none())
    }

    /// Cells of row `y`. Panics if `y` is out of range.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * BOARD_COLS;
        &self.cells[start..start + BOARD_COLS]
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_COLS)
    }

    /// Whether `piece`, shifted by (dx, dy), would overlap a wall, the floor,
    /// the area above the top row, or a locked cell.
    pub fn is_blocked(&self, piece: &Piece, dx: i8, dy: i8) -> bool {
        piece
            .cells()
            .any(|(x, y)| !self.is_valid(x + dx, y + dy))
    }

    /// Write the piece color into every cell the piece covers.
    ///
    /// Returns false without touching the board if any cell is out of bounds
    /// or already occupied.
    pub fn merge(&mut self, piece: &Piece) -> bool {
        if self.is_blocked(piece, 0, 0) {
            return false;
        }
        for (x, y) in piece.cells() {
            self.set(x, y, Some(piece.color));
        }
        true
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    ///
    /// Remaining rows keep their relative order and settle at the bottom; the
    /// same number of empty rows appear at the top. Uses a two-pointer pass with
    /// no allocation.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let mut write_y = BOARD_ROWS;

        // Scan from bottom to top
        for read_y in (0..BOARD_ROWS).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * BOARD_COLS;
                    let dst_start = write_y * BOARD_COLS;
                    self.cells
                        .copy_within(src_start..src_start + BOARD_COLS, dst_start);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_y * BOARD_COLS].fill(None);

        cleared_rows
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Copy the board into a row-major 2D grid (used by snapshots).
    pub fn write_grid(&self, out: &mut [[Cell; BOARD_COLS]; BOARD_ROWS]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }

    /// Create from a 2D vector (converts to flat array)
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        assert_eq!(cells_2d.len(), BOARD_ROWS);
        assert!(cells_2d.iter().all(|row| row.len() == BOARD_COLS));

        let mut flat = [None; BOARD_SIZE];
        for (y, row) in cells_2d.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                flat[y * BOARD_COLS + x] = *cell;
            }
        }
        Self { cells: flat }
    }

    /// Convert to 2D vector for testing/display
    #[cfg(test)]
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, PieceKind};

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
        assert_eq!(Board::index(0, -1), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, Some(Color::Cyan));
        board.set(5, 10, Some(Color::Purple));

        assert_eq!(board.get(0, 0), Some(Some(Color::Cyan)));
        assert_eq!(board.get(5, 10), Some(Some(Color::Purple)));

        assert_eq!(board.cells[0], Some(Color::Cyan));
        assert_eq!(board.cells[10 * 10 + 5], Some(Color::Purple));
    }

    #[test]
    fn test_board_from_cells_roundtrip() {
        let mut cells_2d = vec![vec![None; 10]; 20];
        cells_2d[5][3] = Some(Color::Yellow);
        cells_2d[10][7] = Some(Color::Orange);

        let board = Board::from_cells(cells_2d.clone());
        assert_eq!(cells_2d, board.to_cells());
    }

    #[test]
    fn test_merge_rejects_overlap_without_writing() {
        let mut board = Board::new();
        board.set(5, 1, Some(Color::Red));
        let piece = Piece::new(PieceKind::O); // covers (4..=5, 0..=1)

        let before = board.clone();
        assert!(!board.merge(&piece));
        assert_eq!(board, before);
    }

    #[test]
    fn test_clear_full_rows_moves_rows_as_a_block() {
        let mut cells_2d = vec![vec![None; 10]; 20];
        cells_2d[19] = vec![Some(Color::Blue); 10];
        cells_2d[18][0] = Some(Color::Red);
        cells_2d[17] = vec![Some(Color::Green); 10];
        cells_2d[16][9] = Some(Color::Cyan);
        let mut board = Board::from_cells(cells_2d);

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19, 17]);

        let after = board.to_cells();
        assert_eq!(after[19][0], Some(Color::Red));
        assert_eq!(after[18][9], Some(Color::Cyan));
        assert!(board.is_row_empty(0));
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn test_clear_every_row() {
        let mut board = Board::from_cells(vec![vec![Some(Color::Purple); 10]; 20]);
        let cleared = board.clear_full_rows();
        assert_eq!(cleared.len(), BOARD_ROWS);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_write_grid() {
        let mut board = Board::new();
        board.set(2, 19, Some(Color::Orange));
        let mut grid = [[None; BOARD_COLS]; BOARD_ROWS];
        board.write_grid(&mut grid);
        assert_eq!(grid[19][2], Some(Color::Orange));
        assert_eq!(grid.iter().flatten().filter(|c| c.is_some()).count(), 1);
    }
}
