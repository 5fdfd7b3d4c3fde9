//! Piece module - the falling piece
//!
//! A piece is a small `Copy` value: kind, current shape matrix, color and the
//! board position of its bounding box's top-left corner. It knows nothing about
//! the board; callers check [`Board::is_blocked`](crate::Board::is_blocked)
//! before committing a move or a rotation.

use crate::shapes::{ShapeDefinition, ShapeMatrix};
use crate::types::{Color, PieceKind, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
    pub color: Color,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Place a catalog shape at the spawn position: horizontally centered, top row.
    pub fn spawn(def: &ShapeDefinition) -> Self {
        Self {
            kind: def.kind,
            shape: def.matrix,
            color: def.color,
            x: spawn_x(def.matrix.cols()),
            y: 0,
        }
    }

    /// Spawn a piece of the given kind
    pub fn new(kind: PieceKind) -> Self {
        Self::spawn(ShapeDefinition::for_kind(kind))
    }

    /// Move the anchor. Does not check the board.
    pub fn translate(&mut self, dx: i8, dy: i8) {
        self.x += dx;
        self.y += dy;
    }

    /// Clockwise-rotated shape for this piece, without changing the piece.
    pub fn rotate(&self) -> ShapeMatrix {
        self.shape.rotate_clockwise()
    }

    /// Copy of this piece carrying a different shape, e.g. a rotation candidate.
    pub fn with_shape(&self, shape: ShapeMatrix) -> Self {
        Self { shape, ..*self }
    }

    /// Copy of this piece at a different position.
    pub fn at(&self, x: i8, y: i8) -> Self {
        Self { x, y, ..*self }
    }

    /// Board coordinates (x, y) of every filled cell.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled_cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    pub fn width(&self) -> u8 {
        self.shape.cols()
    }

    pub fn height(&self) -> u8 {
        self.shape.rows()
    }
}

/// Spawn column for a shape of the given width
pub fn spawn_x(width: u8) -> i8 {
    (BOARD_WIDTH / 2) as i8 - (width / 2) as i8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_positions() {
        assert_eq!(Piece::new(PieceKind::I).x, 3);
        assert_eq!(Piece::new(PieceKind::O).x, 4);
        assert_eq!(Piece::new(PieceKind::T).x, 4);
        for kind in PieceKind::ALL {
            assert_eq!(Piece::new(kind).y, 0);
        }
    }

    #[test]
    fn test_spawn_uses_catalog_color() {
        for kind in PieceKind::ALL {
            assert_eq!(Piece::new(kind).color, kind.color());
        }
    }

    #[test]
    fn test_translate() {
        let mut piece = Piece::new(PieceKind::S);
        piece.translate(-2, 3);
        assert_eq!((piece.x, piece.y), (2, 3));
    }

    #[test]
    fn test_rotate_does_not_mutate() {
        let piece = Piece::new(PieceKind::L);
        let rotated = piece.rotate();
        assert_ne!(rotated, piece.shape);
        assert_eq!(piece.shape, ShapeDefinition::for_kind(PieceKind::L).matrix);
    }

    #[test]
    fn test_with_shape_keeps_position_and_color() {
        let piece = Piece::new(PieceKind::J).at(2, 7);
        let candidate = piece.with_shape(piece.rotate());
        assert_eq!((candidate.x, candidate.y), (2, 7));
        assert_eq!(candidate.color, piece.color);
        assert_eq!(candidate.width(), piece.height());
    }

    #[test]
    fn test_cells_are_absolute() {
        let piece = Piece::new(PieceKind::O).at(1, 5);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(1, 5), (2, 5), (1, 6), (2, 6)]);
    }
}
