use crate::piece::Piece;
use crate::shapes::ShapeMatrix;
use crate::types::{Cell, Color, PieceKind, BOARD_COLS, BOARD_ROWS, INITIAL_DROP_INTERVAL_MS, STARTING_LEVEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub color: Color,
    pub shape: ShapeMatrix,
    pub x: i8,
    pub y: i8,
}

impl PieceSnapshot {
    /// Board coordinates of every filled cell.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled_cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            color: value.color,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_COLS]; BOARD_ROWS],
    pub active: Option<PieceSnapshot>,
    pub next: Option<PieceSnapshot>,
    pub score: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
    pub game_over: bool,
    pub game_id: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_COLS]; BOARD_ROWS],
            active: None,
            next: None,
            score: 0,
            level: STARTING_LEVEL,
            drop_interval_ms: INITIAL_DROP_INTERVAL_MS,
            game_over: false,
            game_id: 0,
        }
    }
}
