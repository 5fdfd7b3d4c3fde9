//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The playfield is a fixed grid:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: horizontally centered on the piece width, row 0
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Event loop poll interval (~60 FPS) |
//! | `INITIAL_DROP_INTERVAL_MS` | 500 | Gravity at level 1 |
//! | `DROP_INTERVAL_STEP_MS` | 50 | Gravity speed-up per level |
//! | `MIN_DROP_INTERVAL_MS` | 100 | Fastest gravity |
//! | `LINES_PER_LEVEL` | 10 | Cleared lines needed per level |
//!
//! # Examples
//!
//! ```
//! use classic_tetris_types::{Color, GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(piece.color(), Color::Purple);
//! assert_eq!(PieceKind::ALL[piece.index()], piece);
//!
//! assert_eq!(GameAction::HardDrop.as_str(), "hardDrop");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Board height as a `usize`, for fixed-capacity containers sized by row count.
pub const BOARD_ROWS: usize = BOARD_HEIGHT as usize;

/// Board width as a `usize`.
pub const BOARD_COLS: usize = BOARD_WIDTH as usize;

/// Largest bounding box side of any shape in the catalog.
pub const MAX_SHAPE_SIZE: usize = 4;

/// Event loop poll interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Gravity interval when a game starts (level 1)
pub const INITIAL_DROP_INTERVAL_MS: u32 = 500;

/// Gravity interval reduction applied on every level-up
pub const DROP_INTERVAL_STEP_MS: u32 = 50;

/// Gravity never gets faster than this
pub const MIN_DROP_INTERVAL_MS: u32 = 100;

/// Cleared lines per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Level a new game starts at
pub const STARTING_LEVEL: u32 = 1;

/// Board cell width in terminal columns (2 columns per cell keeps cells roughly square)
pub const CELL_WIDTH: u16 = 2;

/// Board cell height in terminal rows
pub const CELL_HEIGHT: u16 = 1;

/// Overlay text shown once the game has ended
pub const GAME_OVER_TEXT: &str = "GAME OVER";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(INITIAL_DROP_INTERVAL_MS, 500);
        assert_eq!(DROP_INTERVAL_STEP_MS, 50);
        assert_eq!(MIN_DROP_INTERVAL_MS, 100);
        assert_eq!(LINES_PER_LEVEL, 10);
        assert_eq!(STARTING_LEVEL, 1);
    }

    #[test]
    fn catalog_order_matches_all() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn each_kind_has_a_distinct_color() {
        for a in PieceKind::ALL {
            for b in PieceKind::ALL {
                if a != b {
                    assert_ne!(a.color(), b.color(), "{:?} and {:?} share a color", a, b);
                }
            }
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(PieceKind::J.as_str(), "J");
        assert_eq!(GameAction::MoveLeft.as_str(), "moveLeft");
        assert_eq!(GameAction::Restart.as_str(), "restart");
    }

    #[test]
    fn direction_offsets() {
        assert_eq!(Direction::Left.dx(), -1);
        assert_eq!(Direction::Right.dx(), 1);
    }
}

/// The seven piece kinds, in catalog order
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **T**: Purple, T-shaped
/// - **O**: Yellow, 2x2 square
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **L**: Orange, L-shaped
/// - **J**: Blue, J-shaped (mirror of L)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    T,
    O,
    S,
    Z,
    L,
    J,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::T,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Position of this kind in the shape catalog.
    pub const fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::T => 1,
            PieceKind::O => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::L => 5,
            PieceKind::J => 6,
        }
    }

    /// Display color paired with this kind.
    pub const fn color(self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::T => Color::Purple,
            PieceKind::O => Color::Yellow,
            PieceKind::S => Color::Green,
            PieceKind::Z => Color::Red,
            PieceKind::L => Color::Orange,
            PieceKind::J => Color::Blue,
        }
    }

    /// Uppercase letter, as shown in the side panel
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::T => "T",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::L => "L",
            PieceKind::J => "J",
        }
    }
}

/// Opaque color tag stored in locked board cells.
///
/// The renderer decides what each tag looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Purple,
    Yellow,
    Green,
    Red,
    Orange,
    Blue,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell filled by a locked piece of that color
pub type Cell = Option<Color>;

/// Horizontal movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column offset for one step in this direction.
    pub fn dx(self) -> i8 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Game actions delivered by the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Run one gravity step immediately
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Drop piece to its resting position and lock it
    HardDrop,
    /// Start a new game (also allowed after game over)
    Restart,
}

impl GameAction {
    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::HardDrop => "hardDrop",
            GameAction::Restart => "restart",
        }
    }
}

/// Controller state machine.
///
/// `Playing` is initial. `GameOver` is terminal for the current game; only a
/// restart leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Playing,
    GameOver,
}
