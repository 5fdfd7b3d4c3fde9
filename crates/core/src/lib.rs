//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminal I/O, which makes it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Unit tests for every rule, plus scenario tests at the workspace root
//! - **Portable**: Any front end can drive it through actions, ticks and snapshots
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven shape matrices, their colors, clockwise rotation
//! - [`piece`]: the falling piece (shape, color, position)
//! - [`board`]: 10x20 grid with collision testing, merging and line clearing
//! - [`scoring`]: score, level and drop interval rules
//! - [`rng`]: seedable LCG used for piece selection
//! - [`game_state`]: the controller tying it all together
//! - [`snapshot`]: renderer-facing copy of the state
//!
//! # Game Rules
//!
//! - Pieces are picked uniformly at random and spawn centered on the top row
//! - Rotation is a plain clockwise matrix rotation about the bounding box, no kicks
//! - A piece locks as soon as gravity cannot move it down
//! - Each cleared line scores one point; every 10 points is a level
//! - Each level shortens the drop interval by 50ms, down to 100ms
//! - The game ends when a freshly promoted piece overlaps the stack
//!
//! # Example
//!
//! ```
//! use classic_tetris_core::{GameState, TickOutcome};
//! use classic_tetris_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // The dropped piece is on the board now.
//! assert_eq!(game.board().filled_count(), 4);
//!
//! // Gravity fires once the drop interval has elapsed.
//! assert_eq!(game.advance(game.drop_interval_ms()), Some(TickOutcome::Moved));
//! ```
//!
//! # Timing
//!
//! The controller owns a countdown to the next gravity tick. The front end
//! reports elapsed time through [`GameState::advance`](game_state::GameState::advance);
//! the countdown is re-armed after every tick and left disarmed after game over.

pub mod board;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use classic_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use game_state::{GameState, TickOutcome};
pub use piece::Piece;
pub use rng::SimpleRng;
pub use scoring::{apply_line_clear, level_for_score, next_drop_interval, ScoreResult};
pub use shapes::{choose_random, ShapeDefinition, ShapeMatrix, SHAPES};
pub use snapshot::{GameSnapshot, PieceSnapshot};
