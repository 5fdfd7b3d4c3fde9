//! Terminal rendering module.
//!
//! Renders game snapshots into a simple framebuffer and flushes it to the
//! terminal through crossterm, without a widget toolkit.
//!
//! - [`GameView`] is pure: snapshot in, framebuffer out
//! - [`TerminalRenderer`] owns the terminal and writes only what changed
//! - Each board cell is 2 columns wide to keep cells roughly square

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use classic_tetris_core as core;
pub use classic_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
