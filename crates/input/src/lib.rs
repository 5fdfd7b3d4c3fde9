//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. The game has
//! no auto-repeat logic of its own: one key press is one action, and held keys
//! repeat at whatever rate the terminal sends.

pub mod map;

pub use classic_tetris_types as types;

pub use map::{handle_key_event, should_quit};
