//! Classic Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates as `classic_tetris::{core,input,term,types}`
//! so the binary, integration tests and benchmarks share one import path.

pub use classic_tetris_core as core;
pub use classic_tetris_input as input;
pub use classic_tetris_term as term;
pub use classic_tetris_types as types;
