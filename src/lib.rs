//! Pivot Tetris (workspace facade crate).
//!
//! The game lives in dedicated crates under `crates/`; this package exposes
//! them as `pivot_tetris::{core,input,term,types}` and holds the shared
//! command-line and logging setup used by both binaries.

pub mod cli;
pub mod logging;
pub mod replay;

pub use pivot_tetris_core as core;
pub use pivot_tetris_input as input;
pub use pivot_tetris_term as term;
pub use pivot_tetris_types as types;
