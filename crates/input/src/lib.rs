//! Terminal input module (session-facing).
//!
//! This module is independent of any UI framework beyond `crossterm` events.
//! It maps key presses into [`crate::types::GameAction`], one action per
//! press. There is no auto-repeat: holding a key does nothing extra.

pub mod map;

pub use pivot_tetris_types as types;

pub use map::{action_for_event, handle_key_event, should_quit};
