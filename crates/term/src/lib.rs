//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders session snapshots into a simple framebuffer that is then
//! flushed to the terminal as a diff against the previous frame.
//!
//! The view only reads [`core::GameSnapshot`]; it never touches the session.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use pivot_tetris_core as core;
pub use pivot_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{skin_color, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
