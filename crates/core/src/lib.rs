//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, state management, and simulation logic.
//! It has **no dependencies** on rendering, input, or I/O, making it:
//!
//! - **Deterministic**: Same seeds produce identical games
//! - **Testable**: Unit tests for every rule
//! - **Portable**: Any shell (terminal, GUI, headless) drives it the same way
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 occupancy grid with collision checks and line clearing
//! - [`pieces`]: Tetromino catalog and the pivot rotation transform
//! - [`piece`]: The active falling piece
//! - [`rng`]: Seedable LCG and the anti-streak piece selector
//! - [`clock`]: Converts elapsed time into gravity ticks
//! - [`session`]: The game session state machine
//! - [`snapshot`]: Read-only views for renderers
//!
//! # Game Rules
//!
//! - **Selection**: Uniform draw from all seven kinds; a kind dealt twice in a
//!   row is excluded from the next draw
//! - **Rotation**: 90° about the piece's second cell, rejected if any cell
//!   would leave the board or overlap a locked cell; no wall kicks
//! - **Locking**: A piece locks when gravity cannot move it down
//! - **Scoring**: 100 points per cleared row
//! - **Game over**: The replacement spawn collides at or above row 4
//!
//! # Example
//!
//! ```
//! use pivot_tetris_core::GameSession;
//! use pivot_tetris_types::GameAction;
//!
//! let mut session = GameSession::new(12345);
//!
//! session.apply_action(GameAction::MoveRight);
//! session.apply_action(GameAction::Rotate);
//! session.tick();
//!
//! assert!(session.is_running());
//! assert_eq!(session.score(), 0);
//! ```
//!
//! # Timing
//!
//! Either call [`GameSession::tick`](session::GameSession::tick) on your own
//! cadence, or feed elapsed time to
//! [`GameSession::update`](session::GameSession::update) and let the built-in
//! [`GravityClock`] fire every 500ms. The clock halts on game over and resumes
//! on restart.

pub mod board;
pub mod clock;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use pivot_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, LockOutcome};
pub use clock::GravityClock;
pub use piece::ActivePiece;
pub use pieces::{get_cells, get_shape, rotate_about_pivot};
pub use rng::{select_next, PieceSelector, SelectionHistory, SimpleRng};
pub use session::{derive_skin_seed, GameSession, SessionConfig};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
