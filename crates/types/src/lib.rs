//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no external dependencies beyond serde, so they
//! can be used by the simulation core, the terminal shell and the replay tool.
//!
//! # Board Dimensions
//!
//! The playfield is derived from a 400x800 canvas split into 40-unit cells:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn offset**: (0, 0), so new pieces occupy rows 0-1
//!
//! # Session Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_MS` | 500 | Gravity interval |
//! | `FRAME_MS` | 16 | Shell frame step (~60 FPS) |
//! | `GAME_OVER_ROW` | 4 | Lock-height ceiling for game-over detection |
//! | `LINE_CLEAR_BONUS` | 100 | Flat score per cleared row |
//! | `MAX_CONSECUTIVE_SAME_PIECE` | 2 | Longest allowed run of one kind |
//! | `SKIN_COUNT` | 7 | Visual variants drawn per spawn |
//!
//! # Examples
//!
//! ```
//! use pivot_tetris_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Canvas width in pixels the board is derived from.
pub const CANVAS_WIDTH: u16 = 400;

/// Canvas height in pixels the board is derived from.
pub const CANVAS_HEIGHT: u16 = 800;

/// Size of one board cell in canvas units.
pub const CELL_SIZE: u16 = 40;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = (CANVAS_WIDTH / CELL_SIZE) as u8;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = (CANVAS_HEIGHT / CELL_SIZE) as u8;

/// Default gravity interval in milliseconds.
pub const DEFAULT_TICK_MS: u32 = 500;

/// Frame step used by the terminal shell (16ms ≈ 60 FPS).
pub const FRAME_MS: u32 = 16;

/// A spawn that collides with its lowest row at or above this row ends the game.
pub const GAME_OVER_ROW: i8 = 4;

/// Score awarded for every cleared row.
pub const LINE_CLEAR_BONUS: u32 = 100;

/// The same kind is never dealt more than this many times in a row.
pub const MAX_CONSECUTIVE_SAME_PIECE: u32 = 2;

/// Number of visual skins a spawned piece can be drawn with.
pub const SKIN_COUNT: u8 = 7;

/// Absolute board coordinate `(column, row)`.
///
/// Signed so that candidate positions one step outside the board can be
/// represented and rejected by collision checks.
pub type CellPos = (i8, i8);

/// The seven tetromino piece kinds
///
/// Each kind has a single canonical orientation in the catalog; rotation is
/// computed live from the current cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    L,
    J,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::L,
        PieceKind::J,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use pivot_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }

    /// Uppercase letter used by the side panel.
    pub fn letter(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// Commands the shell forwards to the session.
///
/// Each command is applied at most once per key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if it cannot move
    SoftDrop,
    /// Rotate piece 90° about its pivot cell
    Rotate,
    /// Start a fresh round (accepted in any state)
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use pivot_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Parse a single-letter replay code.
    ///
    /// `L`/`R` move, `D` soft-drops, `U` rotates, `X` restarts.
    pub fn from_code(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'L' => Some(GameAction::MoveLeft),
            'R' => Some(GameAction::MoveRight),
            'D' => Some(GameAction::SoftDrop),
            'U' => Some(GameAction::Rotate),
            'X' => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::Restart => "restart",
        }
    }
}

/// Session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionState {
    #[default]
    Running,
    GameOver,
}

impl SessionState {
    pub fn is_running(&self) -> bool {
        matches!(self, SessionState::Running)
    }
}

/// Core-side event emitted after a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_gained: u32,
    /// The replacement spawn collided and ended the round.
    pub game_over: bool,
}
