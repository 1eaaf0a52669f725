use serde::{Deserialize, Serialize};

use crate::piece::ActivePiece;
use crate::pieces::get_spawn_cells;
use crate::types::{CellPos, PieceKind, SessionState, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub cells: [CellPos; 4],
    pub skin: u8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            cells: value.cells,
            skin: value.skin,
        }
    }
}

impl Default for ActiveSnapshot {
    fn default() -> Self {
        Self {
            kind: PieceKind::I,
            cells: get_spawn_cells(PieceKind::I),
            skin: 0,
        }
    }
}

/// Read-only view of a session for renderers and tools.
///
/// `board` is row-major: `board[y][x]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: [[bool; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: ActiveSnapshot,
    pub score: u32,
    pub lines: u32,
    pub state: SessionState,
    pub episode_id: u32,
    pub piece_id: u32,
}

impl GameSnapshot {
    pub fn running(&self) -> bool {
        self.state.is_running()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[false; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: ActiveSnapshot::default(),
            score: 0,
            lines: 0,
            state: SessionState::Running,
            episode_id: 0,
            piece_id: 0,
        }
    }
}
