//! Active falling piece

use crate::board::Board;
use crate::pieces::{get_cells, get_spawn_cells, rotate_about_pivot};
use crate::types::{CellPos, PieceKind};

/// The falling piece: its kind, four absolute cells and the skin it is drawn with.
///
/// Cells keep catalog order so that index 1 stays the rotation pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub cells: [CellPos; 4],
    pub skin: u8,
}

impl ActivePiece {
    /// Create a new piece at the spawn offset
    pub fn spawn(kind: PieceKind, skin: u8) -> Self {
        Self {
            kind,
            cells: get_spawn_cells(kind),
            skin,
        }
    }

    /// Create a piece with its catalog shape shifted by an offset
    pub fn at(kind: PieceKind, offset_x: i8, offset_y: i8, skin: u8) -> Self {
        Self {
            kind,
            cells: get_cells(kind, offset_x, offset_y),
            skin,
        }
    }

    /// A copy moved by `(dx, dy)`.
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            cells: self.cells.map(|(x, y)| (x + dx, y + dy)),
            ..*self
        }
    }

    /// A copy turned 90° about the pivot cell. Not validated.
    pub fn rotated(&self) -> Self {
        Self {
            cells: rotate_about_pivot(&self.cells),
            ..*self
        }
    }

    /// True if any cell is out of bounds or overlaps a locked cell.
    pub fn is_colliding(&self, board: &Board) -> bool {
        board.is_colliding(&self.cells)
    }

    /// Lowest row (largest y) the piece covers.
    pub fn bottom_row(&self) -> i8 {
        self.cells.iter().map(|&(_, y)| y).max().unwrap_or(0)
    }
}
