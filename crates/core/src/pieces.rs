//! Pieces module - tetromino catalog and pivot rotation
//!
//! Every kind has exactly one canonical orientation. Rotation is not looked up
//! in a table; it is computed from the current cells by turning them 90° about
//! the cell at index 1.

use crate::types::{CellPos, PieceKind};

/// Offset of a single mino relative to piece origin
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from piece origin
pub type PieceShape = [MinoOffset; 4];

/// Index of the cell every rotation turns about.
pub const PIVOT_INDEX: usize = 1;

/// Offset applied to the catalog shape when a piece spawns.
pub const SPAWN_OFFSET: (i8, i8) = (0, 0);

/// Get the canonical shape (mino offsets) for a piece kind
pub fn get_shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::I => [(0, 1), (1, 1), (2, 1), (3, 1)],
        PieceKind::L => [(0, 0), (0, 1), (1, 1), (2, 1)],
        PieceKind::J => [(2, 0), (0, 1), (1, 1), (2, 1)],
        PieceKind::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
        PieceKind::S => [(1, 0), (2, 0), (0, 1), (1, 1)],
        PieceKind::T => [(1, 0), (0, 1), (1, 1), (2, 1)],
        PieceKind::Z => [(0, 0), (1, 0), (1, 1), (2, 1)],
    }
}

/// Get the shape of a kind translated by `(offset_x, offset_y)`.
pub fn get_cells(kind: PieceKind, offset_x: i8, offset_y: i8) -> [CellPos; 4] {
    get_shape(kind).map(|(x, y)| (x + offset_x, y + offset_y))
}

/// Cells a freshly spawned piece of `kind` occupies.
pub fn get_spawn_cells(kind: PieceKind) -> [CellPos; 4] {
    get_cells(kind, SPAWN_OFFSET.0, SPAWN_OFFSET.1)
}

/// Turn every cell 90° about the pivot cell.
///
/// A cell at `(px + dx, py + dy)` lands on `(px + dy, py - dx)`. The pivot maps
/// onto itself, so the pivot stays at [`PIVOT_INDEX`] and four applications are
/// the identity.
pub fn rotate_about_pivot(cells: &[CellPos; 4]) -> [CellPos; 4] {
    let (px, py) = cells[PIVOT_INDEX];
    cells.map(|(x, y)| (px - py + y, py + px - x))
}

/// Translate a shape so its bounding box starts at `(0, 0)`.
///
/// Used to compare shapes independent of where they sit on the board.
pub fn normalize(cells: &[CellPos; 4]) -> [CellPos; 4] {
    let min_x = cells.iter().map(|&(x, _)| x).min().unwrap_or(0);
    let min_y = cells.iter().map(|&(_, y)| y).min().unwrap_or(0);
    let mut out = cells.map(|(x, y)| (x - min_x, y - min_y));
    out.sort_unstable();
    out
}
