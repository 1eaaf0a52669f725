//! Board module - manages the game grid
//!
//! The board is a 10x20 occupancy grid. A cell is occupied iff a locked piece
//! cell rests there; the falling piece never writes into it.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;
use tracing::debug;

use crate::types::{CellPos, BOARD_HEIGHT, BOARD_WIDTH, LINE_CLEAR_BONUS};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Rows cleared by one lock, in the order the scan found them.
///
/// A piece spans at most four rows, but a prepared board may hold more full
/// rows; the scan visits each row once, so `HEIGHT` bounds the list.
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// Result of locking a piece.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LockOutcome {
    pub cleared_rows: ClearedRows,
    pub score_gained: u32,
}

impl LockOutcome {
    pub fn lines_cleared(&self) -> u32 {
        self.cleared_rows.len() as u32
    }
}

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of occupancy, row-major order (y * WIDTH + x)
    cells: [bool; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [false; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if Self::is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Check if position is out of bounds
    #[inline(always)]
    pub fn is_out_of_bounds(x: i8, y: i8) -> bool {
        x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_some_and(|idx| self.cells[idx])
    }

    /// Check if position is within bounds and empty
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_some_and(|idx| !self.cells[idx])
    }

    /// True if any cell is out of bounds or on an occupied cell.
    pub fn is_colliding(&self, cells: &[CellPos]) -> bool {
        cells.iter().any(|&(x, y)| !self.is_free(x, y))
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, occupied: bool) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = occupied;
                true
            }
            None => false,
        }
    }

    /// Fill an entire row, leaving the listed columns empty.
    ///
    /// Convenience for building board positions.
    pub fn fill_row_except(&mut self, y: usize, holes: &[usize]) {
        if y >= HEIGHT {
            return;
        }
        for x in 0..WIDTH {
            self.cells[y * WIDTH + x] = !holes.contains(&x);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|&c| c)
    }

    /// One row of occupancy, left to right.
    pub fn row(&self, y: usize) -> &[bool] {
        let start = y.min(HEIGHT - 1) * WIDTH;
        &self.cells[start..start + WIDTH]
    }

    /// Lock piece cells into the board, then clear full rows.
    ///
    /// Cells outside the board are skipped.
    pub fn lock(&mut self, cells: &[CellPos]) -> LockOutcome {
        for &(x, y) in cells {
            self.set(x, y, true);
        }
        self.clear_full_rows()
    }

    /// Remove every full row and drop the rows above it by one.
    ///
    /// Rows are scanned top to bottom in a single pass. When row `y` is full,
    /// rows `0..y` shift down into `1..=y` and row 0 is emptied. The row that
    /// lands on `y` was already scanned and found not full, so the pass never
    /// has to restart.
    pub fn clear_full_rows(&mut self) -> LockOutcome {
        let mut outcome = LockOutcome::default();

        for y in 0..HEIGHT {
            if !self.is_row_full(y) {
                continue;
            }

            // Shift all rows above down by one.
            // Note: copy_within handles overlapping ranges safely
            if y > 0 {
                self.cells.copy_within(0..y * WIDTH, WIDTH);
            }
            self.cells[..WIDTH].fill(false);

            outcome.cleared_rows.push(y);
            outcome.score_gained += LINE_CLEAR_BONUS;
            debug!(row = y, "row cleared");
        }

        outcome
    }

    /// Write occupancy into a row-major `[y][x]` grid (allocation-free).
    pub fn write_grid(&self, out: &mut [[bool; WIDTH]; HEIGHT]) {
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[y * WIDTH..(y + 1) * WIDTH]);
        }
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Parse a board from text rows, `#` for occupied and anything else empty.
    ///
    /// Rows are bottom-aligned: the last line becomes row 19. Useful for tests
    /// and the replay tool.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let skip = HEIGHT.saturating_sub(rows.len());
        for (i, line) in rows.iter().take(HEIGHT).enumerate() {
            let y = skip + i;
            for (x, ch) in line.chars().take(WIDTH).enumerate() {
                board.cells[y * WIDTH + x] = ch == '#';
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_lock_skips_out_of_bounds_cells() {
        let mut board = Board::new();
        let outcome = board.lock(&[(-1, 0), (0, 0), (10, 5), (3, 20)]);
        assert_eq!(outcome.lines_cleared(), 0);
        assert_eq!(board.occupied_count(), 1);
        assert!(board.is_occupied(0, 0));
    }

    #[test]
    fn test_single_row_shifts_rows_above() {
        let mut board = Board::new();
        board.fill_row_except(19, &[]);
        board.set(2, 18, true);
        board.set(7, 3, true);
        let before: Vec<Vec<bool>> = (0..HEIGHT).map(|y| board.row(y).to_vec()).collect();

        let outcome = board.clear_full_rows();
        assert_eq!(outcome.cleared_rows.as_slice(), &[19]);
        assert_eq!(outcome.score_gained, LINE_CLEAR_BONUS);

        for y in 1..HEIGHT {
            assert_eq!(board.row(y), before[y - 1].as_slice(), "row {}", y);
        }
        assert!(board.row(0).iter().all(|&c| !c));
    }

    #[test]
    fn test_separated_full_rows_clear_in_one_pass() {
        let mut board = Board::from_rows(&[
            "##########",
            "#.........",
            "##########",
        ]);
        let outcome = board.clear_full_rows();
        assert_eq!(outcome.cleared_rows.as_slice(), &[17, 19]);
        assert_eq!(outcome.score_gained, 2 * LINE_CLEAR_BONUS);
        assert_eq!(board.occupied_count(), 1);
        assert!(board.is_occupied(0, 19));
    }

    #[test]
    fn test_more_than_four_full_rows_are_all_counted() {
        let mut board = Board::new();
        for y in 14..HEIGHT {
            board.fill_row_except(y, &[]);
        }
        let outcome = board.clear_full_rows();
        assert_eq!(outcome.cleared_rows.as_slice(), &[14, 15, 16, 17, 18, 19]);
        assert_eq!(outcome.lines_cleared(), 6);
        assert_eq!(outcome.score_gained, 6 * LINE_CLEAR_BONUS);
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_write_grid_matches_cells() {
        let mut board = Board::new();
        board.set(4, 7, true);
        let mut grid = [[false; WIDTH]; HEIGHT];
        board.write_grid(&mut grid);
        assert!(grid[7][4]);
        assert_eq!(grid.iter().flatten().filter(|&&c| c).count(), 1);
    }
}
