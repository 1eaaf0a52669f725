//! Board tests - occupancy, locking and line clearing

use pivot_tetris::core::Board;
use pivot_tetris::types::{BOARD_HEIGHT, BOARD_WIDTH, LINE_CLEAR_BONUS};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.occupied_count(), 0);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(board.is_free(x, y), "Cell ({}, {}) should be free", x, y);
        }
    }
}

#[test]
fn test_out_of_bounds_is_never_free() {
    let board = Board::new();

    assert!(Board::is_out_of_bounds(-1, 0));
    assert!(Board::is_out_of_bounds(0, -1));
    assert!(Board::is_out_of_bounds(BOARD_WIDTH as i8, 0));
    assert!(Board::is_out_of_bounds(0, BOARD_HEIGHT as i8));

    assert!(!board.is_free(-1, 5));
    assert!(!board.is_occupied(-1, 5));
    assert!(board.is_colliding(&[(0, 0), (10, 0)]));
    assert!(!board.is_colliding(&[(0, 0), (9, 19)]));
}

#[test]
fn test_lock_skips_out_of_bounds_cells() {
    let mut board = Board::new();
    let outcome = board.lock(&[(-1, 19), (0, 19), (10, 19), (0, 20)]);

    assert_eq!(outcome.lines_cleared(), 0);
    assert_eq!(board.occupied_count(), 1);
    assert!(board.is_occupied(0, 19));
}

#[test]
fn test_filling_last_hole_of_bottom_row_clears_it() {
    let mut board = Board::from_rows(&[
        "#.........", //
        "#########.",
    ]);

    let outcome = board.lock(&[(9, 19)]);

    assert_eq!(outcome.lines_cleared(), 1);
    assert_eq!(outcome.score_gained, LINE_CLEAR_BONUS);
    assert_eq!(outcome.cleared_rows.as_slice(), &[19]);
    // The lone block above dropped into the cleared row.
    assert!(board.is_occupied(0, 19));
    assert_eq!(board.occupied_count(), 1);
    assert!(board.row(0).iter().all(|&c| !c));
}

#[test]
fn test_rows_above_clear_shift_down_by_one() {
    let mut board = Board::from_rows(&[
        "..#.......",
        ".#........",
        "##########",
        "#.#.#.#.#.",
    ]);

    let outcome = board.clear_full_rows();

    assert_eq!(outcome.cleared_rows.as_slice(), &[18]);
    assert_eq!(board.row(19), Board::from_rows(&["#.#.#.#.#."]).row(19));
    assert!(board.is_occupied(1, 18));
    assert!(board.is_occupied(2, 17));
    assert!(board.is_free(2, 16));
}

#[test]
fn test_non_adjacent_full_rows_clear_in_one_pass() {
    let mut board = Board::from_rows(&[
        "##########",
        "#.........",
        "##########",
        "..#.......",
        "##########",
    ]);

    let outcome = board.clear_full_rows();

    assert_eq!(outcome.lines_cleared(), 3);
    assert_eq!(outcome.score_gained, 3 * LINE_CLEAR_BONUS);
    for y in 0..BOARD_HEIGHT as usize {
        assert!(!board.is_row_full(y), "row {} still full", y);
    }
    // The two partial rows survive in order at the bottom.
    assert!(board.is_occupied(0, 18));
    assert!(board.is_occupied(2, 19));
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_four_row_clear_empties_board() {
    let mut board = Board::new();
    for y in 16..20 {
        board.fill_row_except(y, &[]);
    }

    let outcome = board.clear_full_rows();

    assert_eq!(outcome.lines_cleared(), 4);
    assert_eq!(outcome.score_gained, 400);
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_write_grid_is_row_major() {
    let board = Board::from_rows(&[".#........"]);
    let mut grid = [[false; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    board.write_grid(&mut grid);
    assert!(grid[19][1]);
    assert_eq!(grid.iter().flatten().filter(|&&c| c).count(), 1);
}
