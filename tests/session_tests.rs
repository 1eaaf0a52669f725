//! Session tests - public state machine behavior

use pivot_tetris::core::{Board, GameSession, SessionConfig, SimpleRng};
use pivot_tetris::types::{
    GameAction, PieceKind, SessionState, BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_TICK_MS, FRAME_MS,
    LINE_CLEAR_BONUS,
};

fn assert_active_valid(session: &GameSession) {
    for (x, y) in session.active_cells() {
        assert!(
            x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8,
            "active cell ({}, {}) out of bounds",
            x,
            y
        );
        assert!(session.board().is_free(x, y), "active cell ({}, {}) overlaps", x, y);
    }
}

fn drop_until_game_over(session: &mut GameSession) {
    for _ in 0..10_000 {
        if !session.is_running() {
            return;
        }
        session.apply_action(GameAction::SoftDrop);
    }
    panic!("session never ended");
}

#[test]
fn test_new_session_is_running() {
    let session = GameSession::new(1);
    assert_eq!(session.state(), SessionState::Running);
    assert_eq!(session.score(), 0);
    assert_eq!(session.lines(), 0);
    assert_eq!(session.board().occupied_count(), 0);
    assert_active_valid(&session);
}

#[test]
fn test_random_play_keeps_invariants() {
    let mut session = GameSession::new(777);
    let mut rng = SimpleRng::new(31337);
    let actions = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::Rotate,
    ];

    for _ in 0..20_000 {
        if !session.is_running() {
            session.apply_action(GameAction::Restart);
        }
        let action = actions[rng.next_range(actions.len() as u32) as usize];
        session.apply_action(action);
        if rng.next_range(4) == 0 {
            session.update(FRAME_MS * 8);
        }

        assert_eq!(session.score(), session.lines() * LINE_CLEAR_BONUS);
        if session.is_running() {
            assert_active_valid(&session);
        }
        for y in 0..BOARD_HEIGHT as usize {
            assert!(!session.board().is_row_full(y), "row {} left full", y);
        }
    }
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameSession::new(4242);
    let mut b = GameSession::new(4242);
    let script = [
        GameAction::MoveRight,
        GameAction::Rotate,
        GameAction::SoftDrop,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::SoftDrop,
    ];

    for i in 0..2_000 {
        let action = script[i % script.len()];
        assert_eq!(a.apply_action(action), b.apply_action(action));
        assert_eq!(a.snapshot(), b.snapshot());
    }
}

#[test]
fn test_stacking_at_spawn_ends_game() {
    let mut session = GameSession::new(9);
    drop_until_game_over(&mut session);

    assert_eq!(session.state(), SessionState::GameOver);
    assert!(!session.clock().is_running());
    let event = session.take_last_event().unwrap();
    assert!(event.game_over);
}

#[test]
fn test_game_over_freezes_session() {
    let mut session = GameSession::new(9);
    drop_until_game_over(&mut session);
    let before = session.snapshot();

    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::Rotate,
    ] {
        assert!(!session.apply_action(action));
    }
    assert!(!session.tick());
    assert_eq!(session.update(10 * DEFAULT_TICK_MS), 0);
    assert_eq!(session.snapshot(), before);
}

#[test]
fn test_restart_after_game_over() {
    let mut session = GameSession::new(9);
    drop_until_game_over(&mut session);
    let piece_id = session.piece_id();

    assert!(session.apply_action(GameAction::Restart));

    assert!(session.is_running());
    assert!(session.clock().is_running());
    assert_eq!(session.score(), 0);
    assert_eq!(session.lines(), 0);
    assert_eq!(session.episode_id(), 1);
    assert_eq!(session.piece_id(), piece_id + 1);
    assert_eq!(session.board().occupied_count(), 0);
    assert!(session.take_last_event().is_none());
    assert_active_valid(&session);
}

#[test]
fn test_prepared_board_blocking_spawn_starts_over() {
    let mut board = Board::new();
    board.fill_row_except(1, &[9]);

    let mut session = GameSession::with_board(SessionConfig::new(3), board);
    assert_eq!(session.state(), SessionState::GameOver);

    session.restart();
    assert!(session.is_running());
    assert_eq!(session.board().occupied_count(), 0);
}

#[test]
fn test_soft_drop_onto_near_full_rows_clears_them() {
    // Only the two cells an O at the spawn columns fills are missing.
    let board = Board::from_rows(&[
        "..########", //
        "..########",
    ]);
    let mut session = (1..500)
        .map(|seed| GameSession::with_board(SessionConfig::new(seed), board.clone()))
        .find(|s| s.active_kind() == PieceKind::O)
        .expect("some seed deals an O first");

    while session.is_running() && session.lines() == 0 {
        session.apply_action(GameAction::SoftDrop);
    }

    assert_eq!(session.lines(), 2);
    assert_eq!(session.score(), 2 * LINE_CLEAR_BONUS);
    assert_eq!(session.board().occupied_count(), 0);
    let event = session.take_last_event().unwrap();
    assert_eq!(event.lines_cleared, 2);
    assert_eq!(event.score_gained, 200);
    assert!(!event.game_over);
}

#[test]
fn test_update_converts_elapsed_time_into_ticks() {
    let mut session = GameSession::new(1);
    let start = session.active_cells();

    assert_eq!(session.update(DEFAULT_TICK_MS - 1), 0);
    assert_eq!(session.active_cells(), start);

    assert_eq!(session.update(1), 1);
    let moved = session.active_cells();
    for (a, b) in start.iter().zip(moved.iter()) {
        assert_eq!((a.0, a.1 + 1), *b);
    }
}

#[test]
fn test_frame_steps_accumulate() {
    let mut session = GameSession::new(1);
    let frames_per_tick = DEFAULT_TICK_MS.div_ceil(FRAME_MS);
    let mut ticks = 0;
    for _ in 0..frames_per_tick {
        ticks += session.update(FRAME_MS);
    }
    assert_eq!(ticks, 1);
}

#[test]
fn test_custom_tick_interval() {
    let mut config = SessionConfig::new(1);
    config.tick_ms = 100;
    let mut session = GameSession::with_config(config);
    assert_eq!(session.update(350), 3);
    assert_eq!(session.clock().pending_ms(), 50);
}

#[test]
fn test_prepared_board_with_six_full_rows_keeps_lines_and_score_in_step() {
    let mut board = Board::new();
    for y in 14..20 {
        board.fill_row_except(y, &[]);
    }
    let mut session = GameSession::with_board(SessionConfig::new(1), board);

    while session.is_running() && session.score() == 0 {
        session.apply_action(GameAction::SoftDrop);
    }

    assert_eq!(session.lines(), 6);
    assert_eq!(session.score(), session.lines() * LINE_CLEAR_BONUS);
    let event = session.take_last_event().unwrap();
    assert_eq!(event.lines_cleared, 6);
    assert_eq!(event.score_gained, event.lines_cleared * LINE_CLEAR_BONUS);
}
