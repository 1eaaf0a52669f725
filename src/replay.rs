//! Headless replay: drive a session from a scripted action string.
//!
//! Used by the `tetris-replay` binary and by integration tests to reproduce
//! a game deterministically from seeds.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, ensure, Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::debug;

use crate::cli::SessionArgs;
use crate::core::{Board, GameSession, GameSnapshot};
use crate::types::{GameAction, LockEvent, BOARD_HEIGHT};

/// Replay a scripted game and print the final state as JSON
#[derive(Parser, Debug)]
#[command(name = "tetris-replay")]
#[command(about = "Replay a scripted game headlessly", long_about = None)]
#[command(version)]
pub struct ReplayArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Action codes: L/R move, D soft-drops, U rotates, X restarts.
    /// Whitespace is ignored.
    #[arg(long, default_value = "")]
    pub actions: String,

    /// Gravity ticks to run after the actions
    #[arg(long, default_value_t = 0)]
    pub ticks: u32,

    /// Starting board as text rows ('#' occupied), bottom-aligned
    #[arg(long)]
    pub board_file: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Write logs to this file
    #[arg(long, env = "TETRIS_LOG_PATH")]
    pub log_path: Option<PathBuf>,
}

/// Result of a replay.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Actions that changed the session.
    pub actions_applied: usize,
    pub ticks_applied: u32,
    /// Every lock in order.
    pub locks: Vec<LockEvent>,
    pub snapshot: GameSnapshot,
}

/// Parse a string of replay codes.
pub fn parse_actions(codes: &str) -> Result<Vec<GameAction>> {
    codes
        .chars()
        .filter(|c| !c.is_whitespace())
        .enumerate()
        .map(|(i, c)| match GameAction::from_code(c) {
            Some(action) => Ok(action),
            None => bail!("unknown action code {c:?} at position {i}"),
        })
        .collect()
}

/// Read a board file (see [`parse_board`]).
pub fn load_board(path: &Path) -> Result<Board> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read board file {}", path.display()))?;
    parse_board(&text).with_context(|| format!("parse board file {}", path.display()))
}

/// Parse board text, bottom-aligned as in [`Board::from_rows`].
///
/// Leading and trailing blank lines are ignored. A blank line between rows
/// is an error, since dropping it would shift every row above.
pub fn parse_board(text: &str) -> Result<Board> {
    let lines: Vec<&str> = text.lines().collect();
    let is_row = |l: &&str| !l.trim().is_empty();
    let first = lines.iter().position(is_row);
    let last = lines.iter().rposition(is_row);
    let rows = match (first, last) {
        (Some(first), Some(last)) => &lines[first..=last],
        _ => &lines[..0],
    };
    if let Some(i) = rows.iter().position(|l| !is_row(l)) {
        bail!("blank line inside board at line {}", first.unwrap_or(0) + i + 1);
    }
    ensure!(
        rows.len() <= BOARD_HEIGHT as usize,
        "board file has {} rows, at most {} allowed",
        rows.len(),
        BOARD_HEIGHT
    );
    Ok(Board::from_rows(rows))
}

/// Run a replay to completion.
pub fn run_replay(args: &ReplayArgs) -> Result<ReplayReport> {
    let config = args.session.session_config()?;
    let actions = parse_actions(&args.actions)?;
    let board = match &args.board_file {
        Some(path) => load_board(path)?,
        None => Board::new(),
    };

    let mut session = GameSession::with_board(config, board);
    Ok(replay(&mut session, &actions, args.ticks))
}

/// Apply `actions`, then up to `ticks` gravity ticks.
///
/// Ticks stop once the round is over; `ticks_applied` reports how many ran.
pub fn replay(session: &mut GameSession, actions: &[GameAction], ticks: u32) -> ReplayReport {
    let mut locks = Vec::new();
    let mut actions_applied = 0;

    for &action in actions {
        if session.apply_action(action) {
            actions_applied += 1;
        }
        locks.extend(session.take_last_event());
    }

    let mut ticks_applied = 0;
    for _ in 0..ticks {
        if !session.tick() {
            break;
        }
        ticks_applied += 1;
        locks.extend(session.take_last_event());
    }

    debug!(
        actions_applied,
        ticks_applied,
        locks = locks.len(),
        "replay finished"
    );

    ReplayReport {
        actions_applied,
        ticks_applied,
        locks,
        snapshot: session.snapshot(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_ignoring_whitespace_and_case() {
        let actions = parse_actions("L r\nd U x").unwrap();
        assert_eq!(
            actions,
            vec![
                GameAction::MoveLeft,
                GameAction::MoveRight,
                GameAction::SoftDrop,
                GameAction::Rotate,
                GameAction::Restart,
            ]
        );
    }

    #[test]
    fn unknown_code_is_an_error() {
        let err = parse_actions("LLQ").unwrap_err();
        assert!(err.to_string().contains("position 2"));
    }

    #[test]
    fn board_text_ignores_surrounding_blank_lines() {
        let board = parse_board("\n\n#.........\n##########\n\n").unwrap();
        assert!(board.is_occupied(0, 18));
        assert!(board.is_row_full(19));
        assert_eq!(board.occupied_count(), 11);
    }

    #[test]
    fn blank_line_between_board_rows_is_an_error() {
        let err = parse_board("#.........\n\n##########\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn empty_board_text_gives_empty_board() {
        assert_eq!(parse_board("\n  \n").unwrap().occupied_count(), 0);
    }

    #[test]
    fn ticks_stop_after_game_over() {
        let mut board = Board::new();
        for y in 2..20 {
            board.fill_row_except(y, &[9]);
        }
        let mut session = GameSession::with_board(Default::default(), board);
        let report = replay(&mut session, &[], 100);
        assert!(!report.snapshot.running());
        assert!(report.ticks_applied < 100);
        assert!(report.locks.last().is_some_and(|e| e.game_over));
    }
}
