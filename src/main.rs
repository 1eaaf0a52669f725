//! Terminal Tetris runner (default binary).
//!
//! Runs a fixed 16ms frame loop: key presses are applied as they arrive,
//! then the session's gravity clock is advanced by one frame and the
//! snapshot is redrawn.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{debug, info};

use pivot_tetris::cli::Cli;
use pivot_tetris::core::{GameSession, GameSnapshot};
use pivot_tetris::input::{action_for_event, should_quit};
use pivot_tetris::logging::init_file_logging;
use pivot_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use pivot_tetris::types::FRAME_MS;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_file_logging(cli.log_path.as_deref())?;
    let config = cli.session.session_config()?;
    info!(
        seed = config.seed,
        skin_seed = config.skin_seed,
        tick_ms = config.tick_ms,
        "starting session"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, GameSession::with_config(config));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut session: GameSession) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut next_frame = Instant::now() + frame;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input until the frame boundary.
        loop {
            let timeout = next_frame.saturating_duration_since(Instant::now());
            if !event::poll(timeout).context("poll terminal events")? {
                break;
            }
            match event::read().context("read terminal event")? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!(score = session.score(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = action_for_event(key) {
                        let changed = session.apply_action(action);
                        debug!(action = action.as_str(), changed, "action");
                        log_lock_event(&mut session);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }
        next_frame = (next_frame + frame).max(Instant::now());

        // Gravity.
        session.update(FRAME_MS);
        log_lock_event(&mut session);
    }
}

fn log_lock_event(session: &mut GameSession) {
    let Some(event) = session.take_last_event() else {
        return;
    };
    if event.lines_cleared > 0 {
        info!(
            lines = event.lines_cleared,
            score = session.score(),
            "lines cleared"
        );
    }
}
