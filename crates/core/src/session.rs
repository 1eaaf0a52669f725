//! Game session module - owns and drives the complete game state
//!
//! This module ties together the board, the active piece, the selector and the
//! gravity clock. It handles tick-driven gravity, input-driven moves, the
//! lock/spawn transition, game-over detection, scoring and restart.
//!
//! Rejected moves and rotations are not errors: the piece simply stays where
//! it was. Game over is a state, reported through [`GameSession::state`].

use tracing::{debug, info, trace, warn};

use crate::board::Board;
use crate::clock::GravityClock;
use crate::piece::ActivePiece;
use crate::rng::{PieceSelector, SimpleRng};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Seeds and timing a session starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seed for piece selection.
    pub seed: u32,
    /// Seed for the per-spawn skin draw. Kept separate so visuals never
    /// perturb the piece sequence.
    pub skin_seed: u32,
    /// Gravity interval in milliseconds.
    pub tick_ms: u32,
}

impl SessionConfig {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            skin_seed: derive_skin_seed(seed),
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Default skin seed for a piece seed.
pub fn derive_skin_seed(seed: u32) -> u32 {
    seed.rotate_left(16) ^ 0x9E37_79B9
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    active: ActivePiece,
    selector: PieceSelector,
    skin_rng: SimpleRng,
    clock: GravityClock,
    state: SessionState,
    score: u32,
    lines: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Monotonic id for spawned pieces (increments on every spawn).
    piece_id: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameSession {
    /// Create a new running session with the given piece seed
    pub fn new(seed: u32) -> Self {
        Self::with_config(SessionConfig::new(seed))
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self::with_board(config, Board::new())
    }

    /// Start a session on a prepared board.
    ///
    /// The first piece spawns immediately; if it collides the session starts
    /// in `GameOver`. Restart always returns to an empty board.
    pub fn with_board(config: SessionConfig, board: Board) -> Self {
        let mut selector = PieceSelector::new(config.seed);
        let mut skin_rng = SimpleRng::new(config.skin_seed);
        let active = draw_piece(&mut selector, &mut skin_rng);

        let mut session = Self {
            board,
            active,
            selector,
            skin_rng,
            clock: GravityClock::new(config.tick_ms),
            state: SessionState::Running,
            score: 0,
            lines: 0,
            episode_id: 0,
            piece_id: 1,
            last_event: None,
        };
        session.resolve_spawn();
        session
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn active_kind(&self) -> PieceKind {
        self.active.kind
    }

    pub fn active_cells(&self) -> [CellPos; 4] {
        self.active.cells
    }

    pub fn clock(&self) -> &GravityClock {
        &self.clock
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = ActiveSnapshot::from(self.active);
        out.score = self.score;
        out.lines = self.lines;
        out.state = self.state;
        out.episode_id = self.episode_id;
        out.piece_id = self.piece_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance wall time and run every gravity tick that fell due.
    ///
    /// Returns the number of ticks applied. Stops early if a tick ends the
    /// round, since the clock halts with it.
    pub fn update(&mut self, elapsed_ms: u32) -> u32 {
        let due = self.clock.advance(elapsed_ms);
        let mut applied = 0;
        for _ in 0..due {
            if !self.is_running() {
                break;
            }
            self.tick();
            applied += 1;
        }
        applied
    }

    /// One gravity step. No-op unless running.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.move_down();
        true
    }

    /// Apply a game action
    ///
    /// Returns whether the session changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_horizontal(-1),
            GameAction::MoveRight => self.move_horizontal(1),
            GameAction::SoftDrop => self.tick(),
            GameAction::Rotate => self.rotate(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Move the piece one row down, locking it when it cannot move.
    ///
    /// Returns true if the piece moved; false if it locked (or the session is
    /// not running).
    pub fn move_down(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }

        let candidate = self.active.translated(0, 1);
        if !candidate.is_colliding(&self.board) {
            self.active = candidate;
            return true;
        }

        self.lock_and_spawn();
        false
    }

    /// Shift the piece one column. `direction` is -1 (left) or +1 (right).
    pub fn move_horizontal(&mut self, direction: i8) -> bool {
        debug_assert!(direction == -1 || direction == 1);
        if !self.is_running() || direction == 0 {
            return false;
        }

        let candidate = self.active.translated(direction.signum(), 0);
        if candidate.is_colliding(&self.board) {
            return false;
        }
        self.active = candidate;
        true
    }

    /// Turn the piece 90° about its pivot cell if the result fits.
    pub fn rotate(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }

        let candidate = self.active.rotated();
        if candidate.is_colliding(&self.board) {
            trace!(kind = ?self.active.kind, "rotation rejected");
            return false;
        }
        self.active = candidate;
        true
    }

    /// Start a fresh round: empty board, zero score, new piece, clock running.
    ///
    /// The selector and skin streams continue rather than reseeding, so
    /// consecutive rounds deal different sequences.
    pub fn restart(&mut self) {
        info!(
            episode = self.episode_id,
            score = self.score,
            lines = self.lines,
            "restarting session"
        );
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.last_event = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.state = SessionState::Running;
        self.clock.resume();
        self.spawn_next();
    }

    fn lock_and_spawn(&mut self) {
        let outcome = self.board.lock(&self.active.cells);
        let lines_cleared = outcome.lines_cleared();
        self.score += outcome.score_gained;
        self.lines += lines_cleared;
        debug!(
            kind = ?self.active.kind,
            lines_cleared,
            score = self.score,
            "piece locked"
        );

        let game_over = self.spawn_next();

        self.last_event = Some(LockEvent {
            lines_cleared,
            score_gained: outcome.score_gained,
            game_over,
        });
    }

    /// Replace the active piece with the next draw. Returns true if that
    /// spawn ended the round.
    fn spawn_next(&mut self) -> bool {
        self.active = draw_piece(&mut self.selector, &mut self.skin_rng);
        self.piece_id = self.piece_id.wrapping_add(1);
        self.resolve_spawn()
    }

    /// Check the freshly spawned piece against the board.
    fn resolve_spawn(&mut self) -> bool {
        if !self.active.is_colliding(&self.board) {
            return false;
        }

        if self.active.bottom_row() <= GAME_OVER_ROW {
            self.state = SessionState::GameOver;
            self.clock.stop();
            info!(score = self.score, lines = self.lines, "game over");
            true
        } else {
            warn!(
                bottom_row = self.active.bottom_row(),
                "spawn blocked below the game-over row"
            );
            false
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}

fn draw_piece(selector: &mut PieceSelector, skin_rng: &mut SimpleRng) -> ActivePiece {
    let kind = selector.next();
    let skin = skin_rng.next_range(SKIN_COUNT as u32) as u8;
    ActivePiece::spawn(kind, skin)
}
