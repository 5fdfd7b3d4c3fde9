//! Game state module - the game controller
//!
//! This module ties together the board, the active and on-deck pieces, the RNG
//! and the scoring rules. It handles input actions, the gravity tick, locking,
//! line clears, leveling, game over and restart.
//!
//! Gravity runs off an explicit countdown owned by the controller: every tick
//! re-arms it, except the tick that ends the game, which leaves it disarmed.
//! [`GameState::advance`] is the timer collaborator's entry point.

use tracing::{debug, info, warn};

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::scoring::apply_line_clear;
use crate::shapes::choose_random;
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::*;

/// Result of one gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The active piece moved down one row.
    Moved,
    /// The active piece locked and the on-deck piece took its place.
    Locked { lines_cleared: u32, level_up: bool },
    /// The active piece locked and its replacement collided at spawn.
    GameOver,
    /// Nothing happened because the game had already ended.
    Ignored,
}

impl TickOutcome {
    /// Whether the step changed anything a renderer would show.
    pub fn changed(&self) -> bool {
        !matches!(self, TickOutcome::Ignored)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Piece,
    next: Piece,
    rng: SimpleRng,
    seed: u32,
    /// Bumped on every restart.
    game_id: u32,
    score: u32,
    level: u32,
    drop_interval_ms: u32,
    /// Milliseconds until the next automatic tick; `None` once disarmed.
    drop_timer_ms: Option<u32>,
    phase: GamePhase,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let active = Piece::spawn(choose_random(&mut rng));
        let next = Piece::spawn(choose_random(&mut rng));
        Self::with_rng(Board::new(), active, next, rng, seed)
    }

    /// Create a game from an explicit board and pieces.
    ///
    /// Pieces spawned after `next` come from an RNG seeded with `seed`. If
    /// `active` already overlaps the board the game starts over.
    pub fn from_parts(board: Board, active: Piece, next: Piece, seed: u32) -> Self {
        Self::with_rng(board, active, next, SimpleRng::new(seed), seed)
    }

    fn with_rng(board: Board, active: Piece, next: Piece, rng: SimpleRng, seed: u32) -> Self {
        let mut state = Self {
            board,
            active,
            next,
            rng,
            seed,
            game_id: 0,
            score: 0,
            level: STARTING_LEVEL,
            drop_interval_ms: INITIAL_DROP_INTERVAL_MS,
            drop_timer_ms: None,
            phase: GamePhase::Playing,
        };
        if state.board.is_blocked(&state.active, 0, 0) {
            state.phase = GamePhase::GameOver;
        } else {
            state.arm_timer();
        }
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    /// Remaining time before the next automatic tick, if the timer is armed.
    pub fn drop_timer_ms(&self) -> Option<u32> {
        self.drop_timer_ms
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    /// Seed the game was created with.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = Some(PieceSnapshot::from(self.active));
        out.next = Some(PieceSnapshot::from(self.next));
        out.score = self.score;
        out.level = self.level;
        out.drop_interval_ms = self.drop_interval_ms;
        out.game_over = self.game_over();
        out.game_id = self.game_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn arm_timer(&mut self) {
        self.drop_timer_ms = Some(self.drop_interval_ms);
    }

    fn spawn_random(&mut self) -> Piece {
        Piece::spawn(choose_random(&mut self.rng))
    }

    /// Move the active piece one column. Returns whether it moved.
    pub fn handle_move(&mut self, direction: Direction) -> bool {
        if self.game_over() {
            return false;
        }
        let dx = direction.dx();
        if self.board.is_blocked(&self.active, dx, 0) {
            return false;
        }
        self.active.translate(dx, 0);
        true
    }

    /// Rotate the active piece clockwise in place. Returns whether it rotated.
    pub fn handle_rotate(&mut self) -> bool {
        if self.game_over() {
            return false;
        }
        let candidate = self.active.with_shape(self.active.rotate());
        if self.board.is_blocked(&candidate, 0, 0) {
            return false;
        }
        self.active = candidate;
        true
    }

    /// One gravity step on demand.
    pub fn handle_soft_drop(&mut self) -> TickOutcome {
        self.tick()
    }

    /// Drop the active piece as far as it goes, then lock it with one tick.
    pub fn handle_hard_drop(&mut self) -> TickOutcome {
        if self.game_over() {
            return TickOutcome::Ignored;
        }
        let mut distance = 0u32;
        while !self.board.is_blocked(&self.active, 0, 1) {
            self.active.translate(0, 1);
            distance += 1;
        }
        debug!(kind = ?self.active.kind, distance, "hard drop");
        self.tick()
    }

    /// The gravity step: move down one row, or lock and bring in the next piece.
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over() {
            return TickOutcome::Ignored;
        }

        if !self.board.is_blocked(&self.active, 0, 1) {
            self.active.translate(0, 1);
            self.arm_timer();
            return TickOutcome::Moved;
        }

        self.lock_active()
    }

    /// Feed elapsed wall time to the drop timer.
    ///
    /// Fires at most one tick per call, when the armed countdown runs out.
    /// Time past the deadline is taken off the re-armed countdown, so a late
    /// frame does not slow gravity down. Returns `None` if no tick fired,
    /// including after game over.
    pub fn advance(&mut self, elapsed_ms: u32) -> Option<TickOutcome> {
        let remaining = self.drop_timer_ms?;
        if elapsed_ms < remaining {
            self.drop_timer_ms = Some(remaining - elapsed_ms);
            return None;
        }
        let overshoot = elapsed_ms - remaining;
        self.drop_timer_ms = None;
        let outcome = self.tick();
        if let Some(next) = self.drop_timer_ms.as_mut() {
            *next = next.saturating_sub(overshoot);
        }
        Some(outcome)
    }

    fn lock_active(&mut self) -> TickOutcome {
        if !self.board.merge(&self.active) {
            warn!(
                kind = ?self.active.kind,
                x = self.active.x,
                y = self.active.y,
                "locked piece overlaps the board; cells dropped"
            );
        }

        let lines_cleared = self.board.clear_full_rows().len() as u32;
        let result = apply_line_clear(self.score, self.level, self.drop_interval_ms, lines_cleared);
        self.score = result.score;
        self.level = result.level;
        self.drop_interval_ms = result.drop_interval_ms;

        debug!(
            kind = ?self.active.kind,
            x = self.active.x,
            y = self.active.y,
            lines_cleared,
            score = self.score,
            "piece locked"
        );
        if result.leveled_up() {
            info!(
                level = self.level,
                drop_interval_ms = self.drop_interval_ms,
                "level up"
            );
        }

        self.active = self.next;
        self.next = self.spawn_random();

        if self.board.is_blocked(&self.active, 0, 0) {
            self.phase = GamePhase::GameOver;
            self.drop_timer_ms = None;
            info!(score = self.score, level = self.level, "game over");
            return TickOutcome::GameOver;
        }

        self.arm_timer();
        TickOutcome::Locked {
            lines_cleared,
            level_up: result.leveled_up(),
        }
    }

    /// Start over with an empty board. The RNG keeps its sequence.
    pub fn restart(&mut self) {
        self.board.clear();
        self.active = self.spawn_random();
        self.next = self.spawn_random();
        self.score = 0;
        self.level = STARTING_LEVEL;
        self.drop_interval_ms = INITIAL_DROP_INTERVAL_MS;
        self.phase = GamePhase::Playing;
        self.game_id = self.game_id.wrapping_add(1);
        self.arm_timer();
        info!(game_id = self.game_id, "game restarted");
    }

    /// Apply an input action. Returns whether anything changed.
    ///
    /// After game over only `Restart` is accepted.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over() && action != GameAction::Restart {
            return false;
        }
        match action {
            GameAction::MoveLeft => self.handle_move(Direction::Left),
            GameAction::MoveRight => self.handle_move(Direction::Right),
            GameAction::SoftDrop => self.handle_soft_drop().changed(),
            GameAction::Rotate => self.handle_rotate(),
            GameAction::HardDrop => self.handle_hard_drop().changed(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
