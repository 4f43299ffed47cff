//! Game state module - the game session
//!
//! Ties together the board, the active player, the piece randomizer and the
//! scoring rules. It owns the drop clock and the Running/Paused/GameOver
//! state machine, and is driven from outside through [`GameState::tick`] and
//! [`GameState::apply_action`]. There is no global state: every session is
//! an ordinary value owned by the caller.

use log::{debug, info};

use crate::board::Board;
use crate::collision::collides;
use crate::pieces::create_piece;
use crate::player::{merge, Player};
use crate::rng::PieceRandomizer;
use crate::rotation::rotate_with_correction;
use crate::scoring::{drop_score, line_clear_score};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, GameConfig, GameStatus, PieceKind};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    player: Player,
    pieces: PieceRandomizer,
    config: GameConfig,
    status: GameStatus,
    /// Time accumulated since the last automatic descent
    drop_counter_ms: u32,
    /// Timestamp of the previous tick; `None` until the first tick
    last_tick_ms: Option<u64>,
    /// Score value not yet delivered to the score display
    score_event: Option<u32>,
}

impl GameState {
    /// Create a new session and spawn the first piece
    pub fn new(config: GameConfig) -> Self {
        let seed = config.seed.unwrap_or(1);
        let mut pieces = PieceRandomizer::new(seed);
        let board = Board::new();

        let shape = create_piece(pieces.draw());
        let x = Player::spawn_x(board.width(), shape.width());
        let player = Player::new(shape, x, 0);

        let mut state = Self {
            board,
            player,
            pieces,
            config,
            status: GameStatus::Running,
            drop_counter_ms: 0,
            last_tick_ms: None,
            score_event: Some(0),
        };
        state.check_spawn();
        state
    }

    /// Create a session with default tuning and the given seed
    pub fn with_seed(seed: u32) -> Self {
        Self::new(GameConfig {
            seed: Some(seed),
            ..GameConfig::default()
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn score(&self) -> u32 {
        self.player.score
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scripted setups (tests, demos).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    pub fn seed(&self) -> u32 {
        self.pieces.seed()
    }

    /// Take the latest score if it changed since the last call
    ///
    /// The score display only needs refreshing when this returns `Some`.
    pub fn take_score_event(&mut self) -> Option<u32> {
        self.score_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = Some(ActiveSnapshot::from(&self.player));
        out.ghost_y = match self.status {
            GameStatus::GameOver => None,
            _ => Some(self.player.ghost_y(&self.board)),
        };
        out.status = self.status;
        out.score = self.player.score;
        out.seed = self.pieces.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Spawn a random piece at the top center
    ///
    /// Returns false (and ends the game) if the spawn position is blocked.
    pub fn reset(&mut self) -> bool {
        let kind = self.pieces.draw();
        self.spawn_piece_of(kind)
    }

    /// Spawn a specific piece kind at the top center
    ///
    /// Same as [`GameState::reset`] with the random draw replaced; used for
    /// scripted setups and tests.
    pub fn spawn_piece_of(&mut self, kind: PieceKind) -> bool {
        self.player.place_at_spawn(create_piece(kind), &self.board);
        self.check_spawn()
    }

    fn check_spawn(&mut self) -> bool {
        if collides(&self.board, &self.player) {
            info!(
                "spawn of {} blocked at x={}, game over with score {}",
                self.player.shape.kind(),
                self.player.x,
                self.player.score
            );
            self.status = GameStatus::GameOver;
            return false;
        }
        debug!("spawned {} at x={}", self.player.shape.kind(), self.player.x);
        true
    }

    /// Move the active piece sideways by `delta` columns
    pub fn move_horizontal(&mut self, delta: i8) -> bool {
        if !self.status.is_running() {
            return false;
        }
        self.player.move_horizontal(&self.board, delta)
    }

    /// Rotate the active piece with horizontal correction
    pub fn rotate(&mut self, direction: i8) -> bool {
        if !self.status.is_running() {
            return false;
        }
        rotate_with_correction(&self.board, &mut self.player, direction)
    }

    /// Drop the active piece one row.
    ///
    /// Returns true if the piece moved. If it could not, it is merged into the
    /// board, full rows are swept and scored, and the next piece spawns.
    /// Either way the drop clock restarts.
    pub fn soft_drop(&mut self) -> bool {
        if !self.status.is_running() {
            return false;
        }

        self.drop_counter_ms = 0;
        self.player.y += 1;
        if !collides(&self.board, &self.player) {
            return true;
        }

        self.player.y -= 1;
        self.lock_piece(0);
        false
    }

    /// Drop the active piece straight to its resting row and merge it.
    ///
    /// Returns the number of rows travelled.
    pub fn hard_drop(&mut self) -> u32 {
        if !self.status.is_running() {
            return 0;
        }

        let distance = self.player.drop_distance(&self.board);
        self.player.y += distance;
        self.lock_piece(distance as u32);
        self.drop_counter_ms = 0;
        distance as u32
    }

    /// Merge the active piece, sweep, score and spawn the next piece
    fn lock_piece(&mut self, drop_distance: u32) {
        merge(&mut self.board, &self.player);

        let before = self.player.score;
        let mut gained = drop_score(drop_distance, &self.config);

        let rows = self.board.sweep();
        if rows > 0 {
            gained = gained.saturating_add(line_clear_score(rows, &self.config));
            info!("cleared {} row(s)", rows);
        }

        self.player.score = before.saturating_add(gained);
        if self.player.score != before {
            self.score_event = Some(self.player.score);
        }

        self.reset();
    }

    /// Toggle between Running and Paused. Ignored after game over.
    pub fn toggle_pause(&mut self) -> bool {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            GameStatus::GameOver => return false,
        };
        debug!("status -> {}", self.status.as_str());
        true
    }

    /// Clear the board and score and start over with a fresh piece
    pub fn restart(&mut self) {
        info!("restart (previous score {})", self.player.score);
        self.board.clear();
        self.player.score = 0;
        self.score_event = Some(0);
        self.status = GameStatus::Running;
        self.drop_counter_ms = 0;
        self.last_tick_ms = None;
        self.reset();
    }

    /// Advance the drop clock to `now_ms` (a monotonic timestamp).
    ///
    /// The first tick after construction or restart only records the
    /// timestamp. While not running the timestamp is still recorded, so paused
    /// time never counts towards a drop. Returns true if an automatic drop
    /// happened.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let delta = match self.last_tick_ms {
            Some(prev) => now_ms.saturating_sub(prev),
            None => 0,
        };
        self.last_tick_ms = Some(now_ms);

        if !self.status.is_running() {
            return false;
        }

        let delta = u32::try_from(delta).unwrap_or(u32::MAX);
        self.drop_counter_ms = self.drop_counter_ms.saturating_add(delta);
        if self.drop_counter_ms > self.config.drop_interval_ms {
            self.soft_drop();
            return true;
        }

        false
    }

    /// Apply a game action
    ///
    /// Movement, rotation and drops are ignored unless the game is running.
    /// Returns whether the action changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if !action.always_active() && !self.status.is_running() {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.move_horizontal(-1),
            GameAction::MoveRight => self.move_horizontal(1),
            GameAction::SoftDrop => {
                self.soft_drop();
                true
            }
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
            GameAction::RotateCw => self.rotate(1),
            GameAction::RotateCcw => self.rotate(-1),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
