//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on terminals, input devices or wall-clock time:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Every rule is exercised by unit tests
//! - **Portable**: The embedding application decides how frames are scheduled
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of cell values with the row sweep
//! - [`pieces`]: Piece shape matrices and the piece factory
//! - [`collision`]: Placement checks against walls, floor and settled cells
//! - [`rotation`]: In-place matrix rotation with horizontal correction
//! - [`player`]: The active piece, sideways moves and merging
//! - [`game_state`]: The session: drop clock, scoring and Running/Paused/GameOver
//! - [`rng`]: Uniform random piece selection
//! - [`scoring`]: Row-clear and hard-drop points
//! - [`snapshot`]: Copyable per-frame view for renderers
//!
//! # Game Rules
//!
//! - **Pieces**: T, O, L and I, drawn uniformly at random, spawned at the top center
//! - **Rotation**: transpose + reverse, corrected by sideways probes `+1, -2, +3, -4, ...`
//! - **Gravity**: one row per drop interval (1000ms by default)
//! - **Scoring**: 10 points per cleared row, 1 point per row of hard-drop travel
//! - **Game over**: the freshly spawned piece collides
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_core::types::{GameAction, GameStatus};
//!
//! let mut game = GameState::with_seed(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! // A hard drop from the top of an empty board always travels.
//! assert!(game.score() > 0);
//! assert_eq!(game.status(), GameStatus::Running);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with a
//! monotonic timestamp in milliseconds. The first tick only records the
//! timestamp; afterwards the elapsed time accumulates until it exceeds the
//! drop interval, which triggers a soft drop.

pub mod board;
pub mod collision;
pub mod game_state;
pub mod pieces;
pub mod player;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::{collides, collides_at};
pub use game_state::GameState;
pub use pieces::{create_piece, create_piece_from_id, Shape};
pub use player::{merge, Player};
pub use rng::{PieceRandomizer, SimpleRng};
pub use rotation::{rotate, rotate_with_correction};
pub use scoring::{drop_score, line_clear_score};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use types::PieceError;
