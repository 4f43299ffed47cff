//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! Everything here is plain data, usable from the core engine, the terminal
//! renderer and the input mapping alike.
//!
//! # Board Dimensions
//!
//! The playfield is fixed:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: horizontally centered, `y = 0`
//!
//! # Timing and Scoring Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DROP_INTERVAL_MS` | 1000 | Automatic descent interval |
//! | `ROW_CLEAR_SCORE` | 10 | Points per cleared row |
//! | `DROP_CELL_SCORE` | 1 | Points per cell travelled by a hard drop |
//! | `DEFAULT_FPS` | 60 | Frame rate of the terminal runner |
//!
//! All of the timing/scoring values can be overridden through [`GameConfig`].
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameConfig, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Parse a piece identifier at the boundary
//! let piece: PieceKind = "t".parse().unwrap();
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.fill(), 1);
//!
//! // Unknown identifiers are rejected
//! assert!("x".parse::<PieceKind>().is_err());
//!
//! // Defaults
//! let config = GameConfig::default();
//! assert_eq!(config.drop_interval_ms, 1000);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Automatic descent interval (1000ms = 1 second per row)
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Points awarded per cleared row
pub const ROW_CLEAR_SCORE: u32 = 10;

/// Points awarded per cell travelled by a hard drop
pub const DROP_CELL_SCORE: u32 = 1;

/// Frame rate used by the terminal runner
pub const DEFAULT_FPS: u32 = 60;

/// Largest piece matrix edge (the I piece is 4x4)
pub const MAX_PIECE_SIZE: usize = 4;

/// A cell on the game board or inside a piece matrix
///
/// - `0`: Empty cell
/// - `1..=PieceKind::COUNT`: Occupied, value is the fill of the piece kind
pub type Cell = u8;

/// The empty cell value
pub const EMPTY: Cell = 0;

/// Error raised when a piece identifier is outside the fixed piece set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PieceError {
    #[error("invalid piece type: {0:?}")]
    InvalidPieceType(String),
}

/// The four piece kinds
///
/// Each kind has a fixed fill value which doubles as its palette index:
/// - **T** (1): purple
/// - **O** (2): yellow, 2x2 square
/// - **L** (3): orange
/// - **I** (4): cyan, 4-long bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    T,
    O,
    L,
    I,
}

impl PieceKind {
    /// Number of piece kinds
    pub const COUNT: usize = 4;

    /// Every kind, in fill-value order. The random spawn path draws from here.
    pub const ALL: [PieceKind; Self::COUNT] = [PieceKind::T, PieceKind::O, PieceKind::L, PieceKind::I];

    /// Fill value written into piece and board cells
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::T.fill(), 1);
    /// assert_eq!(PieceKind::I.fill(), 4);
    /// ```
    pub fn fill(&self) -> Cell {
        match self {
            PieceKind::T => 1,
            PieceKind::O => 2,
            PieceKind::L => 3,
            PieceKind::I => 4,
        }
    }

    /// Map a non-zero cell value back to its piece kind
    pub fn from_fill(cell: Cell) -> Option<Self> {
        PieceKind::try_from(cell).ok()
    }

    /// Single-letter identifier
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::T => 'T',
            PieceKind::O => 'O',
            PieceKind::L => 'L',
            PieceKind::I => 'I',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for PieceKind {
    type Error = PieceError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'T' => Ok(PieceKind::T),
            'O' => Ok(PieceKind::O),
            'L' => Ok(PieceKind::L),
            'I' => Ok(PieceKind::I),
            _ => Err(PieceError::InvalidPieceType(c.to_string())),
        }
    }
}

impl TryFrom<u8> for PieceKind {
    type Error = PieceError;

    fn try_from(fill: u8) -> Result<Self, Self::Error> {
        match fill {
            1 => Ok(PieceKind::T),
            2 => Ok(PieceKind::O),
            3 => Ok(PieceKind::L),
            4 => Ok(PieceKind::I),
            _ => Err(PieceError::InvalidPieceType(fill.to_string())),
        }
    }
}

impl FromStr for PieceKind {
    type Err = PieceError;

    /// Parse a single-letter identifier (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => PieceKind::try_from(c).map_err(|_| PieceError::InvalidPieceType(s.to_string())),
            _ => Err(PieceError::InvalidPieceType(s.to_string())),
        }
    }
}

/// Overall game status
///
/// `GameOver` is terminal except for a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Running,
    Paused,
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Running => "running",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "game_over",
        }
    }

    /// Whether movement, rotation, drops and automatic descent are live
    pub fn is_running(&self) -> bool {
        matches!(self, GameStatus::Running)
    }
}

/// Discrete commands delivered by the input collaborator
///
/// Commands are applied one at a time. While paused or after game over only
/// [`GameAction::TogglePause`] and [`GameAction::Restart`] have any effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell, merging it if it cannot descend
    SoftDrop,
    /// Instantly drop piece to its resting row
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Toggle pause state (ignored after game over)
    TogglePause,
    /// Restart the game from any state
    Restart,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::TogglePause => "togglePause",
            GameAction::Restart => "restart",
        }
    }

    /// Whether the action is honoured while paused or after game over
    pub fn always_active(&self) -> bool {
        matches!(self, GameAction::TogglePause | GameAction::Restart)
    }
}

/// Error raised when a configuration document cannot be parsed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("drop_interval_ms must be greater than zero")]
    ZeroDropInterval,
}

/// Tunable game parameters
///
/// Every field is optional in the serialized form and falls back to the
/// crate-level constant. Board dimensions are not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Automatic descent interval in milliseconds
    pub drop_interval_ms: u32,
    /// Points per cleared row
    pub row_clear_score: u32,
    /// Points per cell travelled by a hard drop
    pub drop_cell_score: u32,
    /// RNG seed; `None` lets the runner pick one
    pub seed: Option<u32>,
}

impl GameConfig {
    /// Parse a JSON document
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameConfig;
    ///
    /// let config = GameConfig::from_json_str(r#"{ "drop_interval_ms": 500 }"#).unwrap();
    /// assert_eq!(config.drop_interval_ms, 500);
    /// assert_eq!(config.row_clear_score, 10);
    /// ```
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(s)?;
        if config.drop_interval_ms == 0 {
            return Err(ConfigError::ZeroDropInterval);
        }
        Ok(config)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            drop_interval_ms: DROP_INTERVAL_MS,
            row_clear_score: ROW_CLEAR_SCORE,
            drop_cell_score: DROP_CELL_SCORE,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = GameConfig::default();
        assert_eq!(config.drop_interval_ms, 1000);
        assert_eq!(config.row_clear_score, 10);
        assert_eq!(config.drop_cell_score, 1);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn fill_values_are_distinct_and_round_trip() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.fill() as usize, i + 1);
            assert_eq!(PieceKind::from_fill(kind.fill()), Some(*kind));
        }
        assert_eq!(PieceKind::from_fill(0), None);
        assert_eq!(PieceKind::from_fill(5), None);
    }

    #[test]
    fn parse_rejects_unknown_identifiers() {
        assert_eq!("o".parse::<PieceKind>(), Ok(PieceKind::O));
        assert_eq!("L".parse::<PieceKind>(), Ok(PieceKind::L));
        assert_eq!(
            "S".parse::<PieceKind>(),
            Err(PieceError::InvalidPieceType("S".to_string()))
        );
        assert!("TT".parse::<PieceKind>().is_err());
        assert!("".parse::<PieceKind>().is_err());
        assert!(PieceKind::try_from(9u8).is_err());
    }

    #[test]
    fn config_rejects_unknown_fields_and_zero_interval() {
        assert!(matches!(
            GameConfig::from_json_str(r#"{ "board_width": 12 }"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GameConfig::from_json_str(r#"{ "drop_interval_ms": 0 }"#),
            Err(ConfigError::ZeroDropInterval)
        ));
    }

    #[test]
    fn config_partial_document_keeps_defaults() {
        let config = GameConfig::from_json_str(r#"{ "seed": 7, "row_clear_score": 100 }"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.row_clear_score, 100);
        assert_eq!(config.drop_interval_ms, DROP_INTERVAL_MS);
        assert_eq!(config.drop_cell_score, DROP_CELL_SCORE);
    }

    #[test]
    fn only_pause_and_restart_are_always_active() {
        assert!(GameAction::TogglePause.always_active());
        assert!(GameAction::Restart.always_active());
        assert!(!GameAction::HardDrop.always_active());
        assert!(!GameAction::RotateCw.always_active());
    }
}
