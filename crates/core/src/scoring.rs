//! Scoring module
//!
//! Two sources of points: cleared rows (a flat amount per row, no level or
//! combo multipliers) and hard-drop travel (a flat amount per cell fallen).
//! All arithmetic saturates.

use crate::types::GameConfig;

/// Points for clearing `rows` rows in one sweep
pub fn line_clear_score(rows: usize, config: &GameConfig) -> u32 {
    (rows as u32).saturating_mul(config.row_clear_score)
}

/// Points for a hard drop that travelled `distance` cells
pub fn drop_score(distance: u32, config: &GameConfig) -> u32 {
    distance.saturating_mul(config.drop_cell_score)
}
