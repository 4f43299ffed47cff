//! Terminal rendering for the game.
//!
//! Renders into a simple framebuffer that is then flushed to a crossterm
//! backend. The view only reads [`core::GameSnapshot`] values, so the core
//! stays free of any terminal concerns.
//!
//! - `fb`: styled character framebuffer
//! - `game_view`: snapshot → framebuffer (pure)
//! - `renderer`: framebuffer → terminal, diffing against the previous frame

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, AnchorY, GameView, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
