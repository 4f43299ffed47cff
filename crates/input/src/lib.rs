//! Terminal input module.
//!
//! Maps `crossterm` key events into discrete [`crate::types::GameAction`]
//! commands. Each key press yields at most one command; terminal auto-repeat
//! is left to the caller.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
