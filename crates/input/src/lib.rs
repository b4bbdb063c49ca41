//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and decides which
//! event kinds count, so the host loop only forwards what it gets back.

pub mod map;

pub use tui_shooter_types as types;

pub use map::{action_for_event, handle_key_event, should_quit};
