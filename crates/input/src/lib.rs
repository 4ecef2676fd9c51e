//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any rendering code. It maps
//! `crossterm` key events and mouse drags into [`crate::types::GameAction`]s.
//! Mouse drags are classified with [`tui_2048_core::classify_direction`], the
//! same rule a touch front end would use.

pub mod map;
pub mod swipe;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
pub use swipe::SwipeTracker;
