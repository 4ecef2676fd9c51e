//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a plain framebuffer that is then flushed to the terminal,
//! so everything up to the final flush is pure and testable.
//!
//! Goals:
//! - Keep `core` deterministic and free of presentation concerns
//! - Render only from a `GameSnapshot`; animation, if any, lives here
//! - Tiles are wide enough to hold any value a 4x4 board can reach

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use board_view::{tile_colors, AnchorY, BoardView, FrameRect, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_frame_into, TerminalRenderer};
