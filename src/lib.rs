//! Terminal 2048 (workspace facade crate).
//!
//! This package exposes `tui_2048::{core,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`. It also hosts
//! the configuration and logging setup shared by the binaries.

pub mod config;
pub mod logging;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
