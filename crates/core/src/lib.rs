//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board transition engine and game lifecycle.
//! It has **zero dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: every random draw goes through an injected RNG, so the
//!   same seed replays the same game
//! - **Testable**: boards can be built from plain values and inspected cell by cell
//! - **Portable**: runs behind the terminal front end or the headless autoplayer
//!
//! # Module Structure
//!
//! - [`line`]: compaction and single-pass merge of one travel-oriented line
//! - [`board`]: 4x4 grid, directional slides, random spawns, legal-move scan
//! - [`gesture`]: drag vector to cardinal direction classification
//! - [`game_state`]: board + move counter + game-over flag, in the order the rules require
//! - [`snapshot`]: plain-data copy of the state for presenters
//! - [`rng`]: seedable generator helpers and the 2/4 spawn draw
//!
//! # Game Rules
//!
//! - A slide compacts every line toward the travel edge, then merges equal
//!   neighbours pairwise from that edge; a tile merges at most once per slide
//! - If anything moved, one tile spawns in a uniformly chosen empty cell:
//!   a 2 with probability 9/10, a 4 with probability 1/10
//! - After every slide attempt the move counter increments if a legal move
//!   remains; otherwise the game is over
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{apply_move, classify_direction, has_legal_move, new_game, seeded_rng};
//! use tui_2048_core::types::Direction;
//!
//! let mut rng = seeded_rng(7);
//! let state = new_game(&mut rng);
//! assert_eq!(state.board().tile_count(), 2);
//!
//! let direction = classify_direction(-30.0, 4.0);
//! assert_eq!(direction, Direction::Left);
//!
//! let next = apply_move(&state, direction, &mut rng);
//! assert!(has_legal_move(next.board()));
//! assert_eq!(next.move_count(), 1);
//! ```

pub mod board;
pub mod game_state;
pub mod gesture;
pub mod line;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

use rand::Rng;

use crate::types::Direction;

// Re-export commonly used types for convenience
pub use board::{Board, Spawn};
pub use game_state::{GameState, MoveOutcome};
pub use gesture::classify_direction;
pub use line::{slide_line, Line};
pub use rng::{draw_spawn_tile, entropy_rng, seeded_rng, GameRng};
pub use snapshot::GameSnapshot;

/// Start a fresh game: empty board, two spawned tiles, zero moves.
pub fn new_game<R: Rng + ?Sized>(rng: &mut R) -> GameState {
    GameState::new(rng)
}

/// Apply one slide to `state` and return the resulting state.
///
/// `state` itself is left untouched; the only side effect is the draws taken
/// from `rng` for the spawn.
pub fn apply_move<R: Rng + ?Sized>(state: &GameState, direction: Direction, rng: &mut R) -> GameState {
    state.after_move(direction, rng).0
}

/// True if the board has an empty cell or two equal tiles side by side.
pub fn has_legal_move(board: &Board) -> bool {
    board.has_legal_move()
}
