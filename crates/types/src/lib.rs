//! Core types module - shared value types and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain values with no I/O, making them usable in any context
//! (board engine, terminal rendering, input mapping, headless simulation).
//!
//! # Grid
//!
//! The playfield is a fixed 4x4 grid addressed as `(row, col)`:
//!
//! - **Rows**: 0 (top) to 3 (bottom)
//! - **Columns**: 0 (left) to 3 (right)
//!
//! # Spawning
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_TILES` | 2 | Tiles placed on a fresh board |
//! | `SPAWN_DRAW_MAX` | 10 | Upper bound of the uniform draw `1..=10` |
//! | `SPAWN_FOUR_DRAW` | 1 | The single draw that yields a 4 instead of a 2 |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, Tile, GRID_SIZE};
//!
//! let tile = Tile::new(8).unwrap();
//! assert_eq!(tile.merged().value(), 16);
//! assert!(Tile::new(6).is_err());
//!
//! let action = GameAction::Slide(Direction::Left);
//! assert_ne!(action, GameAction::Restart);
//! assert_eq!(GRID_SIZE, 4);
//! ```

use std::fmt;

use thiserror::Error;

/// Side length of the square grid
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Number of tiles spawned when a game starts or restarts
pub const INITIAL_TILES: usize = 2;

/// Spawn values are decided by a uniform draw in `1..=SPAWN_DRAW_MAX`
pub const SPAWN_DRAW_MAX: u32 = 10;

/// The draw that produces a 4 (probability 1/10); every other draw produces a 2
pub const SPAWN_FOUR_DRAW: u32 = 1;

/// Rejected tile values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TileError {
    #[error("tile value {0} is below the minimum of 2")]
    TooSmall(u32),
    #[error("tile value {0} is not a power of two")]
    NotPowerOfTwo(u32),
    #[error("tile value {0} is above the maximum of 131072")]
    TooLarge(u32),
}

/// A single tile: a power of two that is at least 2.
///
/// Tiles are immutable values. Two tiles are equal iff their values are
/// equal; a merge produces a new tile through [`Tile::merged`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile(u32);

impl Tile {
    pub const TWO: Tile = Tile(2);
    pub const FOUR: Tile = Tile(4);
    /// Largest value accepted by [`Tile::new`], the highest tile normal play can reach.
    pub const MAX: Tile = Tile(1 << 17);

    /// Validate and wrap a tile value.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Tile, TileError};
    ///
    /// assert_eq!(Tile::new(2), Ok(Tile::TWO));
    /// assert_eq!(Tile::new(1), Err(TileError::TooSmall(1)));
    /// assert_eq!(Tile::new(12), Err(TileError::NotPowerOfTwo(12)));
    /// assert_eq!(Tile::new(1 << 18), Err(TileError::TooLarge(1 << 18)));
    /// ```
    pub fn new(value: u32) -> Result<Self, TileError> {
        if value < 2 {
            return Err(TileError::TooSmall(value));
        }
        if !value.is_power_of_two() {
            return Err(TileError::NotPowerOfTwo(value));
        }
        if value > Self::MAX.0 {
            return Err(TileError::TooLarge(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Base-2 logarithm of the value (2 => 1, 4 => 2, 2048 => 11)
    pub fn rank(self) -> u32 {
        self.0.trailing_zeros()
    }

    /// The tile produced by merging two tiles of this value.
    ///
    /// Constructed tiles are at most [`Tile::MAX`]; getting from there to
    /// 2^31 on a 16-cell board takes more than 2^30 spawns, so doubling
    /// does not overflow.
    pub fn merged(self) -> Self {
        Self(self.0 * 2)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(Tile)`: Cell holding exactly one tile
pub type Cell = Option<Tile>;

/// Cardinal slide directions
///
/// Screen coordinates: Up moves tiles toward row 0, Left toward column 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// These actions are produced by keyboard input, mouse swipes and the
/// headless autoplayer alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every tile in the given direction
    Slide(Direction),
    /// Throw the board away and start over with two fresh tiles
    Restart,
}
