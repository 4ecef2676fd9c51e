use arrayvec::ArrayVec;

use crate::types::{CELL_COUNT, GRID_SIZE};

/// Plain-data view of a [`GameState`](crate::GameState) for presenters.
///
/// Cells hold raw tile values with 0 for empty. Presenters that animate
/// transitions diff two snapshots with [`GameSnapshot::changed_cells`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub values: [[u32; GRID_SIZE]; GRID_SIZE],
    pub move_count: u32,
    pub game_over: bool,
    pub max_tile: u32,
    pub episode_id: u32,
    pub last_spawn: Option<(u8, u8)>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }

    pub fn tile_at(&self, row: usize, col: usize) -> Option<u32> {
        self.values
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .filter(|&v| v != 0)
    }

    pub fn is_last_spawn(&self, row: usize, col: usize) -> bool {
        self.last_spawn == Some((row as u8, col as u8))
    }

    /// Cells whose value differs between `self` and `other`, row-major
    pub fn changed_cells(&self, other: &GameSnapshot) -> ArrayVec<(usize, usize), CELL_COUNT> {
        let mut out = ArrayVec::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if self.values[row][col] != other.values[row][col] {
                    out.push((row, col));
                }
            }
        }
        out
    }
}
