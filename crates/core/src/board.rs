//! Board module - manages the game grid
//!
//! The board is a fixed 4x4 grid where each cell is empty or holds one tile.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) where row ranges 0..3 (top to bottom), col ranges 0..3 (left to right)

use std::fmt;

use arrayvec::ArrayVec;
use rand::Rng;

use crate::line::{slide_line, Line};
use crate::rng::draw_spawn_tile;
use crate::types::{Cell, Direction, Tile, TileError, CELL_COUNT, GRID_SIZE};

/// A tile placed by [`Board::spawn_random_tile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub tile: Tile,
}

/// The game board - 4 rows x 4 columns using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * GRID_SIZE + col)
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Build a board from plain values, row by row; 0 marks an empty cell.
    ///
    /// Any other value must be a valid tile, otherwise the whole board is
    /// rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::Board;
    ///
    /// let board = Board::from_values([
    ///     [2, 2, 0, 0],
    ///     [0, 0, 0, 0],
    ///     [0, 0, 0, 0],
    ///     [0, 0, 0, 4],
    /// ])
    /// .unwrap();
    /// assert_eq!(board.tile_count(), 3);
    ///
    /// assert!(Board::from_values([[3, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_err());
    /// ```
    pub fn from_values(rows: [[u32; GRID_SIZE]; GRID_SIZE]) -> Result<Self, TileError> {
        let mut board = Self::new();
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value != 0 {
                    board.cells[Self::flat(row, col)] = Some(Tile::new(value)?);
                }
            }
        }
        Ok(board)
    }

    /// Plain values, row by row; 0 marks an empty cell
    pub fn to_values(&self) -> [[u32; GRID_SIZE]; GRID_SIZE] {
        let mut rows = [[0; GRID_SIZE]; GRID_SIZE];
        for (row, values) in rows.iter_mut().enumerate() {
            for (col, value) in values.iter_mut().enumerate() {
                *value = self.cells[Self::flat(row, col)].map_or(0, Tile::value);
            }
        }
        rows
    }

    #[inline(always)]
    fn flat(row: usize, col: usize) -> usize {
        row * GRID_SIZE + col
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Some(Self::flat(row, col))
    }

    /// Get cell at position (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at position (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(GRID_SIZE)
    }

    /// Coordinates of every empty cell, in row-major order
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), CELL_COUNT> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(idx, _)| (idx / GRID_SIZE, idx % GRID_SIZE))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    pub fn tile_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    pub fn max_tile(&self) -> Option<Tile> {
        self.cells.iter().flatten().copied().max()
    }

    /// Board coordinates of position `pos` along line `index`, where position 0
    /// is the edge the tiles travel toward.
    #[inline(always)]
    fn line_coords(direction: Direction, index: usize, pos: usize) -> (usize, usize) {
        let back = GRID_SIZE - 1 - pos;
        match direction {
            Direction::Left => (index, pos),
            Direction::Right => (index, back),
            Direction::Up => (pos, index),
            Direction::Down => (back, index),
        }
    }

    /// Read row or column `index` oriented so travel in `direction` is toward index 0.
    ///
    /// Left/Right read rows, Up/Down read columns; Right and Down read back to front.
    pub fn line(&self, direction: Direction, index: usize) -> Line {
        let mut line: Line = [None; GRID_SIZE];
        for (pos, cell) in line.iter_mut().enumerate() {
            let (row, col) = Self::line_coords(direction, index, pos);
            *cell = self.cells[Self::flat(row, col)];
        }
        line
    }

    /// Write a travel-oriented line back; the inverse of [`Board::line`].
    pub fn set_line(&mut self, direction: Direction, index: usize, line: Line) {
        for (pos, cell) in line.into_iter().enumerate() {
            let (row, col) = Self::line_coords(direction, index, pos);
            self.cells[Self::flat(row, col)] = cell;
        }
    }

    /// Slide every line in `direction` and return whether any cell changed.
    ///
    /// All four lines are recomputed from the pre-slide board and written back
    /// before this returns; there is no observable half-slid state.
    pub fn slide(&mut self, direction: Direction) -> bool {
        let mut changed = false;
        for index in 0..GRID_SIZE {
            let before = self.line(direction, index);
            let after = slide_line(before);
            if after != before {
                changed = true;
                self.set_line(direction, index, after);
            }
        }
        changed
    }

    /// Place a 2 (9/10) or a 4 (1/10) in a uniformly chosen empty cell.
    ///
    /// Returns `None` without drawing from `rng` when the board is full.
    pub fn spawn_random_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Spawn> {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return None;
        }

        let (row, col) = empty[rng.gen_range(0..empty.len())];
        let tile = draw_spawn_tile(rng);
        self.cells[Self::flat(row, col)] = Some(tile);
        Some(Spawn { row, col, tile })
    }

    /// True if any slide could still change the board.
    ///
    /// That is the case when a cell is empty or when a cell equals its right or
    /// lower neighbour. Scans the whole grid on every call.
    pub fn has_legal_move(&self) -> bool {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let Some(tile) = self.cells[Self::flat(row, col)] else {
                    return true;
                };
                if col + 1 < GRID_SIZE && self.cells[Self::flat(row, col + 1)] == Some(tile) {
                    return true;
                }
                if row + 1 < GRID_SIZE && self.cells[Self::flat(row + 1, col)] == Some(tile) {
                    return true;
                }
            }
        }
        false
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [None; CELL_COUNT];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact text form, one row per line, `.` for empty cells
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some(tile) => write!(f, "{:>5}", tile.value())?,
                    None => write!(f, "{:>5}", ".")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded_rng;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(0, 3), Some(3));
        assert_eq!(Board::index(1, 0), Some(4));
        assert_eq!(Board::index(3, 3), Some(15));
        assert_eq!(Board::index(4, 0), None);
        assert_eq!(Board::index(0, 4), None);
    }

    #[test]
    fn test_line_orientation() {
        let board = Board::from_values([
            [1 << 1, 1 << 2, 1 << 3, 1 << 4],
            [1 << 5, 1 << 6, 1 << 7, 1 << 8],
            [1 << 9, 1 << 10, 1 << 11, 1 << 12],
            [1 << 13, 1 << 14, 1 << 15, 1 << 16],
        ])
        .unwrap();
        let values = |line: Line| line.map(|c| c.map_or(0, Tile::value));

        assert_eq!(values(board.line(Direction::Left, 0)), [2, 4, 8, 16]);
        assert_eq!(values(board.line(Direction::Right, 0)), [16, 8, 4, 2]);
        assert_eq!(values(board.line(Direction::Up, 0)), [2, 32, 512, 8192]);
        assert_eq!(values(board.line(Direction::Down, 0)), [8192, 512, 32, 2]);
    }

    #[test]
    fn test_set_line_inverts_line() {
        let mut board = Board::new();
        let line: Line = [Some(Tile::FOUR), None, Some(Tile::TWO), None];
        for direction in Direction::ALL {
            board.clear();
            board.set_line(direction, 2, line);
            assert_eq!(board.line(direction, 2), line, "{direction:?}");
        }
    }

    #[test]
    fn test_slide_right_and_down_pack_toward_far_edge() {
        let mut board = Board::from_values([
            [2, 2, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ])
        .unwrap();
        assert!(board.slide(Direction::Right));
        assert_eq!(board.to_values()[0], [0, 0, 0, 4]);

        assert!(board.slide(Direction::Down));
        assert_eq!(board.to_values()[3], [0, 0, 0, 4]);
        assert_eq!(board.tile_count(), 1);
    }

    #[test]
    fn test_slide_without_change_reports_false() {
        let mut board = Board::from_values([
            [2, 4, 0, 0],
            [8, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ])
        .unwrap();
        let before = board;
        assert!(!board.slide(Direction::Left));
        assert_eq!(board, before);
        assert!(board.slide(Direction::Right));
    }

    #[test]
    fn test_spawn_fills_only_empty_cells() {
        let mut rng = seeded_rng(3);
        let mut board = Board::new();
        for filled in 1..=CELL_COUNT {
            let spawn = board.spawn_random_tile(&mut rng).unwrap();
            assert!(spawn.tile == Tile::TWO || spawn.tile == Tile::FOUR);
            assert_eq!(board.get(spawn.row, spawn.col), Some(Some(spawn.tile)));
            assert_eq!(board.tile_count(), filled);
        }
        assert!(board.is_full());
        assert_eq!(board.spawn_random_tile(&mut rng), None);
    }

    #[test]
    fn test_has_legal_move_checks_both_axes() {
        let horizontal = Board::from_values([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 8, 8],
            [4, 2, 4, 2],
        ])
        .unwrap();
        assert!(horizontal.has_legal_move());

        let vertical = Board::from_values([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 16],
            [4, 2, 4, 16],
        ])
        .unwrap();
        assert!(vertical.has_legal_move());

        let stuck = Board::from_values([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ])
        .unwrap();
        assert!(!stuck.has_legal_move());
    }

    #[test]
    fn test_display_marks_empty_cells() {
        let board = Board::from_values([[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 2048]]).unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].split_whitespace().collect::<Vec<_>>(), ["2", ".", ".", "."]);
        assert!(lines[3].ends_with("2048"));
    }
}
