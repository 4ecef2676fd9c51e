//! Line module - compaction and merge of a single row or column
//!
//! A line is handed over already oriented so that travel is toward index 0.
//! The board takes care of reading rows/columns in the right order and
//! writing the result back.

use arrayvec::ArrayVec;

use crate::types::{Cell, Tile, GRID_SIZE};

/// One row or column, ordered in the direction of travel
pub type Line = [Cell; GRID_SIZE];

/// Slide a travel-oriented line toward index 0.
///
/// 1. Empty cells are dropped, keeping the order of the remaining tiles.
/// 2. Scanning from index 0, two equal neighbours become one tile of double
///    value and the scan continues *after* the pair, so a tile merges at most
///    once: `[2, 2, 2, _]` becomes `[4, 2, _, _]`.
/// 3. The result is padded with empties on the trailing end.
///
/// # Examples
///
/// ```
/// use tui_2048_core::slide_line;
/// use tui_2048_core::types::Tile;
///
/// let two = Some(Tile::TWO);
/// let four = Some(Tile::FOUR);
/// assert_eq!(slide_line([None, two, None, two]), [four, None, None, None]);
/// assert_eq!(slide_line([two, two, two, two]), [four, four, None, None]);
/// ```
pub fn slide_line(line: Line) -> Line {
    let compacted: ArrayVec<Tile, GRID_SIZE> = line.iter().flatten().copied().collect();

    let mut out: Line = [None; GRID_SIZE];
    let mut write = 0;
    let mut i = 0;
    while i < compacted.len() {
        let tile = compacted[i];
        match compacted.get(i + 1) {
            Some(&next) if next == tile => {
                out[write] = Some(tile.merged());
                i += 2;
            }
            _ => {
                out[write] = Some(tile);
                i += 1;
            }
        }
        write += 1;
    }
    out
}
