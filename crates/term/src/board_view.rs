//! BoardView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: a header line (title and move counter), a blank
//! line, the framed 4x4 grid, a blank line and a key help line.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::GRID_SIZE;

const HEADER_ROWS: u16 = 2;
const FOOTER_ROWS: u16 = 2;

const HELP: &str = "arrows/drag: slide  r: restart  q: quit";

const FRAME_BG: Rgb = Rgb::new(128, 128, 128);
const EMPTY_BG: Rgb = Rgb::new(96, 96, 104);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Screen position of the grid frame for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

/// A terminal renderer for the 4x4 board.
pub struct BoardView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    /// Frame space between tiles (and around the outer edge).
    gap: u16,
    anchor_y: AnchorY,
}

impl Default for BoardView {
    fn default() -> Self {
        // 7x3 keeps tiles roughly square on typical terminal fonts and fits 6-digit values.
        Self {
            tile_w: 7,
            tile_h: 3,
            gap: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl BoardView {
    pub fn new(tile_w: u16, tile_h: u16, gap: u16) -> Self {
        Self {
            tile_w,
            tile_h,
            gap,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Where the grid frame lands inside `viewport`.
    pub fn frame_rect(&self, viewport: Viewport) -> FrameRect {
        let n = GRID_SIZE as u16;
        let w = n * self.tile_w + (n + 1) * self.gap;
        let h = n * self.tile_h + (n + 1) * self.gap;
        let total_h = HEADER_ROWS + h + FOOTER_ROWS;

        let x = viewport.width.saturating_sub(w) / 2;
        let top = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };
        FrameRect {
            x,
            y: top + HEADER_ROWS,
            w,
            h,
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let frame = self.frame_rect(viewport);
        self.draw_header(fb, snap, frame);

        fb.fill_rect(frame.x, frame.y, frame.w, frame.h, ' ', CellStyle::new(FRAME_BG, FRAME_BG));
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                self.draw_tile(fb, frame, snap, row, col);
            }
        }

        let help = CellStyle::new(Rgb::new(150, 150, 150), Rgb::BLACK).dim();
        fb.put_str_centered(frame.x, frame.y + frame.h + 1, frame.w, HELP, help);

        if snap.game_over {
            self.draw_game_over(fb, frame);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: FrameRect) {
        let y = frame.y.saturating_sub(HEADER_ROWS);
        let title = CellStyle::new(Rgb::WHITE, Rgb::new(230, 190, 0)).bold();
        fb.put_str(frame.x, y, " 2048 ", title);

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::BLACK).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
        // "MOVES " plus up to 10 digits, right-aligned to the frame edge.
        let digits = digit_count(snap.move_count);
        let right = frame.x + frame.w;
        let value_x = right.saturating_sub(digits);
        fb.put_str(value_x.saturating_sub(6), y, "MOVES", label);
        fb.put_u32(value_x, y, snap.move_count, value);
    }

    fn tile_origin(&self, frame: FrameRect, row: usize, col: usize) -> (u16, u16) {
        let x = frame.x + self.gap + col as u16 * (self.tile_w + self.gap);
        let y = frame.y + self.gap + row as u16 * (self.tile_h + self.gap);
        (x, y)
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, frame: FrameRect, snap: &GameSnapshot, row: usize, col: usize) {
        let (x, y) = self.tile_origin(frame, row, col);
        let Some(value) = snap.tile_at(row, col) else {
            fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', CellStyle::new(EMPTY_BG, EMPTY_BG));
            return;
        };

        let (bg, fg) = tile_colors(value);
        let mut style = CellStyle::new(fg, bg).bold();
        if snap.is_last_spawn(row, col) {
            style.bold = false;
            style.dim = true;
        }
        fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', style);

        let digits = digit_count(value);
        let tx = x + self.tile_w.saturating_sub(digits) / 2;
        fb.put_u32(tx, y + self.tile_h / 2, value, style);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, frame: FrameRect) {
        let style = CellStyle::new(Rgb::WHITE, Rgb::BLACK).bold();
        let mid_y = frame.y + frame.h / 2;
        let banner_w = frame.w.saturating_sub(4);
        let banner_x = frame.x + 2;
        fb.fill_rect(banner_x, mid_y - 1, banner_w, 3, ' ', style);
        fb.put_str_centered(banner_x, mid_y - 1, banner_w, "GAME OVER", style);
        fb.put_str_centered(banner_x, mid_y + 1, banner_w, "press r to restart", CellStyle { bold: false, ..style });
    }
}

/// Background and text color per tile value.
pub fn tile_colors(value: u32) -> (Rgb, Rgb) {
    let light_text = Rgb::WHITE;
    let dark_text = Rgb::new(40, 40, 40);
    match value {
        2 => (Rgb::new(230, 190, 0), light_text),     // yellow
        4 => (Rgb::new(245, 140, 0), light_text),     // orange
        8 => (Rgb::new(220, 50, 40), light_text),     // red
        16 => (Rgb::new(235, 100, 160), light_text),  // pink
        32 => (Rgb::new(150, 70, 190), light_text),   // purple
        64 => (Rgb::new(40, 100, 220), light_text),   // blue
        128 => (Rgb::new(40, 170, 70), light_text),   // green
        256 => (Rgb::new(0, 150, 150), light_text),   // teal
        512 => (Rgb::new(140, 90, 50), light_text),   // brown
        1024 => (Rgb::new(0, 190, 220), light_text),  // cyan
        2048 => (Rgb::new(250, 250, 250), dark_text), // white
        _ => (Rgb::new(10, 10, 10), light_text),
    }
}

fn digit_count(value: u32) -> u16 {
    value.checked_ilog10().map_or(1, |d| d as u16 + 1)
}
