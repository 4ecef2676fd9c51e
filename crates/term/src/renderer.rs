//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Only cells that differ from the previously presented frame are written;
//! a size change or [`TerminalRenderer::invalidate`] forces a full redraw.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Last frame written to the terminal, `None` until the first draw.
    shown: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor and mouse reporting.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(EnableMouseCapture)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(DisableMouseCapture)?;
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode().context("disable raw mode")?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Present `fb`, writing only what changed since the last call.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(self.shown.as_ref(), fb, &mut self.buf)?;
        self.flush_buf()?;

        match self.shown.as_mut() {
            Some(shown) => shown.clone_from(fb),
            None => self.shown = Some(fb.clone()),
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf).context("write to terminal")?;
        self.stdout.flush().context("flush terminal")?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode the commands that turn `prev` into `next` on screen.
///
/// Without a previous frame of the same size, the whole screen is cleared
/// and every cell is written.
pub fn encode_frame_into(prev: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut style: Option<CellStyle> = None;
    for y in 0..next.height() {
        let Some(row) = next.row(y) else { break };
        let old = prev.and_then(|p| p.row(y));
        for (x, run) in dirty_runs(old, row) {
            out.queue(cursor::MoveTo(x, y))?;
            for cell in run {
                if style != Some(cell.style) {
                    queue_style(out, cell.style)?;
                    style = Some(cell.style);
                }
                out.queue(Print(cell.ch))?;
            }
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Maximal runs of cells in `row` that differ from `old` (all of `row` if `old` is missing).
fn dirty_runs<'a>(old: Option<&[Cell]>, row: &'a [Cell]) -> Vec<(u16, &'a [Cell])> {
    let Some(old) = old else {
        return vec![(0, row)];
    };

    let mut runs = Vec::new();
    let mut start: Option<usize> = None;
    for (x, (a, b)) in old.iter().zip(row).enumerate() {
        match (a == b, start) {
            (false, None) => start = Some(x),
            (true, Some(s)) => {
                runs.push((s as u16, &row[s..x]));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push((s as u16, &row[s..]));
    }
    runs
}

fn queue_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
