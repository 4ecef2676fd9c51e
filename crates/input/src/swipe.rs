//! Mouse swipe tracking.
//!
//! A swipe is a left-button press followed by a release. The displacement
//! between the two is classified into a slide direction.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tui_2048_core::classify_direction;

use crate::types::GameAction;

/// Terminal rows are roughly twice as tall as columns are wide.
pub const DEFAULT_ROW_SCALE: f64 = 2.0;

/// Turns press/release pairs into [`GameAction::Slide`] actions.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    origin: Option<(u16, u16)>,
    /// Releases closer than this to the press (in column widths) are ignored.
    dead_zone: f64,
    row_scale: f64,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self {
            origin: None,
            dead_zone: 0.0,
            row_scale: DEFAULT_ROW_SCALE,
        }
    }

    /// Ignore releases whose displacement is shorter than `cells` column widths.
    ///
    /// The default of 0 keeps every release, so a click without movement
    /// classifies as Up.
    pub fn with_dead_zone(mut self, cells: f64) -> Self {
        self.dead_zone = cells.max(0.0);
        self
    }

    pub fn with_row_scale(mut self, scale: f64) -> Self {
        self.row_scale = scale;
        self
    }

    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }

    /// Forget a press in progress (e.g. on focus loss or resize).
    pub fn cancel(&mut self) {
        self.origin = None;
    }

    pub fn handle_mouse_event(&mut self, event: MouseEvent) -> Option<GameAction> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.origin = Some((event.column, event.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (x0, y0) = self.origin.take()?;
                let dx = f64::from(event.column) - f64::from(x0);
                let dy = (f64::from(event.row) - f64::from(y0)) * self.row_scale;
                if dx.hypot(dy) < self.dead_zone {
                    return None;
                }
                Some(GameAction::Slide(classify_direction(dx, dy)))
            }
            _ => None,
        }
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}
