//! Gesture module - turns a drag displacement into a slide direction

use crate::types::Direction;

/// Classify a drag displacement `(dx, dy)` into a cardinal direction.
///
/// Screen convention: `dx > 0` points right, `dy > 0` points down.
/// The horizontal axis wins only when it is strictly longer; otherwise the
/// vertical axis decides, and anything that is not strictly downward is Up.
/// There is no dead zone, so `(0, 0)` resolves to Up.
///
/// # Examples
///
/// ```
/// use tui_2048_core::classify_direction;
/// use tui_2048_core::types::Direction;
///
/// assert_eq!(classify_direction(12.0, -3.0), Direction::Right);
/// assert_eq!(classify_direction(5.0, 5.0), Direction::Down);
/// assert_eq!(classify_direction(0.0, 0.0), Direction::Up);
/// ```
pub fn classify_direction(dx: f64, dy: f64) -> Direction {
    if dx.abs() > dy.abs() {
        if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    }
}
