//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    let slide = |d| Some(GameAction::Slide(d));
    match key.code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => slide(Direction::Left),
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => slide(Direction::Right),
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => slide(Direction::Up),
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => slide(Direction::Down),

        KeyCode::Char('r' | 'R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q' | 'Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
