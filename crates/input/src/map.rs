//! Key mapping from terminal events to game keys.

use crate::types::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a terminal key event to a game key.
///
/// Letters are case-sensitive: only the lowercase bindings are recognized.
pub fn map_key_event(key: KeyEvent) -> Option<Key> {
    if is_interrupt(key) {
        return Some(Key::Quit);
    }
    match key.code {
        KeyCode::Enter => Some(Key::Confirm),
        KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
            Key::from_char(c)
        }
        _ => None,
    }
}

/// Ctrl-C never reaches the process as a signal in raw mode.
fn is_interrupt(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
