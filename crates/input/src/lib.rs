//! Terminal input module.
//!
//! No UI framework here: this crate maps
//! `crossterm` key events into [`crate::types::Key`] and captures them from
//! the terminal, either without waiting (during play) or blocking (in menus).

pub mod map;
pub mod terminal;

pub use tui_blocks_types as types;

pub use map::map_key_event;
pub use terminal::TerminalInput;
