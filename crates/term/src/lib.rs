//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is flushed to the terminal with
//! crossterm, rewriting only the cells that changed since the last frame.
//!
//! Goals:
//! - Keep `core` free of terminal concerns
//! - Draw the field exactly as a bordered grid of 3-column cells
//! - Keep the view logic pure so it can be unit-tested

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screen;

pub use tui_blocks_core as core;
pub use tui_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{Anchor, GameView, Viewport};
pub use renderer::TerminalRenderer;
pub use screen::TerminalScreen;
