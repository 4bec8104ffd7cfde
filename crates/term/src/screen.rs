//! TerminalScreen: the game's frame sink on a real terminal.

use anyhow::{Context, Result};

use crate::core::Frame;
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

/// Owns the terminal for the duration of a game.
///
/// [`TerminalScreen::enter`] switches to raw mode and the alternate screen;
/// [`TerminalScreen::exit`] restores the terminal.
pub struct TerminalScreen {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
}

impl TerminalScreen {
    pub fn new(view: GameView) -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view,
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter().context("entering raw mode")
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit().context("restoring terminal")
    }

    /// Render and flush one frame.
    pub fn draw(&mut self, frame: &Frame<'_>) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        if viewport.width != self.fb.width() || viewport.height != self.fb.height() {
            self.renderer.invalidate();
        }
        self.view.render_into(frame, viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}
