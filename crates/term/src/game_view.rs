//! GameView: maps an engine [`Frame`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Frame;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::Phase;

/// Glyph of an occupied cell; every cell is this many columns wide.
const BLOCK: &str = "[+]";
const EMPTY: &str = "   ";
const CELL_W: u16 = 3;

const HELP: [&str; 5] = [
    "[ENTER]   to start",
    "[A][S][D] to move",
    "[W]       to rotate",
    "[R]       to restart",
    "[Q]       to quit",
];

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
pub enum Anchor {
    /// Frame drawn at the top-left corner of the terminal
    TopLeft,
    /// Frame centered in the viewport
    Center,
}

/// A lightweight terminal renderer for the playing field.
#[derive(Debug, Clone)]
pub struct GameView {
    anchor: Anchor,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor: Anchor::TopLeft,
        }
    }
}

impl GameView {
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Size of the bordered frame for a field of the given dimensions.
    pub fn frame_size(field_width: usize, field_height: usize) -> (u16, u16) {
        (
            (field_width as u16) * CELL_W + 2,
            (field_height as u16) + 2,
        )
    }

    /// Render a frame into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, frame: &Frame<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let field = frame.field;
        let (frame_w, frame_h) = Self::frame_size(field.width(), field.height());
        let (start_x, start_y) = match self.anchor {
            Anchor::TopLeft => (0, 0),
            Anchor::Center => (
                viewport.width.saturating_sub(frame_w) / 2,
                viewport.height.saturating_sub(frame_h) / 2,
            ),
        };

        self.draw_border(fb, start_x, start_y, frame_w, frame_h, CellStyle::PLAIN);

        match frame.phase {
            Phase::Initial => {
                for (i, line) in HELP.iter().enumerate() {
                    fb.put_str(start_x + 2, start_y + 1 + i as u16, line, CellStyle::PLAIN);
                }
                self.draw_message(fb, start_x, start_y, frame_w, frame_h, "[START]");
            }
            Phase::Pause => {
                self.draw_message(fb, start_x, start_y, frame_w, frame_h, "[PAUSE]");
            }
            Phase::GameOver => {
                self.draw_message(fb, start_x, start_y, frame_w, frame_h, "[GAME_OVER]");
            }
            Phase::Moving | Phase::Shifting | Phase::Attaching => {
                self.draw_cells(fb, frame, start_x, start_y);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, frame: &Frame<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, viewport, &mut fb);
        fb
    }

    fn draw_cells(&self, fb: &mut FrameBuffer, frame: &Frame<'_>, start_x: u16, start_y: u16) {
        let field = frame.field;
        for y in 0..field.height() {
            for x in 0..field.width() {
                let glyph = if field.get(x, y) { BLOCK } else { EMPTY };
                self.put_cell(fb, start_x, start_y, x as u16, y as u16, glyph, CellStyle::PLAIN);
            }
        }

        // Overlay only; the field itself is never touched.
        if let Some(figure) = frame.figure {
            for (x, y) in figure.cells() {
                if field.is_in_bounds(x, y) {
                    self.put_cell(fb, start_x, start_y, x as u16, y as u16, BLOCK, CellStyle::BOLD);
                }
            }
        }
    }

    fn put_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        glyph: &str,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * CELL_W;
        let py = start_y + 1 + cell_y;
        fb.put_str(px, py, glyph, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_message(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add((frame_h / 2).saturating_sub(1));
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, CellStyle::BOLD);
    }
}
