//! Key capture from the real terminal.

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::map_key_event;
use crate::types::Key;

/// Reads game keys from the terminal via crossterm.
///
/// Expects raw mode to be enabled by the renderer.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }

    /// Non-blocking: return a pending key if one was pressed, `None` otherwise.
    ///
    /// Drains unrelated events (resize, releases, unbound keys) so they do not
    /// pile up between ticks.
    pub fn poll_key(&mut self) -> Result<Option<Key>> {
        while event::poll(Duration::ZERO).context("polling terminal events")? {
            if let Some(key) = Self::translate(event::read().context("reading terminal event")?) {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }

    /// Block until a bound key is pressed or the terminal is resized.
    ///
    /// A resize wakes the caller with `None` so it can redraw.
    pub fn read_key(&mut self) -> Result<Option<Key>> {
        loop {
            if let Some(wakeup) = Self::wakeup(event::read().context("reading terminal event")?) {
                return Ok(wakeup);
            }
        }
    }

    /// Events that end a blocking read: `Some(None)` for a resize,
    /// `Some(Some(key))` for a bound key press.
    fn wakeup(ev: Event) -> Option<Option<Key>> {
        match ev {
            Event::Resize(..) => Some(None),
            other => Self::translate(other).map(Some),
        }
    }

    fn translate(ev: Event) -> Option<Key> {
        match ev {
            // Terminal auto-repeat and releases are not separate presses.
            Event::Key(key) if key.kind == KeyEventKind::Press => map_key_event(key),
            _ => None,
        }
    }
}
