//! Game loop: a single-threaded cooperative polling loop.
//!
//! Each iteration sleeps one tick, reads input according to the phase
//! (blocking in menus, non-blocking in play, none while the engine is
//! shifting or attaching), runs one engine step and redraws.

use std::thread;

use anyhow::Result;

use crate::core::{Frame, GameEngine};
use crate::input::TerminalInput;
use crate::term::TerminalScreen;
use crate::types::{Control, Key};

/// Where the loop gets keys from.
pub trait KeySource {
    /// Return a pending key without waiting.
    fn poll_key(&mut self) -> Result<Option<Key>>;

    /// Wait until a key is pressed. `None` is a wakeup without a key
    /// (terminal resize) and only triggers a redraw.
    fn read_key(&mut self) -> Result<Option<Key>>;
}

/// Where the loop draws frames to.
pub trait FrameSink {
    fn draw_frame(&mut self, frame: &Frame<'_>) -> Result<()>;
}

impl KeySource for TerminalInput {
    fn poll_key(&mut self) -> Result<Option<Key>> {
        TerminalInput::poll_key(self)
    }

    fn read_key(&mut self) -> Result<Option<Key>> {
        TerminalInput::read_key(self)
    }
}

impl FrameSink for TerminalScreen {
    fn draw_frame(&mut self, frame: &Frame<'_>) -> Result<()> {
        self.draw(frame)
    }
}

/// Run the game until the player quits.
pub fn run(
    engine: &mut GameEngine,
    input: &mut impl KeySource,
    sink: &mut impl FrameSink,
) -> Result<()> {
    let tick = engine.config().tick;
    sink.draw_frame(&engine.frame())?;

    loop {
        if !tick.is_zero() {
            thread::sleep(tick);
        }

        let phase = engine.phase();
        let key = if phase.is_menu() {
            input.read_key()?
        } else if phase.reads_input() {
            input.poll_key()?
        } else {
            None
        };

        let control = engine.step(key);
        sink.draw_frame(&engine.frame())?;

        if control == Control::Exit {
            tracing::info!(phase = engine.phase().as_str(), "player quit");
            return Ok(());
        }
    }
}
