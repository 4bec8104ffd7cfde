//! Terminal falling-block game (default binary).
//!
//! Loads the shape catalog, takes over the terminal and runs the game loop
//! until the player quits.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};

use tui_blocks::core::{Catalog, GameConfig, GameEngine, SimpleRng};
use tui_blocks::input::TerminalInput;
use tui_blocks::runner;
use tui_blocks::term::{GameView, TerminalScreen};
use tui_blocks::types::LOG_PATH_ENV;

fn main() -> Result<()> {
    init_logging()?;

    let config = GameConfig::default();
    // Load before touching the terminal so a bad catalog prints a readable error.
    let catalog = Catalog::open(&config.catalog_path)
        .with_context(|| format!("loading shapes from {}", config.catalog_path.display()))?;
    let mut engine = GameEngine::new(config, catalog, SimpleRng::from_clock());

    let mut screen = TerminalScreen::new(GameView::default());
    screen.enter()?;

    let result = runner::run(&mut engine, &mut TerminalInput::new(), &mut screen);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

/// Send logs to the file named by `TUI_BLOCKS_LOG`, if set.
///
/// The screen belongs to the game, so there is no console logging.
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os(LOG_PATH_ENV) else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("creating log file {}", path.to_string_lossy()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    tracing::info!("logging to {}", path.to_string_lossy());
    Ok(())
}
