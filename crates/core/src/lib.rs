//! Core game logic module - pure and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminal input or rendering, making it:
//!
//! - **Deterministic**: Same seed and key sequence produce identical games
//! - **Testable**: Unit tests for every rule, scenario tests for the state machine
//! - **Portable**: Can run in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`field`]: fixed-size grid with row-full test and row clearing
//! - [`shape`]: square bitmask shapes and clockwise rotation
//! - [`figure`]: the active piece (shape + anchor)
//! - [`collision`]: bounds, overlap and resting checks; move/rotate/attach
//! - [`catalog`]: loading shapes from a text stream and random picks
//! - [`engine`]: the state machine sequencing a game
//! - [`config`]: field size and timing
//! - [`rng`]: small seeded generator
//!
//! # Game Rules
//!
//! - Gravity moves the figure one row every 20 polling ticks (0.5s)
//! - A figure attaches when any of its blocks rests on the floor or a settled block
//! - Full rows are removed and everything above them moves down
//! - The game ends when a figure attaches without leaving the top row
//!
//! # Example
//!
//! ```
//! use tui_blocks_core::{Catalog, GameConfig, GameEngine, SimpleRng};
//! use tui_blocks_core::types::{Key, Phase};
//!
//! let catalog = Catalog::parse("1  2  1 1 1 1").unwrap();
//! let mut game = GameEngine::new(GameConfig::default(), catalog, SimpleRng::new(12345));
//! assert_eq!(game.phase(), Phase::Initial);
//!
//! game.step(Some(Key::Confirm));
//! game.step(Some(Key::Left));
//! assert_eq!(game.phase(), Phase::Moving);
//! assert_eq!(game.figure().x, 3);
//! ```

pub mod catalog;
pub mod collision;
pub mod config;
pub mod engine;
pub mod field;
pub mod figure;
pub mod rng;
pub mod shape;

pub use tui_blocks_types as types;

// Re-export commonly used types for convenience
pub use catalog::{Catalog, CatalogError};
pub use collision::{attach, can_place, fits, is_attached, is_within_bounds};
pub use config::GameConfig;
pub use engine::{Frame, GameEngine};
pub use field::Field;
pub use figure::Figure;
pub use rng::SimpleRng;
pub use shape::Shape;
