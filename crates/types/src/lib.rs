//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal input, rendering).
//!
//! # Field Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 25 | Sleep between two polling iterations |
//! | `TICKS_PER_SHIFT` | 20 | Polling ticks before gravity moves the figure (~0.5s) |
//!
//! # Spawning
//!
//! New figures spawn at `y = 0`, horizontally centered and offset by a
//! random value in `[-SPAWN_JITTER, SPAWN_JITTER]`.
//!
//! # Examples
//!
//! ```
//! use tui_blocks_types::{Key, Phase, FIELD_HEIGHT, FIELD_WIDTH};
//!
//! assert_eq!(Key::from_char('a'), Some(Key::Left));
//! assert_eq!(Key::from_char('A'), None);
//! assert!(Phase::Initial.is_menu());
//! assert!(!Phase::Moving.is_menu());
//!
//! assert_eq!(FIELD_WIDTH, 10);
//! assert_eq!(FIELD_HEIGHT, 20);
//! ```

/// Field width in cells (10 columns)
pub const FIELD_WIDTH: usize = 10;

/// Field height in cells (20 rows)
pub const FIELD_HEIGHT: usize = 20;

/// Polling interval in milliseconds
pub const TICK_MS: u64 = 25;

/// Polling ticks spent in [`Phase::Moving`] before gravity shifts the figure
pub const TICKS_PER_SHIFT: u32 = 20;

/// Maximum horizontal offset applied to a freshly spawned figure
pub const SPAWN_JITTER: i32 = 3;

/// Largest supported shape side length
pub const MAX_SHAPE_SIZE: usize = 8;

/// Number of cells in the largest supported shape
pub const MAX_SHAPE_CELLS: usize = MAX_SHAPE_SIZE * MAX_SHAPE_SIZE;

/// Shape catalog location, relative to the working directory
pub const DEFAULT_CATALOG_PATH: &str = "figures.txt";

/// Environment variable naming a file that receives diagnostic logs
pub const LOG_PATH_ENV: &str = "TUI_BLOCKS_LOG";

/// Game phases driven by the engine's state machine
///
/// - **Initial**: start menu, waiting for Enter
/// - **Moving**: the figure accepts player input; gravity counts down
/// - **Shifting**: gravity moves the figure one row down
/// - **Attaching**: the figure is merged into the field and a new one spawns
/// - **Pause**: gameplay suspended until the pause key is pressed again
/// - **GameOver**: the stack reached the top (or the player quit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Initial,
    Moving,
    Shifting,
    Attaching,
    Pause,
    GameOver,
}

impl Phase {
    /// Menu phases block on input and draw a message instead of the field.
    pub fn is_menu(&self) -> bool {
        matches!(self, Phase::Initial | Phase::GameOver)
    }

    /// Phases in which the active figure is drawn over the field.
    pub fn shows_figure(&self) -> bool {
        matches!(self, Phase::Moving | Phase::Shifting | Phase::Attaching)
    }

    /// Phases that read a key (blocking or not) before stepping.
    pub fn reads_input(&self) -> bool {
        matches!(
            self,
            Phase::Initial | Phase::Moving | Phase::Pause | Phase::GameOver
        )
    }

    /// Convert to the upper-case name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Initial => "INITIAL",
            Phase::Moving => "MOVING",
            Phase::Shifting => "SHIFTING",
            Phase::Attaching => "ATTACHING",
            Phase::Pause => "PAUSE",
            Phase::GameOver => "GAME_OVER",
        }
    }
}

/// Player input recognized by the game
///
/// Keys are single lowercase characters; Enter confirms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// `q`: quit the game
    Quit,
    /// `r`: restart from the start menu
    Restart,
    /// `p`: toggle pause
    Pause,
    /// `a`: move the figure one cell left
    Left,
    /// `d`: move the figure one cell right
    Right,
    /// `w`: rotate the figure clockwise
    Rotate,
    /// `s`: move the figure one row down
    SoftDrop,
    /// Enter: start, or restart after game over
    Confirm,
}

impl Key {
    /// Map a typed character to a key (case-sensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blocks_types::Key;
    ///
    /// assert_eq!(Key::from_char('w'), Some(Key::Rotate));
    /// assert_eq!(Key::from_char('\n'), Some(Key::Confirm));
    /// assert_eq!(Key::from_char('x'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'q' => Some(Key::Quit),
            'r' => Some(Key::Restart),
            'p' => Some(Key::Pause),
            'a' => Some(Key::Left),
            'd' => Some(Key::Right),
            'w' => Some(Key::Rotate),
            's' => Some(Key::SoftDrop),
            '\n' | '\r' => Some(Key::Confirm),
            _ => None,
        }
    }
}

/// Result of one engine step, consumed by the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep looping
    Continue,
    /// The player asked to leave; stop the loop and exit normally
    Exit,
}
