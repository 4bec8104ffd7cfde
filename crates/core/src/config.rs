//! Game configuration
//!
//! Defaults come from the constants in [`crate::types`]. The binary always
//! runs with the defaults; tests shrink the field to keep scenarios small.

use std::path::PathBuf;
use std::time::Duration;

use crate::types::{
    DEFAULT_CATALOG_PATH, FIELD_HEIGHT, FIELD_WIDTH, SPAWN_JITTER, TICKS_PER_SHIFT, TICK_MS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Field width in cells
    pub width: usize,
    /// Field height in cells
    pub height: usize,
    /// Sleep between polling iterations
    pub tick: Duration,
    /// Polling ticks in the moving phase before gravity shifts the figure
    pub ticks_per_shift: u32,
    /// Maximum horizontal offset of a freshly spawned figure
    pub spawn_jitter: i32,
    /// Shape catalog file
    pub catalog_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            tick: Duration::from_millis(TICK_MS),
            ticks_per_shift: TICKS_PER_SHIFT,
            spawn_jitter: SPAWN_JITTER,
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
        }
    }
}

impl GameConfig {
    pub fn with_field_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn with_ticks_per_shift(mut self, ticks: u32) -> Self {
        self.ticks_per_shift = ticks.max(1);
        self
    }

    pub fn with_spawn_jitter(mut self, jitter: i32) -> Self {
        self.spawn_jitter = jitter.abs();
        self
    }

    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = GameConfig::default();
        assert_eq!((config.width, config.height), (10, 20));
        assert_eq!(config.tick, Duration::from_millis(25));
        assert_eq!(config.ticks_per_shift, 20);
        assert_eq!(config.spawn_jitter, 3);
        assert_eq!(config.catalog_path, PathBuf::from("figures.txt"));
    }

    #[test]
    fn builder_sanitizes_values() {
        let config = GameConfig::default()
            .with_ticks_per_shift(0)
            .with_spawn_jitter(-2);
        assert_eq!(config.ticks_per_shift, 1);
        assert_eq!(config.spawn_jitter, 2);
    }
}
