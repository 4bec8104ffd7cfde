//! Game engine - the state machine driving a single game
//!
//! [`GameEngine::step`] is the whole transition function: the game loop
//! calls it once per polling tick with the key read during that tick (if
//! any) and redraws afterwards. Each phase has its own handler.

use crate::catalog::Catalog;
use crate::collision::{attach, is_attached, try_drop, try_rotate, try_shift};
use crate::config::GameConfig;
use crate::field::Field;
use crate::figure::Figure;
use crate::rng::SimpleRng;
use crate::types::{Control, Key, Phase};

/// What the renderer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub phase: Phase,
    pub field: &'a Field,
    /// Active figure, drawn over the field; `None` in message phases
    pub figure: Option<&'a Figure>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: GameConfig,
    catalog: Catalog,
    rng: SimpleRng,
    field: Field,
    figure: Figure,
    phase: Phase,
    /// Polling ticks spent in the moving phase since the last gravity shift
    ticks: u32,
}

impl GameEngine {
    /// Create a game waiting at the start menu
    pub fn new(config: GameConfig, catalog: Catalog, mut rng: SimpleRng) -> Self {
        let field = Field::new(config.width, config.height);
        let figure = Figure::centered(catalog.pick_random(&mut rng), config.width);
        Self {
            config,
            catalog,
            rng,
            field,
            figure,
            phase: Phase::Initial,
            ticks: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get a mutable reference to the field (for setting up scenarios)
    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    /// Replace the active figure (for setting up scenarios)
    pub fn set_figure(&mut self, figure: Figure) {
        self.figure = figure;
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            phase: self.phase,
            field: &self.field,
            figure: self.phase.shows_figure().then_some(&self.figure),
        }
    }

    /// Run one transition for the current phase
    pub fn step(&mut self, key: Option<Key>) -> Control {
        let before = self.phase;
        let control = match self.phase {
            Phase::Initial => self.on_initial(key),
            Phase::Moving => self.on_moving(key),
            Phase::Shifting => self.on_shifting(),
            Phase::Attaching => self.on_attaching(),
            Phase::Pause => self.on_pause(key),
            Phase::GameOver => self.on_game_over(key),
        };

        // Gravity counter: every tick that ends in the moving phase counts.
        if self.phase == Phase::Moving {
            self.ticks += 1;
            if self.ticks >= self.config.ticks_per_shift {
                self.ticks = 0;
                self.phase = Phase::Shifting;
            }
        }

        if self.phase != before {
            tracing::debug!(from = before.as_str(), to = self.phase.as_str(), "phase change");
        }
        control
    }

    fn on_initial(&mut self, key: Option<Key>) -> Control {
        match key {
            Some(Key::Confirm) => self.phase = Phase::Moving,
            Some(Key::Quit) => return self.quit(),
            _ => {}
        }
        Control::Continue
    }

    fn on_moving(&mut self, key: Option<Key>) -> Control {
        match key {
            Some(Key::Quit) => return self.quit(),
            Some(Key::Restart) => {
                self.restart();
                return Control::Continue;
            }
            Some(Key::Pause) => {
                self.phase = Phase::Pause;
                return Control::Continue;
            }
            Some(Key::Left) => {
                try_shift(&self.field, &mut self.figure, -1);
            }
            Some(Key::Right) => {
                try_shift(&self.field, &mut self.figure, 1);
            }
            Some(Key::Rotate) => {
                try_rotate(&self.field, &mut self.figure);
            }
            Some(Key::SoftDrop) => {
                try_drop(&self.field, &mut self.figure);
            }
            Some(Key::Confirm) | None => {}
        }

        if is_attached(&self.field, &self.figure) {
            self.phase = Phase::Attaching;
        }
        Control::Continue
    }

    fn on_shifting(&mut self) -> Control {
        if try_drop(&self.field, &mut self.figure) {
            self.phase = Phase::Moving;
        }
        if is_attached(&self.field, &self.figure) {
            self.phase = Phase::Attaching;
        }
        Control::Continue
    }

    fn on_attaching(&mut self) -> Control {
        let merged = attach(&mut self.field, &self.figure);
        let cleared = self.field.clear_full_rows();
        tracing::debug!(
            x = self.figure.x,
            y = self.figure.y,
            merged,
            cleared,
            "figure attached"
        );

        // The figure never left the top row: the stack has reached the spawn
        // area. A figure that cannot be merged whole (a jittered spawn that
        // still hangs outside the field) also ends the game; the field is
        // never written partially.
        if !merged || self.figure.y <= 0 {
            tracing::debug!("game over");
            self.phase = Phase::GameOver;
            return Control::Continue;
        }

        self.spawn();
        self.phase = Phase::Moving;
        Control::Continue
    }

    fn on_pause(&mut self, key: Option<Key>) -> Control {
        match key {
            Some(Key::Pause) => self.phase = Phase::Moving,
            Some(Key::Quit) => return self.quit(),
            Some(Key::Restart) => self.restart(),
            _ => {}
        }
        Control::Continue
    }

    fn on_game_over(&mut self, key: Option<Key>) -> Control {
        match key {
            Some(Key::Quit) => return Control::Exit,
            Some(Key::Restart) | Some(Key::Confirm) => self.restart(),
            _ => {}
        }
        Control::Continue
    }

    fn quit(&mut self) -> Control {
        self.phase = Phase::GameOver;
        Control::Exit
    }

    /// Spawn a new figure near the top center, offset by a random jitter
    ///
    /// The jittered anchor is not clamped to the field.
    fn spawn(&mut self) {
        let shape = self.catalog.pick_random(&mut self.rng);
        let jitter = self
            .rng
            .range_inclusive(-self.config.spawn_jitter, self.config.spawn_jitter);
        let mut figure = Figure::centered(shape, self.config.width);
        figure.x += jitter;
        self.figure = figure;
    }

    /// Empty the field, spawn a fresh centered figure and return to the
    /// start menu
    pub fn restart(&mut self) {
        tracing::debug!("restart");
        self.field.clear();
        self.figure = Figure::centered(
            self.catalog.pick_random(&mut self.rng),
            self.config.width,
        );
        self.ticks = 0;
        self.phase = Phase::Initial;
    }
}
