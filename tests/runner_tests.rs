//! Game loop tests with scripted input and a recording sink

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::{bail, Result};
use tui_blocks::core::{Catalog, Frame, GameConfig, GameEngine, Shape, SimpleRng};
use tui_blocks::runner::{run, FrameSink, KeySource};
use tui_blocks::types::{Key, Phase};

/// Plays back a fixed script. `None` entries are ticks without a key press.
struct ScriptedInput {
    script: VecDeque<Option<Key>>,
    blocking_reads: usize,
}

impl ScriptedInput {
    fn new(script: impl IntoIterator<Item = Option<Key>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            blocking_reads: 0,
        }
    }
}

impl KeySource for ScriptedInput {
    fn poll_key(&mut self) -> Result<Option<Key>> {
        match self.script.pop_front() {
            Some(entry) => Ok(entry),
            None => bail!("input script exhausted"),
        }
    }

    /// `None` entries read here stand for a resize wakeup.
    fn read_key(&mut self) -> Result<Option<Key>> {
        self.blocking_reads += 1;
        match self.script.pop_front() {
            Some(entry) => Ok(entry),
            None => bail!("input script exhausted"),
        }
    }
}

#[derive(Default)]
struct RecordingSink {
    phases: Vec<Phase>,
}

impl FrameSink for RecordingSink {
    fn draw_frame(&mut self, frame: &Frame<'_>) -> Result<()> {
        self.phases.push(frame.phase);
        Ok(())
    }
}

fn engine(width: usize, height: usize) -> GameEngine {
    let config = GameConfig::default()
        .with_field_size(width, height)
        .with_tick(Duration::ZERO)
        .with_spawn_jitter(0);
    let catalog = Catalog::new(vec![Shape::from_rows(&["##", "##"]).unwrap()]).unwrap();
    GameEngine::new(config, catalog, SimpleRng::new(5))
}

#[test]
fn runner_start_then_quit() {
    let mut engine = engine(10, 20);
    let mut input = ScriptedInput::new([Some(Key::Confirm), Some(Key::Quit)]);
    let mut sink = RecordingSink::default();

    run(&mut engine, &mut input, &mut sink).unwrap();

    assert_eq!(
        sink.phases,
        vec![Phase::Initial, Phase::Moving, Phase::GameOver]
    );
    assert_eq!(engine.phase(), Phase::GameOver);
    assert_eq!(input.blocking_reads, 1);
}

#[test]
fn runner_menu_redraws_on_wakeup_without_key() {
    let mut engine = engine(10, 20);
    let mut input = ScriptedInput::new([None, None, Some(Key::Quit)]);
    let mut sink = RecordingSink::default();

    run(&mut engine, &mut input, &mut sink).unwrap();

    // Each wakeup redraws the menu unchanged.
    assert_eq!(
        sink.phases,
        vec![Phase::Initial, Phase::Initial, Phase::Initial, Phase::GameOver]
    );
    assert_eq!(input.blocking_reads, 3);
}

#[test]
fn runner_game_over_redraws_on_wakeup_without_key() {
    let mut engine = engine(2, 2);
    let mut input = ScriptedInput::new([Some(Key::Confirm), None, None, Some(Key::Quit)]);
    let mut sink = RecordingSink::default();

    run(&mut engine, &mut input, &mut sink).unwrap();

    assert_eq!(
        &sink.phases[3..],
        &[Phase::GameOver, Phase::GameOver, Phase::GameOver]
    );
}

#[test]
fn runner_plays_until_game_over_then_quits() {
    // The square fills a 2x2 field at once: it attaches in the top row.
    let mut engine = engine(2, 2);
    let mut input = ScriptedInput::new([Some(Key::Confirm), None, Some(Key::Quit)]);
    let mut sink = RecordingSink::default();

    run(&mut engine, &mut input, &mut sink).unwrap();

    assert_eq!(
        sink.phases,
        vec![
            Phase::Initial,
            Phase::Moving,
            Phase::Attaching,
            Phase::GameOver,
            Phase::GameOver,
        ]
    );
    // Both rows were full and cleared when the figure merged.
    assert_eq!(engine.field().occupied_count(), 0);
}

#[test]
fn runner_restart_from_game_over_returns_to_menu() {
    let mut engine = engine(2, 2);
    let mut input = ScriptedInput::new([
        Some(Key::Confirm),
        None,
        Some(Key::Restart),
        Some(Key::Quit),
    ]);
    let mut sink = RecordingSink::default();

    run(&mut engine, &mut input, &mut sink).unwrap();

    assert_eq!(
        &sink.phases[3..],
        &[Phase::GameOver, Phase::Initial, Phase::GameOver]
    );
}

#[test]
fn runner_propagates_input_errors() {
    let mut engine = engine(10, 20);
    let mut input = ScriptedInput::new([Some(Key::Confirm)]);
    let mut sink = RecordingSink::default();

    let err = run(&mut engine, &mut input, &mut sink).unwrap_err();
    assert!(err.to_string().contains("exhausted"));
    assert_eq!(sink.phases, vec![Phase::Initial, Phase::Moving]);
}
