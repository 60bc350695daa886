//! The play scene: one spinner, three enemies and a scrolling starfield.
//!
//! `PlayState` is built once, fully populated, and every frame is a call to
//! [`step`] with the held keys and the frame length in milliseconds.

use crate::config::GameConfig;
use crate::config::consts::ENEMY_SPEEDS;
use crate::entities::{Enemy, Spinner, StarTile, Starfield};
use crate::input::KeyState;

/// Everything the scene mutates from frame to frame
#[derive(Debug, Clone, PartialEq)]
pub struct PlayState {
    /// World (and viewport) width
    pub width: f32,
    /// World (and viewport) height
    pub height: f32,
    pub spinner: Spinner,
    pub enemies: [Enemy; 3],
    pub starfield: Starfield,
    pub frame_count: u64,
}

impl PlayState {
    pub fn new(config: &GameConfig, tile: StarTile) -> Self {
        let (rest_x, rest_y) = config.spinner_rest();
        let starts = config.enemy_starts();

        Self {
            width: config.width,
            height: config.height,
            spinner: Spinner::new(rest_x, rest_y),
            enemies: [0, 1, 2].map(|i| Enemy::new(starts[i].0, starts[i].1, ENEMY_SPEEDS[i])),
            starfield: Starfield::new(tile),
            frame_count: 0,
        }
    }

    pub fn is_firing(&self) -> bool {
        self.spinner.is_firing()
    }
}

/// What happened during one call to [`step`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Enemies the spinner struck, by index
    pub hits: Vec<usize>,
    /// Enemies that left the right edge and re-entered on the left, by index
    pub wraps: Vec<usize>,
    pub fire_started: bool,
    pub fire_finished: bool,
}

/// Advances the scene by one frame of `delta_ms` milliseconds
pub fn step(state: &mut PlayState, keys: &KeyState, delta_ms: f32) -> StepReport {
    let mut report = StepReport::default();
    state.frame_count += 1;

    // Animation and physics run ahead of the scene rules, as the engine does
    report.fire_finished = state.spinner.advance_fire(delta_ms);
    if report.fire_finished {
        log::debug!("Fire sequence finished on frame {}", state.frame_count);
    }
    for enemy in &mut state.enemies {
        enemy.update(delta_ms);
    }
    state.spinner.clamp_to_world(state.width, state.height);

    let spinner_bounds = state.spinner.bounds();
    for (idx, enemy) in state.enemies.iter_mut().enumerate() {
        if spinner_bounds.intersects(&enemy.bounds()) {
            log::info!("Spinner struck enemy {} at x={:.1}", idx + 1, enemy.x);
            enemy.knock_back();
            report.hits.push(idx);
        }
        if enemy.wrap(state.width) {
            log::debug!("reset enemy {}", idx + 1);
            report.wraps.push(idx);
        }
    }

    state.starfield.scroll();

    // Rotation scales with the frame length, the sideways nudge does not.
    // The spinner ignores both while a fire sequence runs.
    if keys.left {
        state.spinner.spin_left(delta_ms);
    }
    if keys.right {
        state.spinner.spin_right(delta_ms);
    }

    if keys.fire && state.spinner.try_fire() {
        log::debug!("Fire sequence started on frame {}", state.frame_count);
        report.fire_started = true;
    }

    report
}
