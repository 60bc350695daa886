use color_eyre::Result;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::Instant;

use crate::config::GameConfig;
use crate::entities::StarTile;
use crate::input::{InputAction, InputManager};
use crate::renderer::{GameRenderer, RenderView};
use crate::scene::{self, PlayState};

/// Frames longer than this are treated as a stall and shortened
const MAX_FRAME_MS: f32 = 100.0;

/// The main application which holds the state and logic of the application.
pub struct App {
    running: bool,
    config: GameConfig,
    state: PlayState,
    /// Frames info
    last_frame_time: Instant,
    fps: u32,
    /// internal components
    input_manager: InputManager,
    renderer: GameRenderer,
}

impl App {
    /// Builds the play scene from the loaded starfield tile.
    /// `reports_releases` tells the input layer whether key releases arrive.
    pub fn new(config: GameConfig, tile: StarTile, reports_releases: bool) -> Self {
        let state = PlayState::new(&config, tile);
        log::info!(
            "Scene ready: {}x{} viewport, spinner at ({:.1}, {:.1})",
            state.width,
            state.height,
            state.spinner.x,
            state.spinner.y
        );

        Self {
            running: true,
            config,
            state,
            last_frame_time: Instant::now(),
            fps: 0,
            input_manager: InputManager::new(reports_releases),
            renderer: GameRenderer::new(),
        }
    }

    pub fn state(&self) -> &PlayState {
        &self.state
    }

    /// Run the application's main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        while self.running {
            let now = Instant::now();
            let frame_time = now.duration_since(self.last_frame_time);
            self.last_frame_time = now;
            if frame_time.as_micros() > 0 {
                self.fps = (1_000_000 / frame_time.as_micros()) as u32;
            }

            terminal.draw(|frame| {
                let view = RenderView {
                    state: &self.state,
                    title: &self.config.title,
                    background: self.config.background,
                    fps: self.fps,
                };
                self.renderer.render(frame, &view);
            })?;

            self.input_manager.poll_events()?;
            let actions = self.input_manager.take_actions();
            self.process_actions(&actions);

            let delta_ms = (frame_time.as_secs_f32() * 1000.0).min(MAX_FRAME_MS);
            self.update(delta_ms, Instant::now());

            let spent = now.elapsed();
            if spent < self.config.frame_interval {
                std::thread::sleep(self.config.frame_interval - spent);
            }
        }

        log::info!("Shutting down after {} frames", self.state.frame_count);
        Ok(())
    }

    fn process_actions(&mut self, actions: &[InputAction]) {
        for action in actions {
            match action {
                InputAction::Quit => {
                    self.running = false;
                }
            }
        }
    }

    /// Steps the scene with the keys held at `now`
    pub fn update(&mut self, delta_ms: f32, now: Instant) {
        let keys = self.input_manager.key_state(now);
        scene::step(&mut self.state, &keys, delta_ms);
    }
}
