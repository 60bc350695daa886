// Library exports for the binary and for testing
pub use app::App;
pub use config::{GameConfig, consts};
pub use entities::{Bounds, Enemy, FirePhase, FireProfile, Spinner, Star, StarTile, Starfield};
pub use input::{GameKey, InputAction, InputManager, KeyState};
pub use scene::{PlayState, StepReport, step};
pub use tween::{Easing, Tween};

pub mod app;
pub mod assets;
pub mod config;
pub mod entities;
pub mod input;
pub mod renderer;
pub mod scene;
pub mod screen;
pub mod tween;
