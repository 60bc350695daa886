use std::path::PathBuf;
use std::time::Duration;

use ratatui::style::Color;

/// Fixed gameplay constants shared by the scene and its entities
pub mod consts {
    use std::f32::consts::TAU;

    /// Side length of the spinner and of every enemy, in world units
    pub const SHAPE_SIZE: f32 = 50.0;

    /// Spinner rotation rate while a direction key is held (radians per millisecond)
    pub const ROTATION_SPEED: f32 = TAU / 1000.0;
    /// Horizontal nudge per frame while a direction key is held (not delta-scaled)
    pub const MOVE_STEP: f32 = 4.0;
    /// Starfield scroll per frame (not delta-scaled)
    pub const SCROLL_STEP: f32 = 4.0;

    /// Where a struck enemy is parked, just off the left edge
    pub const HIT_RESET_X: f32 = -50.0;
    /// Where an enemy leaving the right edge re-enters
    pub const WRAP_RESET_X: f32 = 0.0;

    /// Fire animation: scale pulse and rise both last this long
    pub const FIRE_DURATION_MS: f32 = 300.0;
    pub const FIRE_SCALE_FROM: f32 = 1.5;
    pub const FIRE_SCALE_TO: f32 = 1.0;
    /// The rise heads for the top edge of the world
    pub const FIRE_TARGET_Y: f32 = 0.0;

    /// Enemy speeds in world units per second
    pub const ENEMY_SPEEDS: [f32; 3] = [100.0, 200.0, 300.0];
}

/// Startup configuration for the game window and scene
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Viewport (and physics world) width in world units
    pub width: f32,
    /// Viewport (and physics world) height in world units
    pub height: f32,
    /// Terminal window title
    pub title: String,
    /// Colour behind the playfield
    pub background: Color,
    /// Location of the "starfield" tile image
    pub starfield_path: PathBuf,
    /// Target time between frames
    pub frame_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            title: String::from("Rocket Patrol Remake"),
            // CSS "beige"
            background: Color::Rgb(245, 245, 220),
            starfield_path: PathBuf::from("assets/starfield.png"),
            frame_interval: Duration::from_millis(16),
        }
    }
}

impl GameConfig {
    /// Spinner resting position, centred near the bottom edge
    pub fn spinner_rest(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 1.1)
    }

    /// Starting centre positions of the three enemies
    pub fn enemy_starts(&self) -> [(f32, f32); 3] {
        [
            (self.width / 5.0, self.height / 5.0),
            (self.width / 3.0, self.height / 10.0),
            (self.width / 1.5, self.height / 2.0),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_viewport_and_title() {
        let config = GameConfig::default();
        assert_eq!(config.width, 640.0);
        assert_eq!(config.height, 480.0);
        assert_eq!(config.title, "Rocket Patrol Remake");
        assert_eq!(config.starfield_path, PathBuf::from("assets/starfield.png"));
    }

    #[test]
    fn test_spinner_rest_position() {
        let (x, y) = GameConfig::default().spinner_rest();
        assert_eq!(x, 320.0);
        assert!((y - 436.363_64).abs() < 0.001);
    }

    #[test]
    fn test_enemy_starts_are_distinct() {
        let starts = GameConfig::default().enemy_starts();
        assert_eq!(starts[0], (128.0, 96.0));
        assert!((starts[1].0 - 213.333_33).abs() < 0.001);
        assert_eq!(starts[1].1, 48.0);
        assert!((starts[2].0 - 426.666_66).abs() < 0.001);
        assert_eq!(starts[2].1, 240.0);
    }
}
