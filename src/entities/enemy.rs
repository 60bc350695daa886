use super::bounds::Bounds;
use crate::config::consts::{HIT_RESET_X, SHAPE_SIZE, WRAP_RESET_X};

/// A square obstacle sliding horizontally at a fixed speed
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    /// Centre x in world units
    pub x: f32,
    /// Centre y in world units
    pub y: f32,
    /// Horizontal velocity in world units per second
    pub speed: f32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, speed: f32) -> Self {
        Self { x, y, speed }
    }

    /// Velocity integration for one frame
    pub fn update(&mut self, delta_ms: f32) {
        self.x += self.speed * delta_ms / 1000.0;
    }

    /// Parks the enemy just past the left edge after the spinner strikes it
    pub fn knock_back(&mut self) {
        self.x = HIT_RESET_X;
    }

    /// Returns true and moves the enemy back to the left edge once it has
    /// passed `max_x`
    pub fn wrap(&mut self, max_x: f32) -> bool {
        if self.x > max_x {
            self.x = WRAP_RESET_X;
            true
        } else {
            false
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::around(self.x, self.y, SHAPE_SIZE, SHAPE_SIZE, 1.0, 0.0)
    }

    pub fn get_width(&self) -> f32 {
        SHAPE_SIZE
    }

    pub fn get_height(&self) -> f32 {
        SHAPE_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enemy_moves_by_velocity() {
        let mut enemy = Enemy::new(100.0, 50.0, 200.0);
        enemy.update(500.0);
        assert_eq!(enemy.x, 200.0);
        assert_eq!(enemy.y, 50.0);
    }

    #[test]
    fn test_enemy_wraps_only_past_edge() {
        let mut enemy = Enemy::new(640.0, 50.0, 100.0);
        assert!(!enemy.wrap(640.0));
        assert_eq!(enemy.x, 640.0);

        enemy.x = 640.5;
        assert!(enemy.wrap(640.0));
        assert_eq!(enemy.x, 0.0);
    }

    #[test]
    fn test_knock_back_parks_off_screen() {
        let mut enemy = Enemy::new(300.0, 50.0, 100.0);
        enemy.knock_back();
        assert_eq!(enemy.x, -50.0);
        // Fully left of the viewport
        assert!(enemy.bounds().right() < 0.0);
    }

    #[test]
    fn test_enemy_size_is_fixed() {
        let enemy = Enemy::new(0.0, 0.0, 300.0);
        assert_eq!(enemy.get_width(), 50.0);
        assert_eq!(enemy.get_height(), 50.0);
        assert_eq!(enemy.bounds().width, 50.0);
    }
}
