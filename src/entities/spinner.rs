use super::bounds::Bounds;
use crate::config::consts::{
    FIRE_DURATION_MS, FIRE_SCALE_FROM, FIRE_SCALE_TO, FIRE_TARGET_Y, MOVE_STEP, ROTATION_SPEED,
    SHAPE_SIZE,
};
use crate::tween::{Easing, Tween};

/// Timing and targets of the fire animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireProfile {
    pub scale_from: f32,
    pub scale_to: f32,
    pub scale_ms: f32,
    pub rise_to: f32,
    pub rise_ms: f32,
    pub easing: Easing,
}

impl Default for FireProfile {
    fn default() -> Self {
        Self {
            scale_from: FIRE_SCALE_FROM,
            scale_to: FIRE_SCALE_TO,
            scale_ms: FIRE_DURATION_MS,
            rise_to: FIRE_TARGET_Y,
            rise_ms: FIRE_DURATION_MS,
            easing: Easing::SineOut,
        }
    }
}

/// Where the spinner is in its fire animation.
///
/// The scale pulse and the rise start together. `Rising` is only entered when
/// the pulse ends first; with equal durations both end on the same frame and
/// the spinner goes straight back to `Idle`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FirePhase {
    #[default]
    Idle,
    Shrinking { scale: Tween, rise: Tween },
    Rising { rise: Tween },
}

impl FirePhase {
    pub fn is_active(&self) -> bool {
        !matches!(self, FirePhase::Idle)
    }

    /// The vertical interpolation driving the current sequence, if any
    pub fn rise(&self) -> Option<&Tween> {
        match self {
            FirePhase::Idle => None,
            FirePhase::Shrinking { rise, .. } | FirePhase::Rising { rise } => Some(rise),
        }
    }
}

/// The player-controlled rotating square
#[derive(Debug, Clone, PartialEq)]
pub struct Spinner {
    /// Centre x in world units
    pub x: f32,
    /// Centre y in world units
    pub y: f32,
    /// Radians, clockwise on screen
    pub rotation: f32,
    pub scale: f32,
    /// Resting y the spinner snaps back to after firing
    pub rest_y: f32,
    pub fire: FirePhase,
    pub profile: FireProfile,
}

impl Spinner {
    pub fn new(x: f32, rest_y: f32) -> Self {
        Self {
            x,
            y: rest_y,
            rotation: 0.0,
            scale: 1.0,
            rest_y,
            fire: FirePhase::Idle,
            profile: FireProfile::default(),
        }
    }

    pub fn is_firing(&self) -> bool {
        self.fire.is_active()
    }

    /// Rotates counter-clockwise and nudges left. Ignored while firing.
    pub fn spin_left(&mut self, delta_ms: f32) {
        if self.is_firing() {
            return;
        }
        self.rotation -= delta_ms * ROTATION_SPEED;
        self.x -= MOVE_STEP;
    }

    /// Rotates clockwise and nudges right. Ignored while firing.
    pub fn spin_right(&mut self, delta_ms: f32) {
        if self.is_firing() {
            return;
        }
        self.rotation += delta_ms * ROTATION_SPEED;
        self.x += MOVE_STEP;
    }

    /// Starts the fire animation unless one is already running.
    /// Returns whether a new sequence started.
    pub fn try_fire(&mut self) -> bool {
        if self.is_firing() {
            return false;
        }

        let profile = self.profile;
        self.scale = profile.scale_from;
        self.fire = FirePhase::Shrinking {
            scale: Tween::new(
                profile.scale_from,
                profile.scale_to,
                profile.scale_ms,
                profile.easing,
            ),
            rise: Tween::new(self.y, profile.rise_to, profile.rise_ms, profile.easing),
        };
        true
    }

    /// Advances the fire animation. Returns true on the frame the rise
    /// completes and the spinner is back at rest.
    pub fn advance_fire(&mut self, delta_ms: f32) -> bool {
        match std::mem::take(&mut self.fire) {
            FirePhase::Idle => false,
            FirePhase::Shrinking {
                mut scale,
                mut rise,
            } => {
                scale.advance(delta_ms);
                rise.advance(delta_ms);
                self.scale = scale.value();
                self.y = rise.value();

                if rise.is_finished() {
                    self.land();
                    true
                } else {
                    self.fire = if scale.is_finished() {
                        FirePhase::Rising { rise }
                    } else {
                        FirePhase::Shrinking { scale, rise }
                    };
                    false
                }
            }
            FirePhase::Rising { mut rise } => {
                rise.advance(delta_ms);
                self.y = rise.value();

                if rise.is_finished() {
                    self.land();
                    true
                } else {
                    self.fire = FirePhase::Rising { rise };
                    false
                }
            }
        }
    }

    fn land(&mut self) {
        self.fire = FirePhase::Idle;
        self.scale = self.profile.scale_to;
        self.y = self.rest_y;
    }

    /// Keeps the physics body inside the world. The body keeps its creation
    /// size, so the clamp ignores scale and rotation.
    pub fn clamp_to_world(&mut self, width: f32, height: f32) {
        let half = SHAPE_SIZE / 2.0;
        self.x = self.x.clamp(half, (width - half).max(half));
        self.y = self.y.clamp(half, (height - half).max(half));
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::around(self.x, self.y, SHAPE_SIZE, SHAPE_SIZE, self.scale, self.rotation)
    }

    /// Corners of the drawn square after scale and rotation, clockwise from top-left
    pub fn corners(&self) -> [(f32, f32); 4] {
        let half = SHAPE_SIZE * self.scale / 2.0;
        let (sin, cos) = self.rotation.sin_cos();
        [(-half, -half), (half, -half), (half, half), (-half, half)]
            .map(|(dx, dy)| (self.x + dx * cos - dy * sin, self.y + dx * sin + dy * cos))
    }

    pub fn get_width(&self) -> f32 {
        SHAPE_SIZE
    }

    pub fn get_height(&self) -> f32 {
        SHAPE_SIZE
    }
}
