use std::f32::consts::FRAC_PI_2;

/// Easing curves available to a [`Tween`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    SineIn,
    #[default]
    SineOut,
    SineInOut,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` onto the eased curve
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::SineIn => 1.0 - (t * FRAC_PI_2).cos(),
            Easing::SineOut => (t * FRAC_PI_2).sin(),
            Easing::SineInOut => -0.5 * ((std::f32::consts::PI * t).cos() - 1.0),
        }
    }
}

/// A timed, eased interpolation of a single value
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration_ms: f32,
    pub elapsed_ms: f32,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration_ms: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(0.0),
            elapsed_ms: 0.0,
            easing,
        }
    }

    /// Moves the clock forward; elapsed time never passes the duration
    pub fn advance(&mut self, delta_ms: f32) {
        self.elapsed_ms = (self.elapsed_ms + delta_ms.max(0.0)).min(self.duration_ms);
    }

    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            1.0
        } else {
            self.elapsed_ms / self.duration_ms
        }
    }

    pub fn value(&self) -> f32 {
        self.from + (self.to - self.from) * self.easing.apply(self.progress())
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }
}
