/// Axis-aligned bounding box in world units (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Box enclosing a `width` x `height` rectangle centred on `(cx, cy)`
    /// after it is scaled and rotated about its centre
    pub fn around(cx: f32, cy: f32, width: f32, height: f32, scale: f32, rotation: f32) -> Self {
        let half_w = width * scale.abs() / 2.0;
        let half_h = height * scale.abs() / 2.0;
        let (sin, cos) = rotation.sin_cos();

        // Half-extents of the rotated rectangle projected onto each axis
        let extent_x = half_w * cos.abs() + half_h * sin.abs();
        let extent_y = half_w * sin.abs() + half_h * cos.abs();

        Self {
            x: cx - extent_x,
            y: cy - extent_y,
            width: extent_x * 2.0,
            height: extent_y * 2.0,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Overlap test where touching edges count as intersecting.
    /// Empty boxes never intersect anything.
    pub fn intersects(&self, other: &Bounds) -> bool {
        if self.width <= 0.0 || self.height <= 0.0 || other.width <= 0.0 || other.height <= 0.0 {
            return false;
        }

        !(self.right() < other.x
            || self.bottom() < other.y
            || self.x > other.right()
            || self.y > other.bottom())
    }
}
