use crate::config::consts::SCROLL_STEP;

/// A single lit pixel of the starfield tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Star {
    pub x: u32,
    pub y: u32,
    pub brightness: u8,
}

/// The repeating background image, reduced to its lit pixels
#[derive(Debug, Clone, PartialEq)]
pub struct StarTile {
    pub width: u32,
    pub height: u32,
    pub stars: Vec<Star>,
}

impl StarTile {
    pub fn new(width: u32, height: u32, stars: Vec<Star>) -> Self {
        Self {
            width,
            height,
            stars,
        }
    }
}

/// Horizontally scrolling, tiled background
#[derive(Debug, Clone, PartialEq)]
pub struct Starfield {
    /// Horizontal texture offset; the tile is sampled at `x + tile_offset_x`
    pub tile_offset_x: f32,
    pub tile: StarTile,
}

impl Starfield {
    pub fn new(tile: StarTile) -> Self {
        Self {
            tile_offset_x: 0.0,
            tile,
        }
    }

    /// One frame of scrolling, independent of frame length
    pub fn scroll(&mut self) {
        self.tile_offset_x -= SCROLL_STEP;
    }

    /// World positions of every star visible in a `width` x `height` viewport
    pub fn visible_stars(&self, width: f32, height: f32) -> Vec<(f32, f32, u8)> {
        let tile_w = self.tile.width as f32;
        let tile_h = self.tile.height as f32;
        if tile_w <= 0.0 || tile_h <= 0.0 {
            return Vec::new();
        }

        let mut visible = Vec::new();
        for star in &self.tile.stars {
            let first_x = (star.x as f32 - self.tile_offset_x).rem_euclid(tile_w);
            let mut sy = star.y as f32;
            while sy < height {
                let mut sx = first_x;
                while sx < width {
                    visible.push((sx, sy, star.brightness));
                    sx += tile_w;
                }
                sy += tile_h;
            }
        }
        visible
    }
}
