use std::path::Path;

use color_eyre::{Result, eyre::WrapErr};
use image::GrayImage;

use crate::entities::{Star, StarTile};

/// Pixels at or above this luminance count as stars
pub const STAR_THRESHOLD: u8 = 64;

/// Loads the "starfield" background tile. A missing or unreadable image is
/// fatal for the game, so the error carries the path for the report.
pub fn load_starfield(path: &Path) -> Result<StarTile> {
    let image = image::open(path)
        .wrap_err_with(|| format!("failed to load starfield image from {}", path.display()))?;
    let tile = tile_from_luma(&image.to_luma8());
    log::info!(
        "Loaded starfield {}x{} with {} stars from {}",
        tile.width,
        tile.height,
        tile.stars.len(),
        path.display()
    );
    Ok(tile)
}

/// Reduces a greyscale image to the pixels bright enough to draw as stars
pub fn tile_from_luma(image: &GrayImage) -> StarTile {
    let stars = image
        .enumerate_pixels()
        .filter(|(_, _, pixel)| pixel.0[0] >= STAR_THRESHOLD)
        .map(|(x, y, pixel)| Star {
            x,
            y,
            brightness: pixel.0[0],
        })
        .collect();

    StarTile::new(image.width(), image.height(), stars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_tile_keeps_only_bright_pixels() {
        let mut image = GrayImage::new(8, 4);
        image.put_pixel(1, 2, Luma([255]));
        image.put_pixel(5, 0, Luma([STAR_THRESHOLD]));
        image.put_pixel(6, 3, Luma([STAR_THRESHOLD - 1]));

        let tile = tile_from_luma(&image);
        assert_eq!(tile.width, 8);
        assert_eq!(tile.height, 4);
        assert_eq!(
            tile.stars,
            vec![
                Star {
                    x: 5,
                    y: 0,
                    brightness: STAR_THRESHOLD
                },
                Star {
                    x: 1,
                    y: 2,
                    brightness: 255
                },
            ]
        );
    }

    #[test]
    fn test_missing_image_is_an_error() {
        let err = load_starfield(Path::new("assets/does-not-exist.png")).unwrap_err();
        assert!(err.to_string().contains("does-not-exist.png"));
    }

    #[test]
    fn test_bundled_starfield_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/starfield.png");
        let tile = load_starfield(&path).unwrap();
        assert_eq!((tile.width, tile.height), (320, 240));
        assert!(!tile.stars.is_empty());
    }
}
