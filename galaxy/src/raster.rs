//! Rasterization of star positions onto an RGB canvas.
//!
//! The canvas is sized from the unscaled coordinate extents, scaled up, and
//! centered on the origin; each star becomes a filled white disc whose
//! diameter equals the scale factor. Discs overwrite whatever is beneath
//! them in input order, with no blending or anti-aliasing, and pixels that
//! fall outside the canvas are clipped.

use image::{Rgb, RgbImage};
use log::debug;
use nalgebra::Vector3;

use crate::GalaxyError;

const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);
const STAR_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Project star positions onto a black canvas as white discs.
///
/// The canvas is `ceil(max |x|) * scale` wide and `ceil(max |y|) * scale`
/// tall, with maxima taken over the unscaled coordinates. An empty point
/// sequence yields a 0x0 image, a degenerate but valid result.
///
/// # Arguments
/// * `scale` - Pixels per coordinate unit and star disc diameter, must be
///   positive
/// * `stars` - Star positions; only x and y are consulted
///
/// # Returns
/// The rendered bitmap, fully owned by the caller.
pub fn render(scale: u32, stars: &[Vector3<f64>]) -> Result<RgbImage, GalaxyError> {
    if scale == 0 {
        return Err(GalaxyError::ZeroScale);
    }

    let max_x = stars.iter().fold(0.0, |acc: f64, star| acc.max(star.x.abs()));
    let max_y = stars.iter().fold(0.0, |acc: f64, star| acc.max(star.y.abs()));
    let width = max_x.ceil() as u32 * scale;
    let height = max_y.ceil() as u32 * scale;

    let mut canvas = RgbImage::from_pixel(width, height, BACKGROUND);

    // Truncating integer division, so the center of an odd-sized canvas
    // lands on the lower pixel.
    let half_width = f64::from(width / 2);
    let half_height = f64::from(height / 2);

    for star in stars {
        let px = (star.x * f64::from(scale) + half_width) as i64;
        let py = (star.y * f64::from(scale) + half_height) as i64;
        stamp_disc(&mut canvas, px, py, scale);
    }

    debug!("rendered {} stars onto {}x{} canvas", stars.len(), width, height);
    Ok(canvas)
}

/// Fill the disc of the given diameter centered at (cx, cy).
///
/// The disc is inscribed in a diameter-sized square; a pixel is lit when
/// its center falls inside the circle. Out-of-canvas pixels are skipped.
fn stamp_disc(canvas: &mut RgbImage, cx: i64, cy: i64, diameter: u32) {
    let d = i64::from(diameter);
    let x0 = cx - d / 2;
    let y0 = cy - d / 2;

    let center = f64::from(diameter) / 2.0;
    let radius_sq = center * center;
    for iy in 0..d {
        for ix in 0..d {
            let dx = ix as f64 + 0.5 - center;
            let dy = iy as f64 + 0.5 - center;
            if dx * dx + dy * dy > radius_sq {
                continue;
            }
            put_pixel_clipped(canvas, x0 + ix, y0 + iy);
        }
    }
}

fn put_pixel_clipped(canvas: &mut RgbImage, x: i64, y: i64) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x < canvas.width() && y < canvas.height() {
        canvas.put_pixel(x, y, STAR_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star(x: f64, y: f64) -> Vector3<f64> {
        Vector3::new(x, y, 0.0)
    }

    #[test]
    fn test_zero_scale_rejected() {
        let result = render(0, &[star(1.0, 1.0)]);
        assert_eq!(result.unwrap_err(), GalaxyError::ZeroScale);
    }

    #[test]
    fn test_empty_field_yields_empty_canvas() {
        let image = render(3, &[]).unwrap();
        assert_eq!((image.width(), image.height()), (0, 0));
    }

    #[test]
    fn test_canvas_size_from_unscaled_extents() {
        let stars = [star(2.2, 1.4), star(-3.7, 0.2)];
        let image = render(2, &stars).unwrap();
        // ceil(3.7) * 2 by ceil(1.4) * 2
        assert_eq!((image.width(), image.height()), (8, 4));
    }

    #[test]
    fn test_single_pixel_star_at_scale_one() {
        // The far corner star drives the canvas size; its own disc lands
        // outside and is clipped, leaving exactly one lit pixel.
        let stars = [star(2.0, 2.0), star(0.3, 0.0)];
        let image = render(1, &stars).unwrap();
        assert_eq!((image.width(), image.height()), (2, 2));

        let lit: Vec<_> = image
            .enumerate_pixels()
            .filter(|(_, _, px)| **px == STAR_COLOR)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert_eq!(lit, vec![(1, 1)]);
    }

    #[test]
    fn test_disc_diameter_matches_scale() {
        let stars = [star(4.0, 4.0), star(0.5, 0.5)];
        let image = render(3, &stars).unwrap();
        assert_eq!((image.width(), image.height()), (12, 12));

        // (0.5, 0.5) maps to pixel (7, 7); at diameter 3 the full 3x3
        // block around it is inside the disc.
        let lit = image
            .pixels()
            .filter(|px| **px == STAR_COLOR)
            .count();
        assert_eq!(lit, 9);
        for (x, y) in [(6, 6), (7, 7), (8, 8), (6, 8)] {
            assert_eq!(*image.get_pixel(x, y), STAR_COLOR);
        }
        assert_eq!(*image.get_pixel(5, 7), BACKGROUND);
    }

    #[test]
    fn test_background_is_black() {
        let image = render(2, &[star(1.0, 1.0)]).unwrap();
        assert_eq!(*image.get_pixel(0, 0), BACKGROUND);
    }

    #[test]
    fn test_identical_input_renders_identical_pixels() {
        let stars = [star(1.3, -0.4), star(-2.0, 1.9), star(0.1, 0.1)];
        let first = render(4, &stars).unwrap();
        let second = render(4, &stars).unwrap();
        assert_eq!(first.as_raw(), second.as_raw());
    }
}
