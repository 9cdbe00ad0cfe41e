//! Confidence-gated false-color rendering of depth frames.

use std::cmp::Ordering;

use image::{Rgb, RgbImage};
use ndarray::{Array2, Zip};
use tracing::debug;

use crate::config::DEFAULT_CONFIDENCE_THRESHOLD;
use crate::error::{Error, Result};
use crate::grid::FloatGrid;
use crate::palette::{rainbow, MASKED};

/// Valid depth interval `[min, max]` with `max > min`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeBounds {
    min: f32,
    max: f32,
}

impl RangeBounds {
    /// Fails with [`Error::InvalidRange`] unless both bounds are finite and
    /// `max > min`.
    pub fn new(min: f32, max: f32) -> Result<Self> {
        let ordered = max.partial_cmp(&min) == Some(Ordering::Greater);
        if !ordered || !min.is_finite() || !max.is_finite() {
            return Err(Error::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Inclusive on both ends. NaN is never contained.
    pub fn contains(&self, depth: f32) -> bool {
        depth >= self.min && depth <= self.max
    }

    /// Clip `depth` into the range and scale it to a palette index.
    pub fn intensity(&self, depth: f32) -> u8 {
        let clipped = f64::from(depth.clamp(self.min, self.max));
        let min = f64::from(self.min);
        let t = (clipped - min) / (f64::from(self.max) - min);
        (t * 255.0).round().clamp(0.0, 255.0) as u8
    }
}

/// Color of a single pixel. The mask is decided on the raw depth, the color
/// on the clipped one.
#[inline]
fn colorize_pixel(depth: f32, amplitude: f32, bounds: &RangeBounds, threshold: f32) -> [u8; 3] {
    if !bounds.contains(depth) || amplitude < threshold {
        return MASKED;
    }
    rainbow(bounds.intensity(depth))
}

/// Render `depth` through the rainbow palette, blacking out pixels outside
/// `bounds`, NaN pixels, and pixels whose amplitude is below 30.
pub fn colorize(depth: &FloatGrid, amplitude: &FloatGrid, bounds: RangeBounds) -> Result<RgbImage> {
    colorize_with_threshold(depth, amplitude, bounds, DEFAULT_CONFIDENCE_THRESHOLD)
}

/// [`colorize`] with an explicit confidence threshold.
pub fn colorize_with_threshold(
    depth: &FloatGrid,
    amplitude: &FloatGrid,
    bounds: RangeBounds,
    threshold: f32,
) -> Result<RgbImage> {
    if depth.dim() != amplitude.dim() {
        return Err(Error::GridMismatch {
            depth: depth.dim(),
            amplitude: amplitude.dim(),
        });
    }

    let pixels: Array2<[u8; 3]> = Zip::from(depth.view())
        .and(amplitude.view())
        .par_map_collect(|&d, &a| colorize_pixel(d, a, &bounds, threshold));

    let masked = pixels.iter().filter(|&&p| p == MASKED).count();
    debug!(
        "depth range [{}, {}]: {} of {} pixels masked",
        bounds.min,
        bounds.max,
        masked,
        pixels.len()
    );

    let (rows, cols) = pixels.dim();
    Ok(RgbImage::from_fn(cols as u32, rows as u32, |x, y| {
        Rgb(pixels[(y as usize, x as usize)])
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FrameShape;
    use crate::palette::RAINBOW;

    fn grid(h: usize, w: usize, values: Vec<f32>) -> FloatGrid {
        FloatGrid::from_vec(values, FrameShape::new(h, w).unwrap()).unwrap()
    }

    fn bounds(min: f32, max: f32) -> RangeBounds {
        RangeBounds::new(min, max).unwrap()
    }

    #[test]
    fn range_must_be_increasing() {
        assert!(matches!(
            RangeBounds::new(10.0, 10.0),
            Err(Error::InvalidRange { .. })
        ));
        assert!(matches!(
            RangeBounds::new(10.0, 2.0),
            Err(Error::InvalidRange { .. })
        ));
        assert!(RangeBounds::new(f32::NAN, 1.0).is_err());
        assert!(RangeBounds::new(0.0, f32::NAN).is_err());
    }

    #[test]
    fn infinite_bounds_rejected() {
        for (min, max) in [
            (f32::NEG_INFINITY, 10.0),
            (0.0, f32::INFINITY),
            (f32::NEG_INFINITY, f32::INFINITY),
        ] {
            assert!(
                matches!(RangeBounds::new(min, max), Err(Error::InvalidRange { .. })),
                "[{}, {}]",
                min,
                max
            );
        }
        assert!(RangeBounds::new(f32::MIN, f32::MAX).is_ok());
    }

    #[test]
    fn intensity_endpoints_and_midpoint() {
        let b = bounds(0.0, 10.0);
        assert_eq!(b.intensity(0.0), 0);
        assert_eq!(b.intensity(5.0), 128);
        assert_eq!(b.intensity(10.0), 255);
        // clipping
        assert_eq!(b.intensity(-3.0), 0);
        assert_eq!(b.intensity(42.0), 255);
    }

    #[test]
    fn two_by_two_example() {
        let depth = grid(2, 2, vec![0.0, 5.0, 10.0, 15.0]);
        let amplitude = grid(2, 2, vec![100.0; 4]);
        let img = colorize(&depth, &amplitude, bounds(0.0, 10.0)).unwrap();

        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.get_pixel(0, 0).0, RAINBOW[0]);
        assert_eq!(img.get_pixel(1, 0).0, RAINBOW[128]);
        assert_eq!(img.get_pixel(0, 1).0, RAINBOW[255]);
        assert_eq!(img.get_pixel(1, 1).0, MASKED);
    }

    #[test]
    fn low_amplitude_is_masked() {
        let depth = grid(1, 3, vec![5.0, 5.0, 5.0]);
        let amplitude = grid(1, 3, vec![29.99, 30.0, f32::NAN]);
        let img = colorize(&depth, &amplitude, bounds(0.0, 10.0)).unwrap();

        assert_eq!(img.get_pixel(0, 0).0, MASKED);
        assert_eq!(img.get_pixel(1, 0).0, RAINBOW[128]);
        // NaN amplitude does not compare below the threshold
        assert_eq!(img.get_pixel(2, 0).0, RAINBOW[128]);
    }

    #[test]
    fn nan_and_out_of_range_depth_masked() {
        let depth = grid(1, 4, vec![f32::NAN, -0.001, 10.001, f32::INFINITY]);
        let amplitude = grid(1, 4, vec![100.0; 4]);
        let img = colorize(&depth, &amplitude, bounds(0.0, 10.0)).unwrap();
        assert!(img.pixels().all(|p| p.0 == MASKED));
    }

    #[test]
    fn custom_threshold() {
        let depth = grid(1, 2, vec![2.0, 8.0]);
        let amplitude = grid(1, 2, vec![5.0, 50.0]);
        let img = colorize_with_threshold(&depth, &amplitude, bounds(0.0, 10.0), 0.0).unwrap();
        assert!(img.pixels().all(|p| p.0 != MASKED));
        let img = colorize_with_threshold(&depth, &amplitude, bounds(0.0, 10.0), 60.0).unwrap();
        assert!(img.pixels().all(|p| p.0 == MASKED));
    }

    #[test]
    fn every_pixel_is_masked_or_from_palette() {
        let (h, w) = (6, 7);
        let depth: Vec<f32> = (0..h * w).map(|i| i as f32 * 0.37 - 2.0).collect();
        let amplitude: Vec<f32> = (0..h * w).map(|i| (i * 13 % 60) as f32).collect();
        let b = bounds(0.0, 12.0);
        let depth = grid(h, w, depth);
        let amplitude = grid(h, w, amplitude);
        let img = colorize(&depth, &amplitude, b).unwrap();

        for (x, y, p) in img.enumerate_pixels() {
            let d = depth.get(y as usize, x as usize).unwrap();
            let a = amplitude.get(y as usize, x as usize).unwrap();
            let should_mask = d < b.min() || d > b.max() || d.is_nan() || a < 30.0;
            if should_mask {
                assert_eq!(p.0, MASKED, "pixel ({}, {})", x, y);
            } else {
                assert_eq!(p.0, RAINBOW[b.intensity(d) as usize], "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn shape_mismatch_rejected() {
        let depth = grid(2, 2, vec![0.0; 4]);
        let amplitude = grid(1, 4, vec![100.0; 4]);
        let err = colorize(&depth, &amplitude, bounds(0.0, 1.0)).unwrap_err();
        assert!(matches!(
            err,
            Error::GridMismatch {
                depth: (2, 2),
                amplitude: (1, 4)
            }
        ));
    }
}
