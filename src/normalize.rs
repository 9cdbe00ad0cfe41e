//! Percentile auto-contrast for amplitude frames.

use image::{GrayImage, Luma};
use ndarray::{Array2, Zip};
use rayon::prelude::*;
use tracing::debug;

use crate::grid::FloatGrid;

/// Percentile mapped to black.
pub const LOW_PERCENTILE: f64 = 2.0;
/// Percentile mapped to white.
pub const HIGH_PERCENTILE: f64 = 98.0;

/// `q`-th percentile (0..=100) of an ascending slice, interpolating linearly
/// between the order statistics around rank `(n - 1) * q / 100`.
pub fn percentile(sorted: &[f64], q: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let rank = last as f64 * (q / 100.0).clamp(0.0, 1.0);
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Linear stretch mapping `low` to 0 and `high` to 255.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoGain {
    pub low: f64,
    pub high: f64,
}

impl AutoGain {
    /// Estimate the stretch from the 2nd/98th percentiles of the finite
    /// samples, widening to min/max when the percentiles coincide.
    /// `None` when the samples have no spread at all.
    pub fn estimate(amplitude: &FloatGrid) -> Option<Self> {
        let mut values: Vec<f64> = amplitude
            .view()
            .iter()
            .filter(|v| v.is_finite())
            .map(|&v| f64::from(v))
            .collect();
        values.par_sort_unstable_by(f64::total_cmp);

        let mut low = percentile(&values, LOW_PERCENTILE)?;
        let mut high = percentile(&values, HIGH_PERCENTILE)?;
        if high <= low {
            low = values[0];
            high = values[values.len() - 1];
        }
        if high <= low {
            return None;
        }
        Some(Self { low, high })
    }

    pub fn gain(&self) -> f64 {
        255.0 / (self.high - self.low)
    }

    pub fn offset(&self) -> f64 {
        -self.low * self.gain()
    }

    /// Stretch one sample. Non-finite samples map to 0.
    #[inline]
    pub fn apply(&self, value: f32) -> u8 {
        if !value.is_finite() {
            return 0;
        }
        (f64::from(value) * self.gain() + self.offset())
            .round()
            .clamp(0.0, 255.0) as u8
    }
}

/// Convert an amplitude frame to 8-bit grayscale with a 2%/98% percentile
/// stretch. A frame without spread comes out all black.
pub fn normalize(amplitude: &FloatGrid) -> GrayImage {
    let (rows, cols) = amplitude.dim();

    let gain = match AutoGain::estimate(amplitude) {
        Some(gain) => gain,
        None => {
            debug!("amplitude has no spread, emitting black frame");
            return GrayImage::new(cols as u32, rows as u32);
        }
    };
    debug!(
        "amplitude stretch p{}={:.3} p{}={:.3} gain={:.4} offset={:.3}",
        LOW_PERCENTILE,
        gain.low,
        HIGH_PERCENTILE,
        gain.high,
        gain.gain(),
        gain.offset()
    );

    let levels: Array2<u8> = Zip::from(amplitude.view()).par_map_collect(|&a| gain.apply(a));
    GrayImage::from_fn(cols as u32, rows as u32, |x, y| {
        Luma([levels[(y as usize, x as usize)]])
    })
}
