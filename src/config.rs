//! Frame geometry and conversion settings.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Rows in a frame delivered by the sensor.
pub const DEFAULT_HEIGHT: usize = 180;
/// Columns in a frame delivered by the sensor.
pub const DEFAULT_WIDTH: usize = 240;
/// Amplitude below which a depth reading is not trusted.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 30.0;

/// Height and width of a raw frame, both non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameShape {
    height: usize,
    width: usize,
}

impl FrameShape {
    pub fn new(height: usize, width: usize) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(Error::InvalidDimensions { height, width });
        }
        Ok(Self { height, width })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of f32 values a raw frame of this shape holds.
    pub fn pixel_count(&self) -> usize {
        self.height * self.width
    }

    pub fn dim(&self) -> (usize, usize) {
        (self.height, self.width)
    }
}

impl Default for FrameShape {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
        }
    }
}

/// Settings for one depth/amplitude conversion run.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub shape: FrameShape,
    pub confidence_threshold: f32,
    /// Directory for the PNG files. `None` writes next to each input.
    pub out_dir: Option<PathBuf>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            shape: FrameShape::default(),
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            out_dir: None,
        }
    }
}
