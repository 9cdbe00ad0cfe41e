//! Convert raw time-of-flight frames to PNG images.
//!
//! A depth frame becomes a false-color image: depths inside a caller-given
//! range are mapped through a fixed rainbow palette, everything outside the
//! range, NaN, or backed by a weak amplitude is drawn black. An amplitude
//! frame becomes a grayscale image stretched between its 2nd and 98th
//! percentiles.
//!
//! ```ignore
//! use tof_png::{colorize, normalize, FloatGrid, FrameShape, RangeBounds};
//!
//! let shape = FrameShape::default();
//! let depth = FloatGrid::load("frame.depth", shape)?;
//! let amplitude = FloatGrid::load("frame.amp", shape)?;
//! let color = colorize(&depth, &amplitude, RangeBounds::new(0.0, 4000.0)?)?;
//! let gray = normalize(&amplitude);
//! ```

pub mod colorize;
pub mod config;
pub mod error;
pub mod grid;
pub mod normalize;
pub mod output;
pub mod palette;
pub mod pipeline;

pub use colorize::{colorize, colorize_with_threshold, RangeBounds};
pub use config::{
    ConvertConfig, FrameShape, DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_HEIGHT, DEFAULT_WIDTH,
};
pub use error::{Error, Result};
pub use grid::FloatGrid;
pub use normalize::{normalize, AutoGain};
pub use output::{derive_output_path, write_png};
pub use palette::RAINBOW;
pub use pipeline::{convert, render, Outputs, Rendered};
