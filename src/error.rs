//! Error types for tof-png

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, converting or writing a frame pair.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid element count (expected={expected}, actual={actual})")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("buffer of {len} bytes is not a whole number of f32 values")]
    TruncatedBuffer { len: usize },

    #[error("invalid frame dimensions: {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },

    #[error("min must be smaller than max (min={min}, max={max})")]
    InvalidRange { min: f32, max: f32 },

    #[error("depth grid {depth:?} and amplitude grid {amplitude:?} differ in shape")]
    GridMismatch {
        depth: (usize, usize),
        amplitude: (usize, usize),
    },

    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
