//! Raw float frames.

use std::fs;
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};
use ndarray::{Array2, ArrayView2};
use tracing::debug;

use crate::config::FrameShape;
use crate::error::{Error, Result};

/// An immutable height x width grid of f32 samples, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatGrid {
    data: Array2<f32>,
}

impl FloatGrid {
    /// Build a grid from row-major values. The value count must match `shape`.
    pub fn from_vec(values: Vec<f32>, shape: FrameShape) -> Result<Self> {
        let expected = shape.pixel_count();
        let actual = values.len();
        if actual != expected {
            return Err(Error::ShapeMismatch { expected, actual });
        }
        let data = Array2::from_shape_vec(shape.dim(), values)
            .map_err(|_| Error::ShapeMismatch { expected, actual })?;
        Ok(Self { data })
    }

    /// Decode a headerless buffer of little-endian f32 values.
    pub fn from_bytes(bytes: &[u8], shape: FrameShape) -> Result<Self> {
        if bytes.len() % 4 != 0 {
            return Err(Error::TruncatedBuffer { len: bytes.len() });
        }
        let mut values = vec![0f32; bytes.len() / 4];
        LittleEndian::read_f32_into(bytes, &mut values);
        Self::from_vec(values, shape)
    }

    /// Read a raw frame file.
    pub fn load<P: AsRef<Path>>(path: P, shape: FrameShape) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("{}: {} bytes", path.display(), bytes.len());
        Self::from_bytes(&bytes, shape)
    }

    /// Wrap an existing array. Any shape is accepted.
    pub fn from_array(data: Array2<f32>) -> Self {
        Self { data }
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    /// `(height, width)`.
    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        self.data.get((row, col)).copied()
    }

    pub fn view(&self) -> ArrayView2<'_, f32> {
        self.data.view()
    }

    /// Multiply every sample by `k`.
    pub fn scaled(&self, k: f32) -> Self {
        Self::from_array(self.data.mapv(|v| v * k))
    }
}
