//! Load a depth/amplitude pair, render both images, write them out.

use std::fs;
use std::path::{Path, PathBuf};

use image::{GrayImage, RgbImage};
use tracing::debug;

use crate::colorize::{colorize_with_threshold, RangeBounds};
use crate::config::ConvertConfig;
use crate::error::{Error, Result};
use crate::grid::FloatGrid;
use crate::normalize::normalize;
use crate::output::{derive_output_path, write_png};

/// The two images produced from one frame pair.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub depth: RgbImage,
    pub amplitude: GrayImage,
}

/// Where [`convert`] put its images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outputs {
    pub depth: PathBuf,
    pub amplitude: PathBuf,
}

/// Run both transforms concurrently.
pub fn render(
    depth: &FloatGrid,
    amplitude: &FloatGrid,
    bounds: RangeBounds,
    threshold: f32,
) -> Result<Rendered> {
    let (color, gray) = rayon::join(
        || colorize_with_threshold(depth, amplitude, bounds, threshold),
        || normalize(amplitude),
    );
    Ok(Rendered {
        depth: color?,
        amplitude: gray,
    })
}

/// Convert one raw frame pair to PNG files. Nothing is written unless both
/// frames load and render.
pub fn convert(
    amplitude_path: &Path,
    depth_path: &Path,
    bounds: RangeBounds,
    config: &ConvertConfig,
) -> Result<Outputs> {
    let depth = FloatGrid::load(depth_path, config.shape)?;
    let amplitude = FloatGrid::load(amplitude_path, config.shape)?;
    debug!("loaded {}x{} frame pair", depth.height(), depth.width());

    let rendered = render(&depth, &amplitude, bounds, config.confidence_threshold)?;

    let out_dir = config.out_dir.as_deref();
    if let Some(dir) = out_dir {
        fs::create_dir_all(dir).map_err(|source| Error::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    let outputs = Outputs {
        depth: derive_output_path(depth_path, out_dir),
        amplitude: derive_output_path(amplitude_path, out_dir),
    };
    write_png(rendered.depth, &outputs.depth)?;
    write_png(rendered.amplitude, &outputs.amplitude)?;
    Ok(outputs)
}
