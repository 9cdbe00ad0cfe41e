//! PNG output next to the raw inputs.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, ImageFormat};
use tracing::info;

use crate::error::Result;

/// `depth.raw` -> `depth.raw.png`, in `out_dir` when given, otherwise beside
/// the input.
pub fn derive_output_path(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    let mut name = input
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("frame"));
    name.push(".png");
    match out_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}

/// Encode `image` as PNG at `path`.
pub fn write_png<I: Into<DynamicImage>>(image: I, path: &Path) -> Result<()> {
    let image = image.into();
    image.save_with_format(path, ImageFormat::Png)?;
    info!(
        "wrote {}x{} image to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn appends_png_to_full_name() {
        assert_eq!(
            derive_output_path(Path::new("capture/depth.raw"), None),
            PathBuf::from("capture/depth.raw.png")
        );
        assert_eq!(
            derive_output_path(Path::new("amp"), None),
            PathBuf::from("amp.png")
        );
    }

    #[test]
    fn redirects_to_out_dir() {
        assert_eq!(
            derive_output_path(Path::new("/data/frame_01.amp"), Some(Path::new("/tmp/out"))),
            PathBuf::from("/tmp/out/frame_01.amp.png")
        );
    }

    #[test]
    fn write_png_round_trips_gray() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        let img = GrayImage::from_fn(3, 2, |x, y| Luma([(x * 40 + y * 100) as u8]));
        write_png(img.clone(), &path).unwrap();

        let loaded = image::open(&path).unwrap();
        assert_eq!(loaded.color(), image::ColorType::L8);
        assert_eq!(loaded.to_luma8(), img);
    }

    #[test]
    fn write_png_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("x.png");
        assert!(write_png(GrayImage::new(1, 1), &path).is_err());
    }
}
