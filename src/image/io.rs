//! I/O helpers for source images, result bitmaps and JSON.
//!
//! - `load_source_image`: decode a PNG/JPEG/BMP/TIFF into a [`LoadedImage`].
//! - `save_rgb_image`: write a rendered bitmap, creating parent directories.
//! - `next_free_path`: append `(n)` before the extension until the name is unused.
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::error::{LoadError, SaveError};
use image::{DynamicImage, GrayImage, ImageError, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Decoded source image with its grayscale derivative.
#[derive(Clone, Debug)]
pub struct LoadedImage {
    path: PathBuf,
    source: DynamicImage,
    gray: GrayImage,
}

impl LoadedImage {
    /// Wrap an already decoded image and derive its grayscale buffer.
    pub fn from_dynamic(path: impl Into<PathBuf>, source: DynamicImage) -> Self {
        let gray = source.to_luma8();
        Self {
            path: path.into(),
            source,
            gray,
        }
    }

    /// Path the image was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.source.width()
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.source.height()
    }

    /// Channel count of the decoded source (1 gray, 2 gray+alpha, 3 RGB, 4 RGBA)
    pub fn channels(&self) -> u8 {
        self.source.color().channel_count()
    }

    pub fn gray(&self) -> &GrayImage {
        &self.gray
    }

    /// Unmodified source converted to 8-bit RGB for display.
    pub fn to_rgb(&self) -> RgbImage {
        self.source.to_rgb8()
    }
}

/// Load an image from disk, keeping the decoded source and an 8-bit gray copy.
pub fn load_source_image(path: &Path) -> Result<LoadedImage, LoadError> {
    let source = image::open(path).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    if source.width() == 0 || source.height() == 0 {
        return Err(LoadError::EmptyImage {
            path: path.to_path_buf(),
        });
    }
    Ok(LoadedImage::from_dynamic(path, source))
}

/// Save an RGB bitmap; the format follows the file extension.
pub fn save_rgb_image(image: &RgbImage, path: &Path) -> Result<(), SaveError> {
    let write_err = |source| SaveError::Write {
        path: path.to_path_buf(),
        source,
    };
    ensure_parent_dir(path).map_err(|e| write_err(ImageError::IoError(e)))?;
    image.save(path).map_err(write_err)
}

/// Return `requested` if it is free, otherwise the first `stem(n).ext` that is.
pub fn next_free_path(requested: &Path) -> PathBuf {
    if !requested.exists() {
        return requested.to_path_buf();
    }
    let parent = requested.parent().unwrap_or_else(|| Path::new(""));
    let stem = requested
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = requested
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let mut counter = 1u32;
    loop {
        let candidate = parent.join(format!("{stem}({counter}){ext}"));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)
        .map_err(|e| format!("Failed to create parent of {}: {e}", path.display()))?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb};

    #[test]
    fn collision_appends_counter_before_extension() {
        let dir = tempfile::tempdir().expect("tempdir");
        let requested = dir.path().join("out.png");
        assert_eq!(next_free_path(&requested), requested);

        fs::write(&requested, b"x").unwrap();
        let first = next_free_path(&requested);
        assert_eq!(first, dir.path().join("out(1).png"));

        fs::write(&first, b"x").unwrap();
        assert_eq!(next_free_path(&requested), dir.path().join("out(2).png"));
    }

    #[test]
    fn collision_without_extension() {
        let dir = tempfile::tempdir().expect("tempdir");
        let requested = dir.path().join("result");
        fs::write(&requested, b"x").unwrap();
        assert_eq!(next_free_path(&requested), dir.path().join("result(1)"));
    }

    #[test]
    fn gray_matches_source_dimensions() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("color.png");
        let mut rgb = RgbImage::new(37, 21);
        rgb.put_pixel(3, 4, Rgb([200, 10, 10]));
        rgb.save(&path).unwrap();

        let loaded = load_source_image(&path).expect("decodable");
        assert_eq!(loaded.channels(), 3);
        assert_eq!(loaded.gray().dimensions(), (37, 21));
        assert_eq!(loaded.to_rgb().get_pixel(3, 4), &Rgb([200, 10, 10]));
    }

    #[test]
    fn grayscale_source_keeps_single_channel() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("gray.png");
        GrayImage::from_pixel(8, 6, Luma([90])).save(&path).unwrap();

        let loaded = load_source_image(&path).expect("decodable");
        assert_eq!(loaded.channels(), 1);
        assert_eq!(loaded.gray().dimensions(), (8, 6));
        assert_eq!(loaded.gray().get_pixel(0, 0), &Luma([90]));
    }

    #[test]
    fn missing_file_is_a_decode_error() {
        let err = load_source_image(Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }), "{err:?}");
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/deeper/out.png");
        save_rgb_image(&RgbImage::new(4, 4), &path).expect("saved");
        assert!(path.exists());
    }
}
