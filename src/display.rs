//! Fit-to-pane scaling for the two image panes.
//!
//! A pane holds the pixmap it currently shows, already scaled to fit its
//! size with the aspect ratio preserved. The processed pane resamples with a
//! smooth filter, the original pane with a fast one.
use image::imageops::{self, FilterType};
use image::RgbImage;

pub const PLACEHOLDER_TEXT: &str = "No Image Loaded";
pub const PROCESSED_PANE_SIZE: (u32, u32) = (680, 420);
pub const ORIGINAL_PANE_SIZE: (u32, u32) = (300, 200);

/// Largest `(w, h)` that fits in `pane` with the aspect ratio of `src`.
/// Each side is at least 1 unless `src` itself is empty.
pub fn fit_within(src: (u32, u32), pane: (u32, u32)) -> (u32, u32) {
    if src.0 == 0 || src.1 == 0 {
        return (0, 0);
    }
    let scale = (pane.0 as f64 / src.0 as f64).min(pane.1 as f64 / src.1 as f64);
    let w = ((src.0 as f64 * scale).round() as u32).clamp(1, pane.0.max(1));
    let h = ((src.1 as f64 * scale).round() as u32).clamp(1, pane.1.max(1));
    (w, h)
}

#[derive(Clone, Debug)]
pub struct DisplayPane {
    size: (u32, u32),
    filter: FilterType,
    pixmap: Option<RgbImage>,
}

impl DisplayPane {
    pub fn new(size: (u32, u32), filter: FilterType) -> Self {
        Self {
            size,
            filter,
            pixmap: None,
        }
    }

    /// Pane for the processed result (smooth scaling).
    pub fn processed() -> Self {
        Self::new(PROCESSED_PANE_SIZE, FilterType::Triangle)
    }

    /// Pane for the untouched source (fast scaling).
    pub fn original() -> Self {
        Self::new(ORIGINAL_PANE_SIZE, FilterType::Nearest)
    }

    /// Scale `image` into the pane and keep the result.
    pub fn show(&mut self, image: &RgbImage) {
        let (w, h) = fit_within(image.dimensions(), self.size);
        self.pixmap = Some(if (w, h) == image.dimensions() {
            image.clone()
        } else {
            imageops::resize(image, w, h, self.filter)
        });
    }

    pub fn pixmap(&self) -> Option<&RgbImage> {
        self.pixmap.as_ref()
    }

    /// Short text for a status line.
    pub fn describe(&self) -> String {
        match &self.pixmap {
            Some(p) => format!(
                "{}x{} in {}x{} pane",
                p.width(),
                p.height(),
                self.size.0,
                self.size.1
            ),
            None => PLACEHOLDER_TEXT.to_string(),
        }
    }
}
