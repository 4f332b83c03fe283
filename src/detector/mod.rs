//! ORB keypoint detector (oriented FAST + steered BRIEF).
//!
//! Overview
//! - Builds a scale pyramid whose levels shrink by `scale_factor`.
//! - Splits the feature budget geometrically across levels.
//! - On each level (in parallel): FAST-9 candidates, 3×3 non-maximum
//!   suppression, border rejection, pre-selection of twice the budget by FAST
//!   score, final selection by Harris response.
//! - Orients each keypoint by the intensity centroid of its patch and samples
//!   a rotated BRIEF pattern on a Gaussian-blurred copy of the level.
//! - Scales coordinates back to full resolution.
//!
//! Modules
//! - [`params`] – detector parameters and per-level budgets.
//! - [`pyramid`] – the scale pyramid.
//! - [`fast`] – FAST candidates, NMS and ranking.
//! - [`harris`] – corner response.
//! - [`orientation`] – intensity-centroid angle.
//! - [`brief`] – seeded sampling pattern and descriptor extraction.
//! - `pipeline` – the [`OrbDetector`] tying the stages together.
//!
//! Key Ideas
//! - Output order is level-major and, within a level, by descending
//!   response. Callers truncating the list must not assume a global order.
//! - Detection is deterministic: the BRIEF pattern is seeded and the
//!   parallel per-level results are collected in level order.

pub mod brief;
pub mod fast;
pub mod harris;
pub mod orientation;
pub mod params;
mod pipeline;
pub mod pyramid;

use image::GrayImage;

pub use params::OrbParams;
pub use pipeline::{Detection, OrbDetector};

/// Pixel value at `(x, y)` with coordinates clamped to the image.
#[inline]
pub(crate) fn pixel_clamped(img: &GrayImage, x: i32, y: i32) -> u8 {
    let (w, h) = img.dimensions();
    let x = x.clamp(0, w as i32 - 1) as u32;
    let y = y.clamp(0, h as i32 - 1) as u32;
    img.get_pixel(x, y)[0]
}
