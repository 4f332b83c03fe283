//! Result bitmaps: keypoint overlay and convex-hull outline.
//!
//! Both renderers start from a color-converted copy of the grayscale buffer
//! and draw in pure green.

pub mod hull;
pub mod keypoints;

use crate::types::{KeyPoint, ViewMode};
use image::{DynamicImage, GrayImage, Rgb, RgbImage};

pub use hull::{bounding_hull, render_bounding_hull};
pub use keypoints::render_keypoints;

pub const OVERLAY_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Render the bitmap for `mode`.
pub fn render(mode: ViewMode, gray: &GrayImage, keypoints: &[KeyPoint]) -> RgbImage {
    match mode {
        ViewMode::Keypoints => render_keypoints(gray, keypoints),
        ViewMode::BoundingHull => render_bounding_hull(gray, keypoints),
    }
}

/// Gray → 3-channel RGB with identical channels.
pub fn gray_to_rgb(gray: &GrayImage) -> RgbImage {
    DynamicImage::ImageLuma8(gray.clone()).into_rgb8()
}
