use super::{gray_to_rgb, OVERLAY_COLOR};
use crate::types::KeyPoint;
use image::{GrayImage, RgbImage};
use imageproc::drawing::draw_hollow_circle_mut;

pub const MARKER_RADIUS: i32 = 3;

/// Draw every keypoint as a small hollow circle.
pub fn render_keypoints(gray: &GrayImage, keypoints: &[KeyPoint]) -> RgbImage {
    let mut out = gray_to_rgb(gray);
    for kp in keypoints {
        draw_hollow_circle_mut(
            &mut out,
            (kp.x.round() as i32, kp.y.round() as i32),
            MARKER_RADIUS,
            OVERLAY_COLOR,
        );
    }
    out
}
