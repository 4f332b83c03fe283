//! Keypoint orientation by intensity centroid.
use super::pixel_clamped;
use image::GrayImage;

/// Angle (degrees, `[0, 360)`) of the vector from `(cx, cy)` to the intensity
/// centroid of the disc of `radius` around it.
pub fn intensity_centroid_angle(img: &GrayImage, cx: u32, cy: u32, radius: i32) -> f32 {
    let (cx, cy) = (cx as i32, cy as i32);
    let r2 = radius * radius;
    let mut m01 = 0.0f64;
    let mut m10 = 0.0f64;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > r2 {
                continue;
            }
            let v = pixel_clamped(img, cx + dx, cy + dy) as f64;
            m10 += dx as f64 * v;
            m01 += dy as f64 * v;
        }
    }
    let angle = m01.atan2(m10).to_degrees().rem_euclid(360.0) as f32;
    // rem_euclid can round up to exactly 360 in f32
    if angle >= 360.0 {
        0.0
    } else {
        angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn half_plane(bright_right: bool, bright_below: bool) -> GrayImage {
        let mut img = GrayImage::new(41, 41);
        for y in 0..41u32 {
            for x in 0..41u32 {
                let horizontal = if bright_right { x > 20 } else { x < 20 };
                let vertical = if bright_below { y > 20 } else { y < 20 };
                let lit = horizontal && vertical;
                img.put_pixel(x, y, Luma([if lit { 250 } else { 0 }]));
            }
        }
        img
    }

    #[test]
    fn points_toward_bright_quadrant() {
        // +x right, +y down (image coordinates)
        let cases = [
            (true, true, 45.0),
            (false, true, 135.0),
            (false, false, 225.0),
            (true, false, 315.0),
        ];
        for (right, below, expected) in cases {
            let img = half_plane(right, below);
            let angle = intensity_centroid_angle(&img, 20, 20, 15);
            assert!((angle - expected).abs() < 1.0, "expected {expected}, got {angle}");
        }
    }

    #[test]
    fn uniform_patch_is_in_range() {
        let img = GrayImage::from_pixel(41, 41, Luma([77]));
        let angle = intensity_centroid_angle(&img, 20, 20, 15);
        assert!((0.0..360.0).contains(&angle));
    }
}
