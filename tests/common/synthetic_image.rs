use image::{GrayImage, Luma, Rgb, RgbImage};
use std::path::{Path, PathBuf};

const BACKGROUND: u8 = 30;
const FOREGROUND: u8 = 220;

/// Bright squares of side `side` on a dark background, laid out on a grid
/// with pitch `spacing` starting `margin` pixels from the top-left corner.
/// Every square contributes four well separated FAST corners.
pub fn bright_squares(width: u32, height: u32, side: u32, spacing: u32, margin: u32) -> GrayImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(side > 0 && spacing > side, "squares must not touch");

    let mut img = GrayImage::from_pixel(width, height, Luma([BACKGROUND]));
    let mut y0 = margin;
    while y0 + side + margin <= height {
        let mut x0 = margin;
        while x0 + side + margin <= width {
            for y in y0..y0 + side {
                for x in x0..x0 + side {
                    img.put_pixel(x, y, Luma([FOREGROUND]));
                }
            }
            x0 += spacing;
        }
        y0 += spacing;
    }
    img
}

/// 640x480 color scene used by the end-to-end tests.
pub fn squares_scene() -> RgbImage {
    let gray = bright_squares(640, 480, 20, 80, 50);
    RgbImage::from_fn(640, 480, |x, y| {
        let v = gray.get_pixel(x, y)[0];
        Rgb([v, v, v])
    })
}

/// Write the scene as a JPEG into `dir` and return its path.
pub fn write_scene_jpeg(dir: &Path) -> PathBuf {
    let path = dir.join("scene.jpg");
    squares_scene().save(&path).expect("write jpeg");
    path
}

/// Uniform image: no corners anywhere.
pub fn flat_gray(width: u32, height: u32) -> GrayImage {
    GrayImage::from_pixel(width, height, Luma([BACKGROUND]))
}
