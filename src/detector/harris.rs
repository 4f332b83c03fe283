//! Harris corner response used to rank FAST candidates.
use super::pixel_clamped;
use image::GrayImage;
use nalgebra::Matrix2;

/// Harris response `det(M) - k·trace(M)²` of the Sobel structure tensor `M`
/// accumulated over a `block_size` window centred on `(x, y)`.
///
/// Gradients are normalised by `4 · block_size · 255` so the response does
/// not depend on the window area.
pub fn harris_response(img: &GrayImage, x: u32, y: u32, block_size: u32, k: f32) -> f32 {
    let block = block_size.max(1) as i32;
    let start = -(block / 2);
    let norm = 1.0 / (4.0 * block as f32 * 255.0);
    let (cx, cy) = (x as i32, y as i32);
    let p = |dx: i32, dy: i32| pixel_clamped(img, cx + dx, cy + dy) as f32;

    let mut tensor = Matrix2::<f32>::zeros();
    for dy in start..start + block {
        for dx in start..start + block {
            let gx = (p(dx + 1, dy - 1) + 2.0 * p(dx + 1, dy) + p(dx + 1, dy + 1))
                - (p(dx - 1, dy - 1) + 2.0 * p(dx - 1, dy) + p(dx - 1, dy + 1));
            let gy = (p(dx - 1, dy + 1) + 2.0 * p(dx, dy + 1) + p(dx + 1, dy + 1))
                - (p(dx - 1, dy - 1) + 2.0 * p(dx, dy - 1) + p(dx + 1, dy - 1));
            let (gx, gy) = (gx * norm, gy * norm);
            tensor += Matrix2::new(gx * gx, gx * gy, gx * gy, gy * gy);
        }
    }
    tensor.determinant() - k * tensor.trace().powi(2)
}
