//! FAST-9 corner candidates with 3×3 non-maximum suppression.
//!
//! Segment testing itself is delegated to `imageproc::corners::corners_fast9`;
//! this module keeps only local score maxima and drops corners too close to
//! the level border for the orientation and descriptor patches to fit.
use imageproc::corners::{corners_fast9, Corner};
use image::GrayImage;

/// FAST corners of `level` that are local maxima and at least `border`
/// pixels away from every image edge.
pub fn detect_corners(level: &GrayImage, threshold: u8, border: u32) -> Vec<Corner> {
    let (w, h) = level.dimensions();
    if w <= 2 * border || h <= 2 * border {
        return Vec::new();
    }
    let corners = corners_fast9(level, threshold);
    suppress_non_maxima(&corners, w, h)
        .into_iter()
        .filter(|c| c.x >= border && c.x < w - border && c.y >= border && c.y < h - border)
        .collect()
}

/// Keep a corner only if no 8-neighbour scores higher. Ties go to the
/// neighbour that comes first in raster order.
pub fn suppress_non_maxima(corners: &[Corner], w: u32, h: u32) -> Vec<Corner> {
    let (w, h) = (w as usize, h as usize);
    let mut scores = vec![0.0f32; w * h];
    let mut present = vec![false; w * h];
    for c in corners {
        let idx = c.y as usize * w + c.x as usize;
        scores[idx] = c.score;
        present[idx] = true;
    }

    corners
        .iter()
        .filter(|c| {
            let (cx, cy) = (c.x as usize, c.y as usize);
            let idx = cy * w + cx;
            for ny in cy.saturating_sub(1)..=(cy + 1).min(h - 1) {
                for nx in cx.saturating_sub(1)..=(cx + 1).min(w - 1) {
                    let nidx = ny * w + nx;
                    if nidx == idx || !present[nidx] {
                        continue;
                    }
                    if scores[nidx] > c.score || (scores[nidx] == c.score && nidx < idx) {
                        return false;
                    }
                }
            }
            true
        })
        .copied()
        .collect()
}

/// Keep the `n` highest-scoring corners, strongest first.
pub fn retain_best(corners: &mut Vec<Corner>, n: usize) {
    corners.sort_by(|a, b| b.score.total_cmp(&a.score));
    corners.truncate(n);
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn corner(x: u32, y: u32, score: f32) -> Corner {
        Corner::new(x, y, score)
    }

    #[test]
    fn nms_keeps_local_maximum_only() {
        let corners = vec![corner(5, 5, 10.0), corner(6, 5, 30.0), corner(9, 9, 4.0)];
        let kept = suppress_non_maxima(&corners, 20, 20);
        let coords: Vec<_> = kept.iter().map(|c| (c.x, c.y)).collect();
        assert_eq!(coords, vec![(6, 5), (9, 9)]);
    }

    #[test]
    fn nms_breaks_ties_in_raster_order() {
        let corners = vec![corner(5, 5, 10.0), corner(6, 5, 10.0)];
        let kept = suppress_non_maxima(&corners, 20, 20);
        assert_eq!(kept.len(), 1);
        assert_eq!((kept[0].x, kept[0].y), (5, 5));
    }

    #[test]
    fn retain_best_sorts_descending() {
        let mut corners = vec![corner(1, 1, 2.0), corner(2, 2, 9.0), corner(3, 3, 5.0)];
        retain_best(&mut corners, 2);
        let scores: Vec<_> = corners.iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![9.0, 5.0]);
    }

    #[test]
    fn bright_square_corners_respect_border() {
        let mut img = GrayImage::from_pixel(100, 100, Luma([20]));
        for y in 40..60 {
            for x in 40..60 {
                img.put_pixel(x, y, Luma([230]));
            }
        }
        let corners = detect_corners(&img, 20, 31);
        assert!(!corners.is_empty());
        for c in &corners {
            assert!((31..69).contains(&c.x) && (31..69).contains(&c.y), "{c:?}");
        }

        let tiny = GrayImage::from_pixel(60, 60, Luma([0]));
        assert!(detect_corners(&tiny, 20, 31).is_empty());
    }
}
