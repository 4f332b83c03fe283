use super::{gray_to_rgb, OVERLAY_COLOR};
use crate::types::KeyPoint;
use image::{GrayImage, RgbImage};
use imageproc::drawing::draw_line_segment_mut;
use imageproc::geometry::convex_hull;
use imageproc::point::Point;

/// Below this many keypoints no hull is drawn.
pub const MIN_HULL_KEYPOINTS: usize = 5;
pub const OUTLINE_THICKNESS: i32 = 2;

/// Convex hull of the keypoint coordinates (rounded to pixels), or `None`
/// when there are 4 keypoints or fewer.
pub fn bounding_hull(keypoints: &[KeyPoint]) -> Option<Vec<Point<i32>>> {
    if keypoints.len() < MIN_HULL_KEYPOINTS {
        return None;
    }
    let points: Vec<Point<i32>> = keypoints
        .iter()
        .map(|kp| Point::new(kp.x.round() as i32, kp.y.round() as i32))
        .collect();
    Some(convex_hull(points.as_slice()))
}

/// Gray image with the closed hull outline drawn over it. With too few
/// keypoints the plain color-converted image is returned.
pub fn render_bounding_hull(gray: &GrayImage, keypoints: &[KeyPoint]) -> RgbImage {
    let mut out = gray_to_rgb(gray);
    if let Some(hull) = bounding_hull(keypoints) {
        draw_closed_polyline(&mut out, &hull, OUTLINE_THICKNESS);
    }
    out
}

fn draw_closed_polyline(canvas: &mut RgbImage, vertices: &[Point<i32>], thickness: i32) {
    if vertices.is_empty() {
        return;
    }
    for (i, start) in vertices.iter().enumerate() {
        let end = vertices[(i + 1) % vertices.len()];
        for oy in 0..thickness {
            for ox in 0..thickness {
                draw_line_segment_mut(
                    canvas,
                    ((start.x + ox) as f32, (start.y + oy) as f32),
                    ((end.x + ox) as f32, (end.y + oy) as f32),
                    OVERLAY_COLOR,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn keypoints(coords: &[(f32, f32)]) -> Vec<KeyPoint> {
        coords
            .iter()
            .map(|&(x, y)| KeyPoint {
                x,
                y,
                size: 31.0,
                angle: 0.0,
                response: 1.0,
                octave: 0,
            })
            .collect()
    }

    fn cross(o: Point<i32>, a: Point<i32>, b: Point<i32>) -> i64 {
        (a.x - o.x) as i64 * (b.y - o.y) as i64 - (a.y - o.y) as i64 * (b.x - o.x) as i64
    }

    #[test]
    fn four_or_fewer_keypoints_draw_nothing() {
        let gray = GrayImage::from_pixel(50, 50, Luma([100]));
        let kps = keypoints(&[(10.0, 10.0), (40.0, 10.0), (40.0, 40.0), (10.0, 40.0)]);
        assert!(bounding_hull(&kps).is_none());
        let out = render_bounding_hull(&gray, &kps);
        assert!(out.pixels().all(|p| p.0 == [100, 100, 100]));
    }

    #[test]
    fn hull_encloses_all_keypoints() {
        let kps = keypoints(&[
            (10.0, 10.0),
            (40.0, 12.0),
            (25.0, 25.0),
            (38.6, 41.2),
            (12.0, 38.0),
            (26.0, 45.0),
            (30.0, 18.0),
        ]);
        let hull = bounding_hull(&kps).expect("enough keypoints");
        let rounded: Vec<Point<i32>> = kps
            .iter()
            .map(|k| Point::new(k.x.round() as i32, k.y.round() as i32))
            .collect();

        assert_eq!(hull.len(), 5);
        for v in &hull {
            assert!(rounded.contains(v), "{v:?} is not an input point");
        }
        assert!(!hull.contains(&Point::new(25, 25)));

        let n = hull.len();
        let orientation = cross(hull[0], hull[1], hull[2]).signum();
        assert_ne!(orientation, 0);
        for i in 0..n {
            let (a, b) = (hull[i], hull[(i + 1) % n]);
            for p in &rounded {
                let side = cross(a, b, *p);
                assert!(
                    side == 0 || side.signum() == orientation,
                    "{p:?} outside edge {a:?}->{b:?}"
                );
            }
        }
    }

    #[test]
    fn outline_is_drawn_for_five_keypoints() {
        let gray = GrayImage::from_pixel(60, 60, Luma([0]));
        let kps = keypoints(&[
            (10.0, 10.0),
            (50.0, 10.0),
            (50.0, 50.0),
            (10.0, 50.0),
            (30.0, 30.0),
        ]);
        let out = render_bounding_hull(&gray, &kps);
        assert_eq!(out.dimensions(), (60, 60));
        assert_eq!(out.get_pixel(30, 10), &OVERLAY_COLOR);
        assert_eq!(out.get_pixel(30, 11), &OVERLAY_COLOR);
        assert_eq!(out.get_pixel(10, 30), &OVERLAY_COLOR);
        assert_eq!(out.get_pixel(30, 30).0, [0, 0, 0]);
    }
}
