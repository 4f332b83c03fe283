//! Steered BRIEF descriptors.
//!
//! A fixed set of 256 point pairs is drawn once from a seeded RNG, so
//! descriptors are reproducible across runs and processes. Each pair is
//! rotated by the keypoint orientation before sampling the (pre-blurred)
//! level image; bit `i` is set when the first sample is darker than the
//! second.
use super::pixel_clamped;
use crate::types::Descriptor;
use image::GrayImage;
use nalgebra::{Point2, Rotation2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const PATTERN_SEED: u64 = 0x0b1e_f5ee_d031_0256;

#[derive(Clone, Debug)]
pub struct BriefPattern {
    pairs: Vec<[Point2<f32>; 2]>,
}

impl BriefPattern {
    /// Draw `Descriptor::BITS` distinct point pairs with integer offsets in
    /// `[-half_extent, half_extent]`.
    pub fn seeded(seed: u64, half_extent: i32) -> Self {
        let half_extent = half_extent.max(1);
        let mut rng = StdRng::seed_from_u64(seed);
        let sample = |rng: &mut StdRng| {
            Point2::new(
                rng.gen_range(-half_extent..=half_extent) as f32,
                rng.gen_range(-half_extent..=half_extent) as f32,
            )
        };
        let pairs = (0..Descriptor::BITS)
            .map(|_| {
                let a = sample(&mut rng);
                let mut b = sample(&mut rng);
                while b == a {
                    b = sample(&mut rng);
                }
                [a, b]
            })
            .collect();
        Self { pairs }
    }

    /// Pattern sized for a square patch of side `patch_size`.
    pub fn for_patch(patch_size: u32) -> Self {
        Self::seeded(PATTERN_SEED, patch_size as i32 / 2 - 2)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Describe the keypoint at level coordinates `(x, y)` with orientation
    /// `angle_deg`. `blurred` is the smoothed level image.
    pub fn describe(&self, blurred: &GrayImage, x: u32, y: u32, angle_deg: f32) -> Descriptor {
        let rot = Rotation2::new(angle_deg.to_radians());
        let (cx, cy) = (x as i32, y as i32);
        let sample = |p: &Point2<f32>| {
            let q = rot * *p;
            pixel_clamped(blurred, cx + q.x.round() as i32, cy + q.y.round() as i32)
        };

        let mut bytes = [0u8; 32];
        for (i, [a, b]) in self.pairs.iter().enumerate() {
            if sample(a) < sample(b) {
                bytes[i / 8] |= 1 << (i % 8);
            }
        }
        Descriptor(bytes)
    }
}
