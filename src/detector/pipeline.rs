use super::brief::BriefPattern;
use super::fast::{detect_corners, retain_best};
use super::harris::harris_response;
use super::orientation::intensity_centroid_angle;
use super::params::OrbParams;
use super::pyramid::{PyramidLevel, ScalePyramid};
use crate::diagnostics::{elapsed_ms, TimingBreakdown};
use crate::types::{Descriptor, KeyPoint};
use image::GrayImage;
use imageproc::filter::gaussian_blur_f32;
use log::debug;
use rayon::prelude::*;
use std::time::Instant;

/// Keypoints with their parallel descriptors, in detector order.
#[derive(Clone, Debug, Default)]
pub struct Detection {
    pub keypoints: Vec<KeyPoint>,
    pub descriptors: Vec<Descriptor>,
    pub timings: TimingBreakdown,
}

impl Detection {
    pub fn len(&self) -> usize {
        self.keypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keypoints.is_empty()
    }
}

struct LevelOutput {
    index: usize,
    width: u32,
    height: u32,
    candidates: usize,
    keypoints: Vec<KeyPoint>,
    descriptors: Vec<Descriptor>,
    elapsed_ms: f64,
}

pub struct OrbDetector {
    params: OrbParams,
    pattern: BriefPattern,
}

impl Default for OrbDetector {
    fn default() -> Self {
        Self::new(OrbParams::default())
    }
}

impl OrbDetector {
    pub fn new(params: OrbParams) -> Self {
        let pattern = BriefPattern::for_patch(params.patch_size);
        Self { params, pattern }
    }

    pub fn params(&self) -> &OrbParams {
        &self.params
    }

    /// Detect keypoints on every pyramid level and describe them.
    ///
    /// Output is level-major (level 0 first); within a level keypoints are
    /// ordered by descending Harris response.
    pub fn detect_and_compute(&self, gray: &GrayImage) -> Detection {
        let t0 = Instant::now();

        let pyramid_start = Instant::now();
        let pyramid = ScalePyramid::build(gray, &self.params);
        let pyramid_ms = elapsed_ms(pyramid_start);

        let budgets = self.params.level_budgets();
        let outputs: Vec<LevelOutput> = pyramid
            .levels
            .par_iter()
            .map(|level| {
                let budget = budgets.get(level.index).copied().unwrap_or(0);
                self.process_level(level, budget)
            })
            .collect();

        let mut timings = TimingBreakdown::default();
        timings.push("pyramid", pyramid_ms);
        let mut keypoints = Vec::new();
        let mut descriptors = Vec::new();
        for out in outputs {
            debug!(
                "ORB level {} ({}x{}): {} candidates -> {} keypoints in {:.3} ms",
                out.index,
                out.width,
                out.height,
                out.candidates,
                out.keypoints.len(),
                out.elapsed_ms
            );
            timings.push(format!("level{}", out.index), out.elapsed_ms);
            keypoints.extend(out.keypoints);
            descriptors.extend(out.descriptors);
        }
        timings.total_ms = elapsed_ms(t0);
        debug!(
            "ORB detected {} keypoints in {:.3} ms",
            keypoints.len(),
            timings.total_ms
        );

        Detection {
            keypoints,
            descriptors,
            timings,
        }
    }

    fn process_level(&self, level: &PyramidLevel, budget: usize) -> LevelOutput {
        let start = Instant::now();
        let p = &self.params;
        let (width, height) = level.image.dimensions();

        let mut corners = detect_corners(&level.image, p.fast_threshold, p.edge_threshold);
        let candidates = corners.len();
        retain_best(&mut corners, budget.saturating_mul(2));

        let mut ranked: Vec<_> = corners
            .into_iter()
            .map(|c| {
                let response =
                    harris_response(&level.image, c.x, c.y, p.harris_block_size, p.harris_k);
                (c, response)
            })
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(budget);

        let mut keypoints = Vec::with_capacity(ranked.len());
        let mut descriptors = Vec::with_capacity(ranked.len());
        if !ranked.is_empty() {
            let blurred = if p.descriptor_blur_sigma > 0.0 {
                gaussian_blur_f32(&level.image, p.descriptor_blur_sigma)
            } else {
                level.image.clone()
            };
            let radius = (p.patch_size / 2) as i32;
            for (c, response) in ranked {
                let angle = intensity_centroid_angle(&level.image, c.x, c.y, radius);
                descriptors.push(self.pattern.describe(&blurred, c.x, c.y, angle));
                keypoints.push(KeyPoint {
                    x: c.x as f32 * level.scale,
                    y: c.y as f32 * level.scale,
                    size: p.patch_size as f32 * level.scale,
                    angle,
                    response,
                    octave: level.index,
                });
            }
        }

        LevelOutput {
            index: level.index,
            width,
            height,
            candidates,
            keypoints,
            descriptors,
            elapsed_ms: elapsed_ms(start),
        }
    }
}
