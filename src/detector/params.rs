//! Parameter types configuring the ORB detector.
//!
//! Defaults follow the conventional ORB setup (500 features over an 8-level
//! pyramid with a 1.2 scale step, FAST threshold 20, 31 px patches, Harris
//! ranking). The view controller always runs with these defaults.

/// Detector-wide parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbParams {
    /// Maximum number of keypoints returned across all levels.
    pub n_features: usize,
    /// Scale ratio between consecutive pyramid levels (> 1).
    pub scale_factor: f32,
    /// Number of pyramid levels (>= 1).
    pub n_levels: usize,
    /// Border (pixels, per level) in which no keypoint is kept. Must cover the
    /// descriptor patch after rotation.
    pub edge_threshold: u32,
    /// FAST-9 intensity threshold.
    pub fast_threshold: u8,
    /// Side of the square patch used for orientation and descriptors.
    pub patch_size: u32,
    /// Harris detector free parameter.
    pub harris_k: f32,
    /// Side of the Harris structure-tensor window.
    pub harris_block_size: u32,
    /// Gaussian sigma applied to a level before sampling descriptor pairs.
    pub descriptor_blur_sigma: f32,
}

impl Default for OrbParams {
    fn default() -> Self {
        Self {
            n_features: 500,
            scale_factor: 1.2,
            n_levels: 8,
            edge_threshold: 31,
            fast_threshold: 20,
            patch_size: 31,
            harris_k: 0.04,
            harris_block_size: 7,
            descriptor_blur_sigma: 2.0,
        }
    }
}

impl OrbParams {
    /// Scale of `level` relative to the full-resolution image.
    pub fn level_scale(&self, level: usize) -> f32 {
        self.scale_factor.powi(level as i32)
    }

    /// Distribute `n_features` geometrically over the levels so that each
    /// level receives `1 / scale_factor` of the previous one. The last level
    /// takes whatever remains.
    pub fn level_budgets(&self) -> Vec<usize> {
        let n_levels = self.n_levels.max(1);
        if n_levels == 1 {
            return vec![self.n_features];
        }
        let factor = 1.0 / self.scale_factor as f64;
        let mut desired = self.n_features as f64 * (1.0 - factor)
            / (1.0 - factor.powi(n_levels as i32));

        let mut budgets = Vec::with_capacity(n_levels);
        let mut assigned = 0usize;
        for _ in 0..n_levels - 1 {
            let n = desired.round() as usize;
            budgets.push(n);
            assigned += n;
            desired *= factor;
        }
        budgets.push(self.n_features.saturating_sub(assigned));
        budgets
    }
}
