//! Scale pyramid for ORB.
//!
//! Unlike a 2× octave pyramid, ORB levels shrink by `scale_factor` (1.2 by
//! default), so every level is resampled directly from the full-resolution
//! image with a triangle filter instead of being decimated from its
//! predecessor. Levels are built in parallel; order is preserved.
use super::params::OrbParams;
use image::imageops::{self, FilterType};
use image::GrayImage;
use rayon::prelude::*;

#[derive(Clone, Debug)]
pub struct PyramidLevel {
    pub index: usize,
    /// Full-resolution pixels per level pixel.
    pub scale: f32,
    pub image: GrayImage,
}

#[derive(Clone, Debug, Default)]
pub struct ScalePyramid {
    pub levels: Vec<PyramidLevel>,
}

impl ScalePyramid {
    pub fn build(gray: &GrayImage, params: &OrbParams) -> Self {
        let (w, h) = gray.dimensions();
        let levels = (0..params.n_levels.max(1))
            .into_par_iter()
            .map(|index| {
                let scale = params.level_scale(index);
                let image = if index == 0 {
                    gray.clone()
                } else {
                    let lw = ((w as f32 / scale).round() as u32).max(1);
                    let lh = ((h as f32 / scale).round() as u32).max(1);
                    imageops::resize(gray, lw, lh, FilterType::Triangle)
                };
                PyramidLevel {
                    index,
                    scale,
                    image,
                }
            })
            .collect();
        Self { levels }
    }
}
