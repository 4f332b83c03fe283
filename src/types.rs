use serde::{Deserialize, Serialize};

/// Oriented keypoint in full-resolution image coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPoint {
    pub x: f32,
    pub y: f32,
    /// Diameter of the neighbourhood the descriptor was sampled from.
    pub size: f32,
    /// Dominant orientation in degrees, in `[0, 360)`.
    pub angle: f32,
    /// Harris corner response on the level the keypoint was found at.
    pub response: f32,
    /// Pyramid level index (0 = full resolution).
    pub octave: usize,
}

/// 256-bit binary descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Descriptor(pub [u8; 32]);

impl Descriptor {
    pub const BITS: usize = 256;

    /// Number of differing bits.
    pub fn hamming(&self, other: &Descriptor) -> u32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a ^ b).count_ones())
            .sum()
    }
}

impl Default for Descriptor {
    fn default() -> Self {
        Self([0; 32])
    }
}

/// Which rendering path produces the result bitmap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewMode {
    Keypoints,
    #[default]
    BoundingHull,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Keypoints => ViewMode::BoundingHull,
            ViewMode::BoundingHull => ViewMode::Keypoints,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Keypoints => "Key Points",
            ViewMode::BoundingHull => "Bounding Box",
        }
    }
}

/// Slider value: how many detector keypoints are retained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct KeypointBudget(u32);

impl KeypointBudget {
    pub const MIN: u32 = 10;
    pub const MAX: u32 = 1000;
    pub const DEFAULT: u32 = 100;

    /// Clamp an arbitrary slider position into `[MIN, MAX]`.
    pub fn new(value: i32) -> Self {
        let clamped = value.clamp(Self::MIN as i32, Self::MAX as i32);
        Self(clamped as u32)
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for KeypointBudget {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_mode() {
        for mode in [ViewMode::Keypoints, ViewMode::BoundingHull] {
            assert_ne!(mode.toggled(), mode);
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn budget_clamps_to_slider_range() {
        assert_eq!(KeypointBudget::new(-5).get(), 10);
        assert_eq!(KeypointBudget::new(9).get(), 10);
        assert_eq!(KeypointBudget::new(250).get(), 250);
        assert_eq!(KeypointBudget::new(5000).get(), 1000);
        assert_eq!(KeypointBudget::default().get(), 100);
    }

    #[test]
    fn hamming_counts_differing_bits() {
        let a = Descriptor([0; 32]);
        let mut bytes = [0u8; 32];
        bytes[0] = 0b1010_0001;
        bytes[31] = 0xff;
        let b = Descriptor(bytes);
        assert_eq!(a.hamming(&a), 0);
        assert_eq!(a.hamming(&b), 11);
    }
}
