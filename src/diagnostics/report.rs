use super::TimingBreakdown;
use crate::types::{KeyPoint, ViewMode};
use serde::Serialize;
use std::path::PathBuf;

/// Result of one load-render(-save) run, as written by the batch tool.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub input: InputDescriptor,
    pub view_mode: ViewMode,
    pub keypoint_budget: usize,
    pub keypoints_detected: usize,
    pub keypoints_retained: usize,
    pub descriptor_count: usize,
    /// Hull vertices in image coordinates; absent when too few keypoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hull: Option<Vec<[i32; 2]>>,
    pub execution_seconds: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    pub keypoints: Vec<KeyPoint>,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub channels: u8,
}
