#![doc = include_str!("../README.md")]

// Public modules
pub mod config;
pub mod controller;
pub mod detector;
pub mod diagnostics;
pub mod display;
pub mod error;
pub mod image;
pub mod render;
pub mod types;
pub mod ui;

// --- High-level re-exports -------------------------------------------------

// Main entry point: the view controller and its options.
pub use crate::controller::{ControllerOptions, LoadSummary, ViewController, ViewState};

// Detector + results.
pub use crate::detector::{Detection, OrbDetector, OrbParams};
pub use crate::types::{Descriptor, KeyPoint, KeypointBudget, ViewMode};

pub use crate::diagnostics::{RunReport, TimingBreakdown};
pub use crate::error::{LoadError, RenderError, SaveError};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use keypoint_hull::prelude::*;
/// use std::path::Path;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut controller = ViewController::default();
/// controller.set_keypoint_budget(200);
/// let summary = controller.load_path(Path::new("scene.jpg"))?;
/// println!("kept {} of {}", summary.keypoints_retained, summary.keypoints_detected);
/// let written = controller.save_to(Path::new("scene_hull.png"))?;
/// println!("saved {}", written.display());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::ui::{FileDialog, ScriptedDialog, UiEvent};
    pub use crate::{KeyPoint, OrbDetector, ViewController, ViewMode};
}
