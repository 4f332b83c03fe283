//! Image feature view controller.
//!
//! Owns the session (source image, grayscale buffer, raw detection) and the
//! widget model, and implements the user-facing operations: load, toggle,
//! slider change and save.
//!
//! States
//! - `NoImage` until the first successful load, `Loaded` afterwards. There
//!   is no way back to `NoImage`; a new load replaces the session wholesale.
//!
//! Consistency
//! - Every operation either completes or leaves the controller exactly as
//!   it was. Loads build the whole new session (decode, detect, render)
//!   before touching any field.
//! - Toggling the view only changes the mode and the button text. The
//!   displayed bitmap is refreshed on the next load; saves always re-render
//!   for the current mode.
//! - The slider only changes the label unless `live_recompute` is set, in
//!   which case the stored raw detection is re-truncated and re-rendered.
use crate::detector::{Detection, OrbDetector};
use crate::diagnostics::{elapsed_ms, InputDescriptor, RunReport, TimingBreakdown};
use crate::display::{DisplayPane, ORIGINAL_PANE_SIZE, PROCESSED_PANE_SIZE};
use crate::error::{LoadError, RenderError, SaveError};
use crate::image::{load_source_image, next_free_path, save_rgb_image, LoadedImage};
use crate::render::{self, bounding_hull};
use crate::types::{Descriptor, KeyPoint, KeypointBudget, ViewMode};
use crate::ui::dialog::DEFAULT_SAVE_NAME;
use crate::ui::{FileDialog, FileFilter, UiEvent, ViewWidgets};
use image::imageops::FilterType;
use image::RgbImage;
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Re-truncate and re-render when the slider moves instead of waiting for
    /// the next load.
    pub live_recompute: bool,
    pub processed_pane: (u32, u32),
    pub original_pane: (u32, u32),
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            live_recompute: false,
            processed_pane: PROCESSED_PANE_SIZE,
            original_pane: ORIGINAL_PANE_SIZE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewState {
    NoImage,
    Loaded,
}

/// Outcome of a successful load.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadSummary {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub keypoints_detected: usize,
    pub keypoints_retained: usize,
    pub execution_seconds: f64,
}

struct Session {
    image: LoadedImage,
    detection: Detection,
    retained: usize,
    execution_seconds: f64,
    timings: TimingBreakdown,
}

impl Session {
    fn keypoints(&self) -> &[KeyPoint] {
        &self.detection.keypoints[..self.retained]
    }

    fn descriptors(&self) -> &[Descriptor] {
        let n = self.retained.min(self.detection.descriptors.len());
        &self.detection.descriptors[..n]
    }
}

pub struct ViewController {
    detector: OrbDetector,
    options: ControllerOptions,
    filter: FileFilter,
    mode: ViewMode,
    budget: KeypointBudget,
    widgets: ViewWidgets,
    session: Option<Session>,
    last_saved: Option<PathBuf>,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(ControllerOptions::default())
    }
}

impl ViewController {
    pub fn new(options: ControllerOptions) -> Self {
        let widgets = ViewWidgets::new(
            DisplayPane::new(options.processed_pane, FilterType::Triangle),
            DisplayPane::new(options.original_pane, FilterType::Nearest),
        );
        Self {
            detector: OrbDetector::default(),
            options,
            filter: FileFilter::images(),
            mode: ViewMode::default(),
            budget: KeypointBudget::default(),
            widgets,
            session: None,
            last_saved: None,
        }
    }

    pub fn state(&self) -> ViewState {
        if self.session.is_some() {
            ViewState::Loaded
        } else {
            ViewState::NoImage
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        self.mode
    }

    pub fn keypoint_budget(&self) -> KeypointBudget {
        self.budget
    }

    pub fn widgets(&self) -> &ViewWidgets {
        &self.widgets
    }

    pub fn loaded_image(&self) -> Option<&LoadedImage> {
        self.session.as_ref().map(|s| &s.image)
    }

    /// Retained keypoints (empty when nothing is loaded).
    pub fn keypoints(&self) -> &[KeyPoint] {
        self.session.as_ref().map(Session::keypoints).unwrap_or(&[])
    }

    /// Descriptors parallel to [`keypoints`](Self::keypoints).
    pub fn descriptors(&self) -> &[Descriptor] {
        self.session.as_ref().map(Session::descriptors).unwrap_or(&[])
    }

    /// Untruncated detector output for the current image.
    pub fn raw_detection(&self) -> Option<&Detection> {
        self.session.as_ref().map(|s| &s.detection)
    }

    /// Detection + render time of the last successful load.
    pub fn execution_seconds(&self) -> Option<f64> {
        self.session.as_ref().map(|s| s.execution_seconds)
    }

    pub fn last_saved(&self) -> Option<&Path> {
        self.last_saved.as_deref()
    }

    /// Event-dispatch boundary: route `event` to its operation. Failures have
    /// already been reported through the log and are not propagated.
    pub fn handle(&mut self, event: UiEvent, dialog: &mut dyn FileDialog) {
        let outcome = match event {
            UiEvent::LoadClicked => self.load(dialog).map(drop).map_err(|e| e.to_string()),
            UiEvent::SaveClicked => self.save(dialog).map(drop).map_err(|e| e.to_string()),
            UiEvent::ToggleViewClicked => {
                self.toggle_view();
                Ok(())
            }
            UiEvent::SliderChanged(value) => {
                self.set_keypoint_budget(value);
                Ok(())
            }
        };
        if let Err(err) = outcome {
            debug!("{event:?} aborted: {err}");
        }
    }

    /// Ask `dialog` for an image and load it.
    pub fn load(&mut self, dialog: &mut dyn FileDialog) -> Result<LoadSummary, LoadError> {
        let Some(path) = dialog.open_file(&self.filter) else {
            warn!("No file selected for loading.");
            return Err(LoadError::NoFileSelected);
        };
        self.load_path(&path)
    }

    /// Decode `path`, detect, render for the current view and update both
    /// panes. On failure the previous session is kept.
    pub fn load_path(&mut self, path: &Path) -> Result<LoadSummary, LoadError> {
        let image = match load_source_image(path) {
            Ok(image) => image,
            Err(err) => {
                error!("Error loading image: {err}");
                return Err(err);
            }
        };
        info!("Image loaded from {}", path.display());

        let start = Instant::now();
        let detection = self.detector.detect_and_compute(image.gray());
        let retained = detection.len().min(self.budget.get());
        let render_start = Instant::now();
        let result = render::render(self.mode, image.gray(), &detection.keypoints[..retained]);
        let render_ms = elapsed_ms(render_start);
        let execution_seconds = start.elapsed().as_secs_f64();

        let mut timings = TimingBreakdown::with_total(execution_seconds * 1000.0);
        timings.extend_prefixed("detect", &detection.timings);
        timings.push("render", render_ms);

        self.widgets.processed.show(&result);
        self.widgets.original.show(&image.to_rgb());
        self.widgets.set_execution_time(execution_seconds);

        let summary = LoadSummary {
            path: path.to_path_buf(),
            width: image.width(),
            height: image.height(),
            channels: image.channels(),
            keypoints_detected: detection.len(),
            keypoints_retained: retained,
            execution_seconds,
        };
        info!(
            "Kept {} of {} keypoints ({} view) in {:.4} s",
            retained,
            detection.len(),
            self.mode.label(),
            execution_seconds
        );
        self.session = Some(Session {
            image,
            detection,
            retained,
            execution_seconds,
            timings,
        });
        Ok(summary)
    }

    /// Flip between keypoint and hull rendering. Nothing is re-rendered.
    pub fn toggle_view(&mut self) -> ViewMode {
        self.mode = self.mode.toggled();
        self.widgets.set_view_mode(self.mode);
        info!("Switched to {} view", self.mode.label());
        self.mode
    }

    /// Move the slider. The value is clamped to the slider range.
    pub fn set_keypoint_budget(&mut self, value: i32) -> KeypointBudget {
        self.budget = KeypointBudget::new(value);
        self.widgets.set_keypoint_budget(self.budget);
        if self.options.live_recompute {
            self.retruncate();
        }
        self.budget
    }

    fn retruncate(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.retained = session.detection.len().min(self.budget.get());
        let result = render::render(self.mode, session.image.gray(), session.keypoints());
        self.widgets.processed.show(&result);
        debug!(
            "Re-truncated to {} keypoints without re-detection",
            session.retained
        );
    }

    /// Re-derive the result bitmap for the current view from the session.
    pub fn render_result(&self) -> Result<RgbImage, RenderError> {
        let session = self.session.as_ref().ok_or(RenderError::NoImage)?;
        Ok(render::render(
            self.mode,
            session.image.gray(),
            session.keypoints(),
        ))
    }

    /// Ask `dialog` for a destination and save the current result there.
    pub fn save(&mut self, dialog: &mut dyn FileDialog) -> Result<PathBuf, SaveError> {
        if self.session.is_none() {
            warn!("No image loaded for saving.");
            return Err(SaveError::NoImage);
        }
        let Some(requested) = dialog.save_file(&self.filter, DEFAULT_SAVE_NAME) else {
            warn!("No file selected for saving.");
            return Err(SaveError::NoFileSelected);
        };
        self.save_to(&requested)
    }

    /// Render for the current view and write it to `requested`, or to the
    /// first free `name(n).ext` if that exists. Returns the path written.
    pub fn save_to(&mut self, requested: &Path) -> Result<PathBuf, SaveError> {
        let result = match self.render_result() {
            Ok(result) => result,
            Err(err) => {
                warn!("No image loaded for saving.");
                return Err(err.into());
            }
        };
        let path = next_free_path(requested);
        if path != requested {
            debug!("{} exists, saving as {}", requested.display(), path.display());
        }
        if let Err(err) = save_rgb_image(&result, &path) {
            error!("Error saving image: {err}");
            return Err(err);
        }
        info!("Image saved to {}", path.display());
        self.last_saved = Some(path.clone());
        Ok(path)
    }

    /// Serializable summary of the current session.
    pub fn report(&self) -> Option<RunReport> {
        let session = self.session.as_ref()?;
        let keypoints = session.keypoints();
        Some(RunReport {
            input: InputDescriptor {
                path: session.image.path().to_path_buf(),
                width: session.image.width(),
                height: session.image.height(),
                channels: session.image.channels(),
            },
            view_mode: self.mode,
            keypoint_budget: self.budget.get(),
            keypoints_detected: session.detection.len(),
            keypoints_retained: keypoints.len(),
            descriptor_count: session.descriptors().len(),
            hull: bounding_hull(keypoints)
                .map(|hull| hull.iter().map(|p| [p.x, p.y]).collect()),
            execution_seconds: session.execution_seconds,
            output: self.last_saved.clone(),
            keypoints: keypoints.to_vec(),
            timings: session.timings.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ScriptedDialog;

    #[test]
    fn starts_without_image() {
        let c = ViewController::default();
        assert_eq!(c.state(), ViewState::NoImage);
        assert_eq!(c.view_mode(), ViewMode::BoundingHull);
        assert!(c.keypoints().is_empty());
        assert!(c.report().is_none());
        assert_eq!(c.render_result().unwrap_err(), RenderError::NoImage);
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut c = ViewController::default();
        let start = c.view_mode();
        let button = c.widgets().toggle_button.clone();
        assert_eq!(c.toggle_view(), start.toggled());
        assert_eq!(c.widgets().toggle_button, "Show Bounding Box");
        assert_eq!(c.toggle_view(), start);
        assert_eq!(c.widgets().toggle_button, button);
    }

    #[test]
    fn save_without_image_does_not_consult_dialog() {
        let mut c = ViewController::default();
        let mut dialog = ScriptedDialog::with_paths(["never.png"]);
        assert!(matches!(c.save(&mut dialog), Err(SaveError::NoImage)));
        assert_eq!(dialog.remaining(), 1);
        assert!(matches!(c.save_to(Path::new("never.png")), Err(SaveError::NoImage)));
        assert!(!Path::new("never.png").exists());
    }

    #[test]
    fn cancelled_load_keeps_no_image_state() {
        let mut c = ViewController::default();
        let mut dialog = ScriptedDialog::new();
        assert!(matches!(c.load(&mut dialog), Err(LoadError::NoFileSelected)));
        assert_eq!(c.state(), ViewState::NoImage);
    }

    #[test]
    fn slider_events_update_label_and_clamp() {
        let mut c = ViewController::default();
        let mut dialog = ScriptedDialog::new();
        c.handle(UiEvent::SliderChanged(2000), &mut dialog);
        assert_eq!(c.keypoint_budget().get(), 1000);
        assert_eq!(c.widgets().keypoints_label, "Keypoints: 1000");
        c.handle(UiEvent::SliderChanged(42), &mut dialog);
        assert_eq!(c.widgets().slider, 42);
    }
}
