use crate::display::DisplayPane;
use crate::types::{KeypointBudget, ViewMode};

pub const WINDOW_TITLE: &str = "Object recognition using key points";
pub const EXECUTION_TIME_PENDING: &str = "Execution Time: Not yet calculated";

/// Retained widget state: labels, slider position and the two image panes.
#[derive(Clone, Debug)]
pub struct ViewWidgets {
    pub title: String,
    pub toggle_button: String,
    pub execution_time_label: String,
    pub keypoints_label: String,
    pub slider: i32,
    pub processed: DisplayPane,
    pub original: DisplayPane,
}

impl Default for ViewWidgets {
    fn default() -> Self {
        Self::new(DisplayPane::processed(), DisplayPane::original())
    }
}

impl ViewWidgets {
    pub fn new(processed: DisplayPane, original: DisplayPane) -> Self {
        let mut widgets = Self {
            title: WINDOW_TITLE.to_string(),
            toggle_button: String::new(),
            execution_time_label: EXECUTION_TIME_PENDING.to_string(),
            keypoints_label: String::new(),
            slider: 0,
            processed,
            original,
        };
        widgets.set_view_mode(ViewMode::default());
        widgets.set_keypoint_budget(KeypointBudget::default());
        widgets
    }

    /// The toggle button offers the mode that is *not* active.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.toggle_button = format!("Show {}", mode.toggled().label());
    }

    pub fn set_keypoint_budget(&mut self, budget: KeypointBudget) {
        self.slider = budget.get() as i32;
        self.keypoints_label = format!("Keypoints: {}", budget.get());
    }

    pub fn set_execution_time(&mut self, seconds: f64) {
        self.execution_time_label = format!("Execution Time: {seconds:.4} seconds");
    }

    pub fn status_lines(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            format!("[{}]", self.toggle_button),
            self.execution_time_label.clone(),
            self.keypoints_label.clone(),
            format!("Processed: {}", self.processed.describe()),
            format!("Original: {}", self.original.describe()),
        ]
    }
}
