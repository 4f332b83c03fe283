//! Toolkit-independent UI model: the events a front end raises, the widget
//! state the controller maintains, and the file-dialog seam.

pub mod dialog;
pub mod widgets;

pub use dialog::{FileDialog, FileFilter, LineDialog, ScriptedDialog};
pub use widgets::ViewWidgets;

/// User actions routed to [`ViewController::handle`](crate::ViewController::handle).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiEvent {
    LoadClicked,
    SaveClicked,
    ToggleViewClicked,
    SliderChanged(i32),
}
