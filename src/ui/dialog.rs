//! File-selection seam between the controller and whatever front end asks
//! the user for paths.
use log::warn;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_SAVE_NAME: &str = "test_image_with_keypoints_or_bounding_box.png";

/// Named set of accepted file extensions (case-insensitive).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileFilter {
    name: String,
    extensions: Vec<String>,
}

impl FileFilter {
    pub fn new(name: impl Into<String>, extensions: &[&str]) -> Self {
        Self {
            name: name.into(),
            extensions: extensions.iter().map(|e| e.to_ascii_lowercase()).collect(),
        }
    }

    /// The image filter offered by both the open and the save dialog.
    pub fn images() -> Self {
        Self::new("Images", &["png", "jpg", "bmp", "tiff"])
    }

    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.extensions.iter().any(|x| x.eq_ignore_ascii_case(e)))
            .unwrap_or(false)
    }

    /// `Images (*.png *.jpg *.bmp *.tiff)`
    pub fn describe(&self) -> String {
        let patterns: Vec<String> = self.extensions.iter().map(|e| format!("*.{e}")).collect();
        format!("{} ({})", self.name, patterns.join(" "))
    }
}

/// Asks the user for a path. `None` means the dialog was cancelled.
pub trait FileDialog {
    fn open_file(&mut self, filter: &FileFilter) -> Option<PathBuf>;
    fn save_file(&mut self, filter: &FileFilter, default_name: &str) -> Option<PathBuf>;
}

/// Replays pre-recorded answers in order; `None` entries and an exhausted
/// script both behave like a cancelled dialog.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDialog {
    answers: VecDeque<Option<PathBuf>>,
}

impl ScriptedDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            answers: paths.into_iter().map(|p| Some(p.into())).collect(),
        }
    }

    pub fn push_path(&mut self, path: impl Into<PathBuf>) {
        self.answers.push_back(Some(path.into()));
    }

    pub fn push_cancel(&mut self) {
        self.answers.push_back(None);
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl FileDialog for ScriptedDialog {
    fn open_file(&mut self, _filter: &FileFilter) -> Option<PathBuf> {
        self.answers.pop_front().flatten()
    }

    fn save_file(&mut self, _filter: &FileFilter, _default_name: &str) -> Option<PathBuf> {
        self.answers.pop_front().flatten()
    }
}

/// Line-oriented dialog: writes a prompt, reads one line.
///
/// Open: an empty line or end of input cancels; a path outside the filter is
/// refused. Save: an empty line accepts the suggested name; end of input
/// cancels.
pub struct LineDialog<R, W> {
    input: R,
    prompt: W,
}

impl<R: BufRead, W: Write> LineDialog<R, W> {
    pub fn new(input: R, prompt: W) -> Self {
        Self { input, prompt }
    }

    fn ask(&mut self, question: &str) -> Option<String> {
        // prompt failures are not worth aborting the dialog for
        let _ = write!(self.prompt, "{question}");
        let _ = self.prompt.flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

impl<R: BufRead, W: Write> FileDialog for LineDialog<R, W> {
    fn open_file(&mut self, filter: &FileFilter) -> Option<PathBuf> {
        let answer = self.ask(&format!("Open Image {}: ", filter.describe()))?;
        if answer.is_empty() {
            return None;
        }
        let path = PathBuf::from(answer);
        if !filter.accepts(&path) {
            warn!("{} does not match {}", path.display(), filter.describe());
            return None;
        }
        Some(path)
    }

    fn save_file(&mut self, filter: &FileFilter, default_name: &str) -> Option<PathBuf> {
        let answer = self.ask(&format!("Save Image {} [{default_name}]: ", filter.describe()))?;
        if answer.is_empty() {
            Some(PathBuf::from(default_name))
        } else {
            Some(PathBuf::from(answer))
        }
    }
}
