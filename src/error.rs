//! Error types surfaced by the view controller.
//!
//! Every variant is recoverable: the operation that produced it has already
//! logged a status line and left the controller state untouched.

use std::path::PathBuf;

/// Failure to bring a new image into the session.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("No file selected")]
    NoFileSelected,

    #[error("Could not load image from {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image {} has no pixels", path.display())]
    EmptyImage { path: PathBuf },
}

/// Failure to write the result bitmap.
#[derive(thiserror::Error, Debug)]
pub enum SaveError {
    #[error("Image is not loaded")]
    NoImage,

    #[error("No file selected")]
    NoFileSelected,

    #[error("Failed to save {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Failure to derive the result bitmap.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    #[error("No image loaded to render")]
    NoImage,
}

impl From<RenderError> for SaveError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::NoImage => SaveError::NoImage,
        }
    }
}
