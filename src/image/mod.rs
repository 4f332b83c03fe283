//! Image loading, saving and output-path helpers.
pub mod io;

pub use self::io::{load_source_image, next_free_path, save_rgb_image, LoadedImage};
