//! JSON configuration for the command-line tools.

pub mod batch;

pub use batch::{load_config, BatchConfig};
