//! Diagnostics data model: stage timings and the serializable run report
//! written by the batch tool.

pub mod report;
pub mod timing;

pub use report::{InputDescriptor, RunReport};
pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
