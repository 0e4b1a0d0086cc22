//! CLI library components for the CSV sanitizer.

pub mod logging;
pub mod pipeline;
