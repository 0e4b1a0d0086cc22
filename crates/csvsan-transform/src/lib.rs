//! Field-level sanitation and normalization for the CSV sanitizer.
//!
//! This crate provides the per-record transformation components:
//!
//! - **encoding**: UTF-8 repair with replacement characters
//! - **datetime**: Pacific to Eastern timestamp normalization
//! - **duration**: unbounded-hour elapsed-time parsing and arithmetic
//! - **format**: per-column output rules and record assembly
//!
//! Data flows strictly forward through these modules: raw bytes become
//! sanitized text, sanitized text becomes normalized fields, and normalized
//! fields become one output record. Nothing here holds state across rows.

pub mod datetime;
pub mod duration;
pub mod encoding;
pub mod format;

// Re-export common functions for external use
pub use datetime::{SOURCE_ZONE, TARGET_ZONE, normalize_timestamp, normalize_timestamp_between};
pub use duration::Duration;
pub use encoding::sanitize_field;
pub use format::{maybe_quote, normalize_record, pad_postal_code};
