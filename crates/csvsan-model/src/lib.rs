//! Record model for the CSV sanitizer.
//!
//! This crate defines the shared vocabulary of the workspace:
//!
//! - **record**: the fixed 8-column record types and column constants
//! - **error**: the row-local normalization error taxonomy

pub mod error;
pub mod record;

pub use error::{NormalizeError, Result};
pub use record::{
    Column, DELIMITER, FIELD_COUNT, HEADER_LITERAL, NormalizedRecord, QUOTE, SanitizedRecord,
    is_header_row, join_fields,
};
