use thiserror::Error;

use crate::record::FIELD_COUNT;

/// Row-local normalization failures.
///
/// Every variant drops the offending row; none is fatal to a run. Encoding
/// repair never produces an error, so invalid bytes surface here only after
/// a replacement character has corrupted a parseable field.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Timestamp does not match the `M/D/YY H:MM:SS AM|PM` pattern.
    #[error("invalid timestamp {value:?}: {source}")]
    TimestampParse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Duration string is not `H:MM:SS` or `H:MM:SS.fff`.
    #[error("invalid duration {value:?}: {reason}")]
    DurationParse { value: String, reason: String },

    /// Row does not have exactly [`FIELD_COUNT`] fields.
    #[error("expected {FIELD_COUNT} fields, found {found}")]
    FieldCount { found: usize },
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
