//! Row-at-a-time normalization pipeline.
//!
//! Rows flow strictly forward: raw bytes become sanitized text fields,
//! sanitized fields become normalized fields, and normalized fields become
//! one output line. Nothing is retained across rows beyond the header flag
//! and the summary counters, so output order always matches input order
//! (failed rows are skipped, never reordered).

use std::io::{BufWriter, Read, Write};

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::{debug, warn};

use csvsan_model::{SanitizedRecord, is_header_row, join_fields};
use csvsan_transform::{normalize_record, sanitize_field};

/// Counters for one pipeline run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSummary {
    /// Rows read from the input, header included.
    pub rows_read: usize,
    /// Rows written to the output, header included.
    pub rows_written: usize,
    /// Rows dropped with a diagnostic.
    pub rows_dropped: usize,
    /// Whether a header row was seen and passed through.
    pub header_seen: bool,
}

/// Run the pipeline from `input` to `output` until the input is exhausted.
///
/// Normalization failures are row-local: the row is dropped with a `warn!`
/// diagnostic carrying the cause and the original field values, and
/// processing continues with the next row. Reader and writer failures are
/// fatal and propagate.
pub fn run<R: Read, W: Write>(input: R, output: W) -> Result<PipelineSummary> {
    // Header detection is ours, and rows with the wrong field count must
    // reach the field-count check instead of failing inside the reader.
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    let mut writer = BufWriter::new(output);
    let mut summary = PipelineSummary::default();

    for record in reader.byte_records() {
        let record = record.context("read input record")?;
        summary.rows_read += 1;

        let fields: Vec<String> = record.iter().map(sanitize_field).collect();

        // Header passthrough: sanitized for encoding, otherwise untouched.
        // No quoting or padding is applied to header fields.
        if is_header_row(&fields) {
            if !summary.header_seen {
                summary.header_seen = true;
                debug!(row = summary.rows_read, "header row detected");
            }
            writeln!(writer, "{}", join_fields(&fields)).context("write header row")?;
            summary.rows_written += 1;
            continue;
        }

        match SanitizedRecord::from_fields(fields)
            .and_then(|sanitized| normalize_record(&sanitized))
        {
            Ok(normalized) => {
                writeln!(writer, "{}", normalized.to_line()).context("write output row")?;
                summary.rows_written += 1;
            }
            Err(error) => {
                summary.rows_dropped += 1;
                warn!(error = %error, row = ?record, "dropping row");
            }
        }
    }

    writer.flush().context("flush output")?;
    Ok(summary)
}
