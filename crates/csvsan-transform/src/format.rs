//! Per-column output rules and record assembly.

use tracing::trace;

use csvsan_model::{DELIMITER, NormalizedRecord, QUOTE, Result, SanitizedRecord};

use crate::datetime::normalize_timestamp;
use crate::duration::Duration;

/// Wrap `value` in quote characters iff it contains the delimiter.
///
/// Embedded quote characters are not escaped. Downstream consumers depend
/// on this exact output shape, so the limitation is part of the contract
/// rather than a bug to fix here.
pub fn maybe_quote(value: &str) -> String {
    if value.contains(DELIMITER) {
        format!("{QUOTE}{value}{QUOTE}")
    } else {
        value.to_string()
    }
}

/// Left-pad `value` with `0` to width 5.
///
/// Values already five characters or longer pass through unchanged,
/// numeric or not. Postal codes are never validated against a directory.
pub fn pad_postal_code(value: &str) -> String {
    format!("{value:0>5}")
}

/// Apply every column rule to one data row.
///
/// The input TotalDuration value is discarded; the output column is always
/// the recomputed sum of the two duration columns. The first parse failure
/// aborts the row.
pub fn normalize_record(record: &SanitizedRecord) -> Result<NormalizedRecord> {
    let timestamp = normalize_timestamp(record.timestamp())?;
    let first = Duration::parse(record.first_duration())?;
    let second = Duration::parse(record.second_duration())?;
    let total = first + second;
    trace!(timestamp = %timestamp, total_seconds = %total, "normalized record");
    Ok(NormalizedRecord::new([
        timestamp,
        maybe_quote(record.address()),
        pad_postal_code(record.postal_code()),
        record.full_name().to_uppercase(),
        first.to_string(),
        second.to_string(),
        total.to_string(),
        maybe_quote(record.notes()),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(values: [&str; 8]) -> SanitizedRecord {
        SanitizedRecord::from_fields(values.iter().map(|value| (*value).to_string()).collect())
            .expect("eight fields")
    }

    #[test]
    fn quotes_only_fields_containing_delimiter() {
        assert_eq!(maybe_quote("plain text"), "plain text");
        assert_eq!(
            maybe_quote("123 4th St, Anywhere, AA"),
            "\"123 4th St, Anywhere, AA\""
        );
        // Embedded quotes are left alone, by contract.
        assert_eq!(maybe_quote("say \"hi\""), "say \"hi\"");
        assert_eq!(maybe_quote("say \"hi\", ok"), "\"say \"hi\", ok\"");
    }

    #[test]
    fn pads_short_postal_codes_only() {
        assert_eq!(pad_postal_code("94121"), "94121");
        assert_eq!(pad_postal_code("123"), "00123");
        assert_eq!(pad_postal_code(""), "00000");
        assert_eq!(pad_postal_code("SW1A 1AA"), "SW1A 1AA");
        assert_eq!(pad_postal_code("941210"), "941210");
    }

    #[test]
    fn normalizes_a_full_row() {
        let normalized = record([
            "4/1/11 11:00:00 AM",
            "123 4th St, Anywhere, AA",
            "94121",
            "Monkey Alberto",
            "1:23:32",
            "1:32:33",
            "zzsasdfa",
            "I am the very model",
        ]);
        let normalized = normalize_record(&normalized).expect("row normalizes");
        assert_eq!(
            normalized.to_line(),
            "2011-04-01T14:00:00-04:00,\"123 4th St, Anywhere, AA\",94121,MONKEY ALBERTO,5012.0,5553.0,10565.0,I am the very model"
        );
    }

    #[test]
    fn total_duration_input_is_discarded() {
        let normalized = normalize_record(&record([
            "4/1/11 11:00:00 AM",
            "addr",
            "1",
            "a",
            "0:00:01",
            "0:00:02",
            "999999.0",
            "n",
        ]))
        .expect("row normalizes");
        assert_eq!(normalized.fields()[6], "3.0");
    }

    #[test]
    fn first_failing_column_aborts_the_row() {
        let error = normalize_record(&record([
            "not-a-date",
            "addr",
            "1",
            "a",
            "0:00:01",
            "0:00:02",
            "x",
            "n",
        ]))
        .expect_err("bad timestamp");
        assert!(error.to_string().contains("not-a-date"));

        let error = normalize_record(&record([
            "4/1/11 11:00:00 AM",
            "addr",
            "1",
            "a",
            "0:00:\u{FFFD}1",
            "0:00:02",
            "x",
            "n",
        ]))
        .expect_err("replacement character corrupts duration");
        assert!(error.to_string().contains("invalid duration"));
    }
}
