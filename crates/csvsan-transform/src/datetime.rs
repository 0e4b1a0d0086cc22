//! Timestamp normalization.
//!
//! Input timestamps are wall-clock US Pacific in `M/D/YY H:MM:SS AM|PM`
//! form (12-hour clock, no leading zeros required). Output is the same
//! instant in US Eastern, rendered in ISO 8601 with the numeric UTC offset
//! in effect at that instant. Both zones observe daylight saving
//! independently, so the offset between them is not constant across a year.
//!
//! Zone definitions come from the tzdb compiled into `chrono-tz`, loaded
//! once at process start; the conversion takes its zones as read-only
//! parameters rather than consulting process-wide state.

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeDelta, TimeZone};
use chrono_tz::Tz;
use chrono_tz::US::{Eastern, Pacific};

use csvsan_model::{NormalizeError, Result};

/// Source zone for all input timestamps.
pub const SOURCE_ZONE: Tz = Pacific;

/// Target zone for all output timestamps.
pub const TARGET_ZONE: Tz = Eastern;

/// Accepts 1-2 digit month, day, and hour, so `4/1/11 9:05:00 AM` parses.
const INPUT_FORMAT: &str = "%m/%d/%y %I:%M:%S %p";

const OUTPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Convert a Pacific wall-clock timestamp to an ISO 8601 Eastern timestamp.
pub fn normalize_timestamp(value: &str) -> Result<String> {
    normalize_timestamp_between(value, SOURCE_ZONE, TARGET_ZONE)
}

/// Convert a wall-clock timestamp from `source` to `target`.
///
/// The only failure is a pattern mismatch, reported as
/// [`NormalizeError::TimestampParse`] with the original string and the
/// chrono cause. Zone conversion cannot fail once parsing succeeds.
pub fn normalize_timestamp_between(value: &str, source: Tz, target: Tz) -> Result<String> {
    let naive = NaiveDateTime::parse_from_str(value, INPUT_FORMAT).map_err(|cause| {
        NormalizeError::TimestampParse {
            value: value.to_string(),
            source: cause,
        }
    })?;
    let localized = resolve_local(source, naive);
    Ok(localized
        .with_timezone(&target)
        .format(OUTPUT_FORMAT)
        .to_string())
}

/// Attach a zone to a wall-clock time, infallibly.
///
/// Ambiguous times (fall-back hour) resolve to the later instant, the
/// standard-time reading. Nonexistent times (spring-forward gap) shift
/// ahead one hour, which is the instant the standard-offset reading of the
/// input denotes.
fn resolve_local(zone: Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(datetime) => datetime,
        LocalResult::Ambiguous(_, standard) => standard,
        LocalResult::None => {
            let shifted = naive + TimeDelta::hours(1);
            zone.from_local_datetime(&shifted)
                .earliest()
                .unwrap_or_else(|| zone.from_utc_datetime(&naive))
        }
    }
}
