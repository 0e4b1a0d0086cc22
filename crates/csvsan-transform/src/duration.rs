//! Elapsed-time parsing and arithmetic.
//!
//! Spans routinely exceed 24 hours, so a clock or calendar type cannot
//! represent them. Parsing splits `H:MM:SS[.fff]` by hand on `:` and `.`
//! and carries the value as an integer count of milliseconds, which keeps
//! addition and rendering exact.

use std::fmt;
use std::ops::Add;

use csvsan_model::{NormalizeError, Result};

const MILLIS_PER_SECOND: u64 = 1_000;
const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3_600;

/// An exact elapsed-time value, not bounded to 24 hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration {
    millis: u64,
}

impl Duration {
    /// Parse `H:MM:SS` or `H:MM:SS.fff`.
    ///
    /// `H` is any non-negative integer. Minute and second values are not
    /// range-checked. The fraction is an integer count of milliseconds, so
    /// `.500` is 500 ms and `.5` is 5 ms; a count of 1000 or more carries
    /// over into whole seconds. Spans whose millisecond total exceeds the
    /// representable range are rejected, never wrapped.
    pub fn parse(value: &str) -> Result<Self> {
        let mut components = value.split(':');
        let (Some(hours), Some(minutes), Some(seconds), None) = (
            components.next(),
            components.next(),
            components.next(),
            components.next(),
        ) else {
            return Err(malformed(value, "expected three ':'-separated components"));
        };
        let hours = parse_component(value, hours)?;
        let minutes = parse_component(value, minutes)?;
        let (seconds, millis) = match seconds.split_once('.') {
            None => (parse_component(value, seconds)?, 0),
            Some((whole, fraction)) => (
                parse_component(value, whole)?,
                parse_component(value, fraction)?,
            ),
        };
        let total_millis = hours
            .checked_mul(SECONDS_PER_HOUR)
            .and_then(|span| span.checked_add(minutes.checked_mul(SECONDS_PER_MINUTE)?))
            .and_then(|span| span.checked_add(seconds))
            .and_then(|span| span.checked_mul(MILLIS_PER_SECOND))
            .and_then(|span| span.checked_add(millis))
            .ok_or_else(|| malformed(value, "value out of range"))?;
        Ok(Self {
            millis: total_millis,
        })
    }

    /// Total elapsed milliseconds.
    pub fn as_millis(self) -> u64 {
        self.millis
    }

    /// Render as total seconds in decimal form.
    ///
    /// Whole spans keep one zero after the point (`5012.0`); fractional
    /// spans trim trailing zeros (`12615.5`).
    pub fn to_seconds_string(self) -> String {
        let seconds = self.millis / MILLIS_PER_SECOND;
        let fraction = self.millis % MILLIS_PER_SECOND;
        if fraction == 0 {
            format!("{seconds}.0")
        } else {
            let fraction = format!("{fraction:03}");
            format!("{seconds}.{}", fraction.trim_end_matches('0'))
        }
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration {
            millis: self.millis + rhs.millis,
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_seconds_string())
    }
}

fn parse_component(value: &str, component: &str) -> Result<u64> {
    component
        .parse()
        .map_err(|_| malformed(value, &format!("non-numeric component {component:?}")))
}

fn malformed(value: &str, reason: &str) -> NormalizeError {
    NormalizeError::DurationParse {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
