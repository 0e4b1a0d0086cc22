//! Tests for elapsed-time parsing, addition, and rendering.

use csvsan_model::NormalizeError;
use csvsan_transform::Duration;

#[test]
fn parses_basic_duration() {
    let duration = Duration::parse("1:23:32").expect("valid duration");
    assert_eq!(duration.as_millis(), 5_012_000);
    assert_eq!(duration.to_seconds_string(), "5012.0");
}

#[test]
fn hours_are_not_bounded_to_a_day() {
    let duration = Duration::parse("31:23:32.123").expect("valid duration");
    assert_eq!(
        duration.as_millis(),
        (31 * 3_600 + 23 * 60 + 32) * 1_000 + 123
    );
    assert_eq!(duration.to_seconds_string(), "113012.123");
}

#[test]
fn fraction_is_an_integer_millisecond_count() {
    assert_eq!(
        Duration::parse("0:00:00.5")
            .expect("valid duration")
            .to_seconds_string(),
        "0.005"
    );
    assert_eq!(
        Duration::parse("0:00:00.500")
            .expect("valid duration")
            .to_seconds_string(),
        "0.5"
    );
    // 1500 ms carries over into whole seconds.
    assert_eq!(
        Duration::parse("0:00:01.1500")
            .expect("valid duration")
            .to_seconds_string(),
        "2.5"
    );
}

#[test]
fn overflowing_hours_are_a_parse_error_not_a_wrap() {
    // Large enough that hours * 3600 * 1000 exceeds u64; the row must be
    // dropped with a parse error, never wrapped to a wrong span.
    let error = Duration::parse("10000000000000000:00:00").expect_err("overflowing hours");
    assert!(matches!(error, NormalizeError::DurationParse { .. }));
    // An hour count that exceeds u64 outright fails at component parsing.
    assert!(Duration::parse("99999999999999999999:00:00").is_err());
    // Overflow from the millisecond fraction is caught the same way.
    assert!(Duration::parse("1:00:00.18446744073709551615").is_err());
}

#[test]
fn rendering_trims_trailing_zeros_but_keeps_one_for_whole_spans() {
    assert_eq!(
        Duration::parse("0:00:00.050")
            .expect("valid duration")
            .to_seconds_string(),
        "0.05"
    );
    assert_eq!(
        Duration::parse("0:00:00.000")
            .expect("valid duration")
            .to_seconds_string(),
        "0.0"
    );
}

#[test]
fn addition_is_exact_and_commutative() {
    let first = Duration::parse("1:00:00").expect("valid duration");
    let second = Duration::parse("2:30:15.500").expect("valid duration");
    assert_eq!((first + second).to_seconds_string(), "12615.5");
    assert_eq!(first + second, second + first);
}

#[test]
fn rejects_wrong_component_counts() {
    assert!(Duration::parse("").is_err());
    assert!(Duration::parse("1:23").is_err());
    assert!(Duration::parse("1:2:3:4").is_err());
}

#[test]
fn rejects_non_numeric_components() {
    let error = Duration::parse("1:23:zz").expect_err("non-numeric seconds");
    match &error {
        NormalizeError::DurationParse { value, .. } => assert_eq!(value, "1:23:zz"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(Duration::parse("-1:00:00").is_err());
    assert!(Duration::parse("1:\u{FFFD}3:00").is_err());
    assert!(Duration::parse("1:23:4.5.6").is_err());
    assert!(Duration::parse("1:23:").is_err());
}
