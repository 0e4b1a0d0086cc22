//! UTF-8 repair.
//!
//! Input fields arrive as raw bytes and may contain invalid sequences.
//! Repair substitutes one U+FFFD for each minimal invalid span so that
//! downstream parsing only ever sees valid text. Whether a replacement
//! character makes a field unparseable (inside a timestamp, say) is the
//! parsers' concern, not this module's: repair itself never fails.

/// Unicode replacement character substituted for invalid byte spans.
pub const REPLACEMENT: char = '\u{FFFD}';

/// Decode `raw` as UTF-8, replacing each minimal invalid span with one
/// [`REPLACEMENT`] character.
///
/// Valid input comes back byte-identical. `from_utf8_lossy` implements
/// exactly the minimal-span substitution policy: the scan keeps the valid
/// prefix, replaces the smallest offending span, and resumes until the
/// whole field is consumed.
pub fn sanitize_field(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_utf8_is_unchanged() {
        assert_eq!(sanitize_field(b"Monkey Alberto"), "Monkey Alberto");
        assert_eq!(sanitize_field("héllo wörld".as_bytes()), "héllo wörld");
        assert_eq!(sanitize_field(b""), "");
    }

    #[test]
    fn invalid_span_becomes_one_replacement() {
        assert_eq!(sanitize_field(b"he\xFFllo"), "he\u{FFFD}llo");
        // Truncated multi-byte sequence at end of field.
        assert_eq!(sanitize_field(b"caf\xC3"), "caf\u{FFFD}");
    }

    #[test]
    fn multiple_invalid_spans_each_replaced() {
        assert_eq!(sanitize_field(b"\xFFa\xFE\xFDb"), "\u{FFFD}a\u{FFFD}\u{FFFD}b");
    }

    #[test]
    fn repair_resumes_after_replacement() {
        // Invalid byte in the middle of otherwise-valid multi-byte text.
        let mut raw = "über".as_bytes().to_vec();
        raw.insert(2, 0x80);
        let repaired = sanitize_field(&raw);
        assert!(repaired.contains(REPLACEMENT));
        assert!(repaired.ends_with("ber"));
    }
}
