// SPDX-License-Identifier: MPL-2.0
//! Parsing of the backend's high-precision health-check timestamps.
//!
//! The backend reports its clock as `YYYY-MM-DDTHH:MM:SS` followed by an
//! optional fraction of any length and an optional offset (`Z`, `±HH:MM`,
//! `±HHMM` or `±HH`). Fractions longer than nine digits are truncated to
//! nanoseconds; a missing offset means UTC.

use crate::error::{Error, Result};
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Timelike, Utc};

const DATE_TIME_LEN: usize = 19;
const NANO_DIGITS: usize = 9;

/// Parses a backend timestamp into UTC.
pub fn parse_server_timestamp(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();
    let (date_time, rest) = match (input.get(..DATE_TIME_LEN), input.get(DATE_TIME_LEN..)) {
        (Some(date_time), Some(rest)) => (date_time, rest),
        _ => return Err(invalid(input, "too short")),
    };

    let naive = NaiveDateTime::parse_from_str(date_time, "%Y-%m-%dT%H:%M:%S")
        .map_err(|e| invalid(input, &e.to_string()))?;

    let (nanos, offset_text) = split_fraction(rest).ok_or_else(|| invalid(input, "bad fraction"))?;
    let offset = parse_offset(offset_text).ok_or_else(|| invalid(input, "bad offset"))?;

    let naive = naive
        .with_nanosecond(nanos)
        .ok_or_else(|| invalid(input, "bad fraction"))?;

    offset
        .from_local_datetime(&naive)
        .single()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| invalid(input, "out of range"))
}

fn invalid(input: &str, reason: &str) -> Error {
    Error::Timestamp(format!("{input:?}: {reason}"))
}

/// Splits `.123456789Z` into nanoseconds and the remaining offset text.
fn split_fraction(rest: &str) -> Option<(u32, &str)> {
    let Some(fraction) = rest.strip_prefix('.') else {
        return Some((0, rest));
    };

    let digits_len = fraction
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(fraction.len());
    if digits_len == 0 {
        return None;
    }

    let digits = &fraction[..digits_len.min(NANO_DIGITS)];
    let padded = format!("{:0<width$}", digits, width = NANO_DIGITS);
    let nanos = padded.parse().ok()?;
    Some((nanos, &fraction[digits_len..]))
}

fn parse_offset(text: &str) -> Option<FixedOffset> {
    if text.is_empty() || text.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0);
    }

    let sign = match text.as_bytes().first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let body = &text[1..];
    let (hours, minutes) = match body.len() {
        2 => (body, "00"),
        4 => (body.get(..2)?, body.get(2..)?),
        5 if body.as_bytes()[2] == b':' => (body.get(..2)?, body.get(3..)?),
        _ => return None,
    };
    if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> DateTime<Utc> {
        parse_server_timestamp(input).expect("timestamp should parse")
    }

    #[test]
    fn parses_nanosecond_precision() {
        let ts = parse("2024-05-14T12:30:05.123456789Z");
        assert_eq!(ts.nanosecond(), 123_456_789);
        assert_eq!(ts.second(), 5);
    }

    #[test]
    fn short_fraction_is_padded() {
        assert_eq!(parse("2024-05-14T12:30:05.5Z").nanosecond(), 500_000_000);
        assert_eq!(parse("2024-05-14T12:30:05.123Z").nanosecond(), 123_000_000);
    }

    #[test]
    fn long_fraction_is_truncated() {
        assert_eq!(
            parse("2024-05-14T12:30:05.1234567891234Z").nanosecond(),
            123_456_789
        );
    }

    #[test]
    fn missing_fraction_and_offset_means_utc_whole_seconds() {
        let ts = parse("2024-05-14T12:30:05");
        assert_eq!(ts, parse("2024-05-14T12:30:05Z"));
        assert_eq!(ts.nanosecond(), 0);
    }

    #[test]
    fn offsets_in_every_form_agree() {
        let expected = parse("2024-05-14T10:30:05Z");
        assert_eq!(parse("2024-05-14T12:30:05+02:00"), expected);
        assert_eq!(parse("2024-05-14T12:30:05+0200"), expected);
        assert_eq!(parse("2024-05-14T12:30:05+02"), expected);
        assert_eq!(parse("2024-05-14T08:30:05-02:00"), expected);
    }

    #[test]
    fn fraction_and_offset_combine() {
        let ts = parse("2024-05-14T12:30:05.25+01:30");
        assert_eq!(ts.hour(), 11);
        assert_eq!(ts.minute(), 0);
        assert_eq!(ts.nanosecond(), 250_000_000);
    }

    #[test]
    fn garbage_is_rejected() {
        for input in [
            "",
            "yesterday",
            "2024-05-14",
            "2024-13-14T12:30:05Z",
            "2024-05-14T12:30:05.Z",
            "2024-05-14T12:30:05+2",
            "2024-05-14T12:30:05+25:00",
            "2024-05-14T12:30:05 UTC",
        ] {
            assert!(
                matches!(parse_server_timestamp(input), Err(Error::Timestamp(_))),
                "{input:?} should be rejected"
            );
        }
    }
}
