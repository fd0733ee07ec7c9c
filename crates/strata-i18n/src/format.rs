//! Timestamp and number formatting primitives
//!
//! Format names resolve through the ordinary key resolver; this module holds
//! the pieces underneath: strftime rendering that reports failure instead of
//! panicking, the fixed default-pattern table, and digit grouping.

use chrono::{DateTime, TimeZone};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt::{self, Write};

/// Patterns used when a format name has no catalog entry
static DEFAULT_FORMATS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("date.short", "%b %d"),
        ("date.long", "%B %d, %Y"),
        ("time.short", "%H:%M"),
        ("time.long", "%H:%M:%S"),
        ("datetime.short", "%d %b %Y %H:%M"),
        ("datetime.long", "%B %d, %Y %H:%M:%S"),
    ])
});

/// Last-resort pattern when a format name is unrecognized everywhere
pub(crate) const ISO_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Look up the fixed default pattern for a format name
pub(crate) fn default_pattern(name: &str) -> Option<&'static str> {
    DEFAULT_FORMATS.get(name).copied()
}

/// Render a timestamp with a strftime pattern
///
/// Returns `None` when the pattern contains invalid specifiers, letting the
/// caller fall through to the next pattern tier instead of panicking.
pub(crate) fn format_timestamp<Tz: TimeZone>(value: &DateTime<Tz>, pattern: &str) -> Option<String>
where
    Tz::Offset: fmt::Display,
{
    let mut out = String::new();
    match write!(out, "{}", value.format(pattern)) {
        Ok(()) => Some(out),
        Err(_) => None,
    }
}

/// Render a number with grouping and a decimal separator
///
/// The integer part is grouped in threes with `delimiter`; `separator`
/// replaces the decimal point. `precision` fixes the number of fractional
/// digits.
pub(crate) fn format_number(
    value: f64,
    precision: usize,
    delimiter: &str,
    separator: &str,
) -> String {
    let rendered = format!("{value:.precision$}");
    let (sign, digits) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits, None),
    };

    let mut out = String::from(sign);
    let len = int_part.len();
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(delimiter);
        }
        out.push(digit);
    }
    if let Some(frac_part) = frac_part {
        out.push_str(separator);
        out.push_str(frac_part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 14, 30, 5).unwrap()
    }

    #[test]
    fn default_table_covers_the_fixed_names() {
        for name in [
            "date.short",
            "date.long",
            "time.short",
            "time.long",
            "datetime.short",
            "datetime.long",
        ] {
            assert!(default_pattern(name).is_some(), "no default for {name}");
        }
        assert!(default_pattern("date.default").is_none());
    }

    #[test]
    fn formats_with_valid_pattern() {
        assert_eq!(
            format_timestamp(&sample(), "%Y-%m-%d").as_deref(),
            Some("2024-03-09")
        );
    }

    #[test]
    fn invalid_pattern_reports_failure() {
        assert_eq!(format_timestamp(&sample(), "%Q bogus"), None);
    }

    #[test]
    fn iso_pattern_always_formats() {
        assert_eq!(
            format_timestamp(&sample(), ISO_PATTERN).as_deref(),
            Some("2024-03-09T14:30:05+00:00")
        );
    }

    #[test]
    fn groups_integer_digits() {
        assert_eq!(format_number(1234567.0, 0, ",", "."), "1,234,567");
        assert_eq!(format_number(123.0, 0, ",", "."), "123");
        assert_eq!(format_number(1000.0, 0, ",", "."), "1,000");
    }

    #[test]
    fn applies_separator_and_precision() {
        assert_eq!(format_number(1234.5, 2, ".", ","), "1.234,50");
        assert_eq!(format_number(0.128, 2, ",", "."), "0.13");
    }

    #[test]
    fn negative_numbers_keep_the_sign_outside_grouping() {
        assert_eq!(format_number(-1234567.89, 2, ",", "."), "-1,234,567.89");
    }
}
