//! Small text helpers: character-based truncation and `created_at`
//! formatting. Both are total — bad input degrades, never errors.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Truncate `s` to `max` characters, appending `ellipsis` only when
/// something was actually cut. Idempotent on already-short strings.
pub fn truncate_chars(s: &str, max: usize, ellipsis: &str) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max).collect();
    out.push_str(ellipsis);
    out
}

/// Format a record's `created_at` as `"D Mon, YYYY"`. Tries RFC 3339, a
/// bare datetime, then a bare date; `None` when nothing parses.
pub fn format_created_at(raw: &str) -> Option<String> {
    let date = parse_rfc3339(raw)
        .or_else(|| parse_bare_datetime(raw))
        .or_else(|| parse_bare_date(raw))?;
    Some(date.format("%-d %b, %Y").to_string())
}

fn parse_rfc3339(raw: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive())
}

fn parse_bare_datetime(raw: &str) -> Option<NaiveDate> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}

fn parse_bare_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_is_idempotent_on_short_strings() {
        assert_eq!(truncate_chars("short", 10, "..."), "short");
        assert_eq!(truncate_chars("exactly10!", 10, "..."), "exactly10!");
    }

    #[test]
    fn truncation_appends_marker_when_cut() {
        assert_eq!(truncate_chars("hello world", 5, "..."), "hello...");
        assert_eq!(truncate_chars("hello world", 5, " ..."), "hello ...");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        // four characters, more than four bytes
        assert_eq!(truncate_chars("héllø", 4, "..."), "héll...");
        assert_eq!(truncate_chars("héll", 4, "..."), "héll");
    }

    #[test]
    fn formats_rfc3339_timestamps() {
        assert_eq!(
            format_created_at("2023-01-05T10:30:00Z").as_deref(),
            Some("5 Jan, 2023")
        );
        assert_eq!(
            format_created_at("2023-11-21T00:00:00+02:00").as_deref(),
            Some("21 Nov, 2023")
        );
    }

    #[test]
    fn formats_bare_dates_and_datetimes() {
        assert_eq!(
            format_created_at("2024-06-09").as_deref(),
            Some("9 Jun, 2024")
        );
        assert_eq!(
            format_created_at("2024-06-09T08:15:00").as_deref(),
            Some("9 Jun, 2024")
        );
    }

    #[test]
    fn unparseable_dates_yield_none() {
        assert!(format_created_at("yesterday").is_none());
        assert!(format_created_at("").is_none());
        assert!(format_created_at("2024/06/09").is_none());
    }
}
