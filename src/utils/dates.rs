//! Module for handling date parsing and normalization.
//!
//! Scanned medical records carry dates in several shapes (`2024-01-03`,
//! `2024.1.3`, `2024/01/03`, `2024년 1월 3일`, `20240103`). Everything here
//! normalizes to ISO `YYYY-MM-DD` and rejects calendar-impossible matches
//! so OCR noise never mints a bogus date.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Years outside this window are treated as OCR misreads, not dates.
const MIN_PLAUSIBLE_YEAR: i32 = 1900;
const MAX_PLAUSIBLE_YEAR: i32 = 2100;

static SEPARATED_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{4})\s*[.\-/]\s*(\d{1,2})\s*[.\-/]\s*(\d{1,2})").expect("valid date pattern")
});

static KOREAN_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{4})\s*년\s*(\d{1,2})\s*월\s*(\d{1,2})\s*일").expect("valid date pattern")
});

static COMPACT_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{4})(\d{2})(\d{2})\b").expect("valid date pattern"));

/// Parse the first date found in a string, trying all accepted formats
#[must_use]
pub fn parse_flexible_date(s: &str) -> Option<NaiveDate> {
    for pattern in [&*SEPARATED_DATE, &*KOREAN_DATE, &*COMPACT_DATE] {
        if let Some(caps) = pattern.captures(s) {
            let year: i32 = caps[1].parse().ok()?;
            let month: u32 = caps[2].parse().ok()?;
            let day: u32 = caps[3].parse().ok()?;

            if !(MIN_PLAUSIBLE_YEAR..=MAX_PLAUSIBLE_YEAR).contains(&year) {
                continue;
            }

            // from_ymd_opt rejects month 13, day 32 and other impossible dates
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                return Some(date);
            }
        }
    }

    None
}

/// Normalize a date string to ISO `YYYY-MM-DD`
///
/// Returns the original text unchanged when no accepted pattern matches,
/// so unrecognizable anchors survive as raw text rather than being dropped.
#[must_use]
pub fn normalize_date_text(s: &str) -> String {
    parse_flexible_date(s).map_or_else(|| s.trim().to_string(), |d| d.format("%Y-%m-%d").to_string())
}

/// Absolute gap in whole days between two dates
#[must_use]
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days().abs()
}
