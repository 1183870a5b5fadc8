//! Date normalization across platform payloads.
//!
//! Each platform reports review dates in its own format. Everything funnels
//! through [`normalize_date`], which tries a fixed chain of known formats
//! first and a permissive fallback second, and answers with `None` rather
//! than an error when nothing matches. Callers treat an absent date as
//! "excluded from date-range filtering but still part of the dataset".

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Plain calendar-date formats seen in the wild.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d %b %Y", "%b %d, %Y"];

/// Timestamp formats; the time component is parsed and discarded.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.fZ", "%Y-%m-%dT%H:%M:%SZ"];

/// Parse an arbitrary date string into a calendar date. Never errors.
pub fn normalize_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    best_effort(s)
}

/// Fallback for strings outside the known format set.
fn best_effort(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.date_naive());
    }

    const LOOSE_DATE_FORMATS: &[&str] = &["%Y/%m/%d", "%d %B %Y", "%B %d, %Y", "%d/%m/%Y"];
    for fmt in LOOSE_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }

    // %.f also matches an absent fraction, so these cover offset-stripped
    // timestamps with and without milliseconds.
    const LOOSE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];
    for fmt in LOOSE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    None
}
