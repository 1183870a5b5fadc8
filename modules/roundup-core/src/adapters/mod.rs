//! Per-platform adapters from raw scraper records to [`CanonicalReview`].
//!
//! Every adapter is a pure function: no I/O, total over any well-formed raw
//! record, and missing optional fields become absent canonical fields rather
//! than errors. `None` from an adapter means the record is filtered out
//! entirely (only the Google adapter does this).

pub mod booking;
pub mod expedia;
pub mod google;
pub mod tripadvisor;

/// Convert a 1-10 rating to the canonical 1-5 scale, rounded to one decimal.
pub(crate) fn to_five_scale(rating_10: f64) -> f64 {
    (rating_10 / 2.0 * 10.0).round() / 10.0
}

/// Prepend a labeled title section when the platform exposes one.
pub(crate) fn with_title(title: Option<&str>, body: &str) -> String {
    match title {
        Some(t) if !t.is_empty() => format!("Title: {t}\n{body}").trim().to_string(),
        _ => body.trim().to_string(),
    }
}
