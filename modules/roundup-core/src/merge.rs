use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::types::CanonicalReview;

/// Merge per-platform collections into one list sorted by review date,
/// newest first. Records without a parsable date sort after all dated
/// records. The sort is stable, so records with equal keys keep their
/// relative order from the flattened input.
pub fn merge_reviews(collections: Vec<Vec<CanonicalReview>>) -> Vec<CanonicalReview> {
    let mut all: Vec<CanonicalReview> = collections.into_iter().flatten().collect();
    all.sort_by(|a, b| match (a.review_date, b.review_date) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    all
}

/// Keep only reviews dated within `[start, end]` (inclusive). Undated
/// reviews are excluded from range filtering; they remain in the merged
/// dataset but never match a window.
pub fn filter_by_date_range(
    reviews: &[CanonicalReview],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<CanonicalReview> {
    reviews
        .iter()
        .filter(|r| matches!(r.review_date, Some(d) if d >= start && d <= end))
        .cloned()
        .collect()
}
