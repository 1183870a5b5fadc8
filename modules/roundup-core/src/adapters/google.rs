use apify_client::GoogleReview;

use crate::dates::normalize_date;
use crate::types::{CanonicalReview, Platform};

/// Google Maps aggregates reviews cross-posted from other platforms; only
/// records whose declared origin is "Google" are kept, which is why the run
/// input asks the actor for `includeReviewOrigin`. The title field echoes
/// the establishment name and is dropped from the canonical text.
pub fn normalize(raw: GoogleReview) -> Option<CanonicalReview> {
    if raw.review_origin.as_deref() != Some("Google") {
        return None;
    }

    let review_text = raw
        .text
        .or(raw.text_translated)
        .unwrap_or_default()
        .trim()
        .to_string();

    let replied = raw.response_from_owner_text.is_some();

    // Google timestamps carry a timezone offset suffix the generic parser
    // does not know about; everything after '+' is stripped first.
    let review_date = raw
        .published_at_date
        .as_deref()
        .map(strip_offset)
        .and_then(normalize_date);

    Some(CanonicalReview {
        platform: Platform::Google,
        review_date,
        reviewer_name: raw.name.filter(|n| !n.is_empty()),
        star_rating: raw.stars,
        review_text,
        replied,
    })
}

fn strip_offset(s: &str) -> &str {
    match s.split_once('+') {
        Some((head, _)) => head,
        None => s,
    }
}
