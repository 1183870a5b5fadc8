use apify_client::ExpediaReview;

use super::{to_five_scale, with_title};
use crate::dates::normalize_date;
use crate::types::{CanonicalReview, Platform};

/// Expedia does not expose a numeric rating field; the score arrives as a
/// textual label like `"8.0 out of 10"`. A label that cannot be parsed
/// degrades to an absent rating rather than rejecting the review.
pub fn normalize(raw: ExpediaReview) -> Option<CanonicalReview> {
    let star_rating = raw
        .review_score_with_description
        .as_ref()
        .and_then(|s| s.label.as_deref())
        .and_then(parse_score_label);

    let reviewer_name = raw
        .review_author_attribution
        .and_then(|a| a.text)
        .filter(|n| !n.is_empty());

    let replied = raw
        .management_responses
        .map(|r| !r.is_empty())
        .unwrap_or(false);

    let date_str = raw.submission_time.and_then(|t| t.long_date_format);

    let body = raw.text.unwrap_or_default();
    let review_text = with_title(raw.title.as_deref(), &body);

    Some(CanonicalReview {
        platform: Platform::Expedia,
        review_date: date_str.as_deref().and_then(normalize_date),
        reviewer_name,
        star_rating,
        review_text,
        replied,
    })
}

/// Parse `"X out of 10"` into a 1-5 rating.
fn parse_score_label(label: &str) -> Option<f64> {
    let (score, _) = label.split_once(" out of ")?;
    let rating_10: f64 = score.trim().parse().ok()?;
    Some(to_five_scale(rating_10))
}
