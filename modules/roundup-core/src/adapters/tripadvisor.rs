use apify_client::TripAdvisorReview;

use super::with_title;
use crate::dates::normalize_date;
use crate::types::{CanonicalReview, Platform};

/// TripAdvisor already rates on a 1-5 scale, so the rating passes through
/// unchanged.
pub fn normalize(raw: TripAdvisorReview) -> Option<CanonicalReview> {
    let reviewer_name = raw.user.and_then(|u| u.name).filter(|n| !n.is_empty());
    let replied = raw.owner_response.is_some();

    let body = raw.text.unwrap_or_default();
    let review_text = with_title(raw.title.as_deref(), &body);

    Some(CanonicalReview {
        platform: Platform::TripAdvisor,
        review_date: raw.published_date.as_deref().and_then(normalize_date),
        reviewer_name,
        star_rating: raw.rating,
        review_text,
        replied,
    })
}
