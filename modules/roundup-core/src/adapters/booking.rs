use apify_client::BookingReview;

use super::to_five_scale;
use crate::dates::normalize_date;
use crate::types::{CanonicalReview, Platform};

/// Booking.com reports ratings on a 1-10 scale and splits the review body
/// into "liked" and "disliked" sections; the canonical text keeps the
/// sections as labeled lines.
pub fn normalize(raw: BookingReview) -> Option<CanonicalReview> {
    let star_rating = raw.rating.map(to_five_scale);

    let mut parts = Vec::new();
    if let Some(title) = raw.review_title.filter(|t| !t.is_empty()) {
        parts.push(format!("Title: {title}"));
    }
    if let Some(liked) = raw.liked_text.filter(|t| !t.is_empty()) {
        parts.push(format!("Liked: {liked}"));
    }
    if let Some(disliked) = raw.disliked_text.filter(|t| !t.is_empty()) {
        parts.push(format!("Disliked: {disliked}"));
    }

    Some(CanonicalReview {
        platform: Platform::Booking,
        review_date: raw.review_date.as_deref().and_then(normalize_date),
        reviewer_name: raw.user_name,
        star_rating,
        review_text: parts.join("\n"),
        replied: raw.property_response.is_some(),
    })
}
