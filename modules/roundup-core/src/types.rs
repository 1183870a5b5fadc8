use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The four supported review platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "Booking.com")]
    Booking,
    Expedia,
    TripAdvisor,
    Google,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Booking,
        Platform::Expedia,
        Platform::TripAdvisor,
        Platform::Google,
    ];

    /// Apify actor serving this platform.
    pub fn actor_id(self) -> &'static str {
        match self {
            Platform::Booking => apify_client::BOOKING_REVIEWS_SCRAPER,
            Platform::Expedia => apify_client::EXPEDIA_REVIEWS_SCRAPER,
            Platform::TripAdvisor => apify_client::TRIPADVISOR_REVIEWS_SCRAPER,
            Platform::Google => apify_client::GOOGLE_MAPS_REVIEWS_SCRAPER,
        }
    }

    /// Sort key accepted by this platform's actor. Booking.com has its own
    /// vocabulary; everyone else takes "Most recent".
    pub fn sort_by(self) -> &'static str {
        match self {
            Platform::Booking => "review_score_and_price",
            _ => "Most recent",
        }
    }

    /// Short lowercase name used for export file naming.
    pub fn slug(self) -> &'static str {
        match self {
            Platform::Booking => "booking",
            Platform::Expedia => "expedia",
            Platform::TripAdvisor => "tripadvisor",
            Platform::Google => "google",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Platform::Booking => "Booking.com",
            Platform::Expedia => "Expedia",
            Platform::TripAdvisor => "TripAdvisor",
            Platform::Google => "Google",
        };
        f.write_str(s)
    }
}

/// A review in the platform-agnostic schema every adapter produces.
///
/// Immutable once built: adapters construct it and nothing downstream
/// mutates fields. `star_rating` is always on the 1-5 scale regardless of
/// what the source platform reports, and `review_date` is a calendar date
/// with no time component, absent when the source string was unparsable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalReview {
    pub platform: Platform,
    pub review_date: Option<NaiveDate>,
    pub reviewer_name: Option<String>,
    pub star_rating: Option<f64>,
    pub review_text: String,
    pub replied: bool,
}
