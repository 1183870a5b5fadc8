use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Run lifecycle types ---

/// Lifecycle state of an Apify actor run.
///
/// A run starts PENDING, moves to RUNNING once the actor is scheduled, and
/// ends in exactly one of the three terminal states. The poll loop in
/// [`crate::ApifyClient::wait_for_run`] is written against `is_terminal`
/// rather than string matching so the lifecycle is explicit and testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunStatus {
    /// Apify reports freshly created runs as READY.
    #[serde(alias = "READY")]
    Pending,
    Running,
    Succeeded,
    Failed,
    Aborted,
}

impl RunStatus {
    /// True once no further transition can occur.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            RunStatus::Succeeded | RunStatus::Failed | RunStatus::Aborted
        )
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RunStatus::Pending => "PENDING",
            RunStatus::Running => "RUNNING",
            RunStatus::Succeeded => "SUCCEEDED",
            RunStatus::Failed => "FAILED",
            RunStatus::Aborted => "ABORTED",
        };
        f.write_str(s)
    }
}

/// Apify actor run metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct RunData {
    pub id: String,
    pub status: RunStatus,
    #[serde(rename = "defaultDatasetId")]
    pub default_dataset_id: String,
    #[serde(rename = "startedAt")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(rename = "finishedAt")]
    pub finished_at: Option<DateTime<Utc>>,
}

/// Wrapper for Apify API responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

// --- Review scraper input ---

/// A start URL entry for scraper input.
#[derive(Debug, Clone, Serialize)]
pub struct StartUrl {
    pub url: String,
}

/// Input payload shared by the four review-scraper actors.
///
/// `max_reviews` is a high ceiling rather than a true cap, and the lookback
/// window is always two years; the user-facing date filter is applied later,
/// on already-fetched data.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewScraperInput {
    #[serde(rename = "startUrls")]
    pub start_urls: Vec<StartUrl>,
    #[serde(rename = "maxReviews")]
    pub max_reviews: u32,
    #[serde(rename = "maxReviewsPerPage")]
    pub max_reviews_per_page: u32,
    #[serde(rename = "maxPages")]
    pub max_pages: u32,
    #[serde(rename = "minRating")]
    pub min_rating: u8,
    #[serde(rename = "maxRating")]
    pub max_rating: u8,
    #[serde(rename = "sortBy")]
    pub sort_by: String,
    #[serde(rename = "timeRange")]
    pub time_range: String,
    /// Asks the Google Maps actor to annotate each record with its origin
    /// platform. Only meaningful for that actor; omitted otherwise.
    #[serde(rename = "includeReviewOrigin", skip_serializing_if = "Option::is_none")]
    pub include_review_origin: Option<bool>,
}

impl ReviewScraperInput {
    /// Build an input with the standard limits: up to 1000 reviews over a
    /// 2-year window, all ratings included.
    pub fn new(url: impl Into<String>, sort_by: impl Into<String>) -> Self {
        Self {
            start_urls: vec![StartUrl { url: url.into() }],
            max_reviews: 1000,
            max_reviews_per_page: 100,
            max_pages: 10,
            min_rating: 1,
            max_rating: 5,
            sort_by: sort_by.into(),
            time_range: "2y".to_string(),
            include_review_origin: None,
        }
    }

    pub fn with_review_origin(mut self) -> Self {
        self.include_review_origin = Some(true);
        self
    }
}

// --- Raw review records per actor ---

/// A single Booking.com review from the voyager~booking-reviews-scraper
/// dataset. Ratings are on Booking's 1-10 scale.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingReview {
    pub rating: Option<f64>,
    #[serde(rename = "reviewTitle")]
    pub review_title: Option<String>,
    #[serde(rename = "likedText")]
    pub liked_text: Option<String>,
    #[serde(rename = "dislikedText")]
    pub disliked_text: Option<String>,
    #[serde(rename = "reviewDate")]
    pub review_date: Option<String>,
    #[serde(rename = "userName")]
    pub user_name: Option<String>,
    #[serde(rename = "propertyResponse")]
    pub property_response: Option<String>,
}

/// Score label nested in an Expedia review, e.g. `"8.0 out of 10"`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpediaScoreLabel {
    pub label: Option<String>,
}

/// Author attribution nested in an Expedia review.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpediaAuthor {
    pub text: Option<String>,
}

/// Submission time nested in an Expedia review.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpediaSubmissionTime {
    #[serde(rename = "longDateFormat")]
    pub long_date_format: Option<String>,
}

/// A single Expedia review from the
/// tri_angle~expedia-hotels-com-reviews-scraper dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpediaReview {
    #[serde(rename = "reviewScoreWithDescription")]
    pub review_score_with_description: Option<ExpediaScoreLabel>,
    pub title: Option<String>,
    pub text: Option<String>,
    #[serde(rename = "reviewAuthorAttribution")]
    pub review_author_attribution: Option<ExpediaAuthor>,
    #[serde(rename = "managementResponses")]
    pub management_responses: Option<Vec<serde_json::Value>>,
    #[serde(rename = "submissionTime")]
    pub submission_time: Option<ExpediaSubmissionTime>,
}

/// Reviewer info nested in a TripAdvisor review.
#[derive(Debug, Clone, Deserialize)]
pub struct TripAdvisorUser {
    pub name: Option<String>,
}

/// A single TripAdvisor review from the maxcopell~tripadvisor-reviews
/// dataset. Ratings are already on a 1-5 scale.
#[derive(Debug, Clone, Deserialize)]
pub struct TripAdvisorReview {
    pub rating: Option<f64>,
    pub title: Option<String>,
    pub text: Option<String>,
    pub user: Option<TripAdvisorUser>,
    #[serde(rename = "ownerResponse")]
    pub owner_response: Option<serde_json::Value>,
    #[serde(rename = "publishedDate")]
    pub published_date: Option<String>,
}

/// A single Google Maps review from the compass~google-maps-reviews-scraper
/// dataset. `review_origin` is only populated when the run was triggered
/// with `includeReviewOrigin`; it distinguishes native Google reviews from
/// cross-posted/aggregated ones.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleReview {
    pub stars: Option<f64>,
    pub title: Option<String>,
    pub text: Option<String>,
    #[serde(rename = "textTranslated")]
    pub text_translated: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "responseFromOwnerText")]
    pub response_from_owner_text: Option<String>,
    #[serde(rename = "publishedAtDate")]
    pub published_at_date: Option<String>,
    #[serde(rename = "reviewOrigin")]
    pub review_origin: Option<String>,
}
