//! Scrape orchestration: one Apify run per platform, sequentially.
//!
//! Platforms are fetched one at a time, each blocking until its run reaches
//! a terminal state. A failure in one platform's job is recorded and logged
//! but never aborts the others; partial results are valid output.

use apify_client::{
    ApifyClient, BookingReview, ExpediaReview, GoogleReview, ReviewScraperInput, TripAdvisorReview,
};
use tracing::{error, info, warn};

use crate::adapters;
use crate::types::{CanonicalReview, Platform};

/// One platform URL to scrape.
#[derive(Debug, Clone)]
pub struct PlatformSource {
    pub platform: Platform,
    pub url: String,
}

impl PlatformSource {
    pub fn new(platform: Platform, url: impl Into<String>) -> Self {
        Self {
            platform,
            url: url.into(),
        }
    }
}

/// A platform whose job could not be completed, with the reason.
#[derive(Debug)]
pub struct PlatformFailure {
    pub platform: Platform,
    pub error: apify_client::ApifyError,
}

/// Result of a full batch: per-platform canonical collections for the
/// platforms that succeeded, failures for those that did not.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    pub collections: Vec<Vec<CanonicalReview>>,
    pub failures: Vec<PlatformFailure>,
}

/// Trigger, wait out, and normalize one platform's scrape job.
pub async fn fetch_platform(
    client: &ApifyClient,
    source: &PlatformSource,
) -> apify_client::Result<Vec<CanonicalReview>> {
    let mut input = ReviewScraperInput::new(&source.url, source.platform.sort_by());
    if source.platform == Platform::Google {
        // Needed for the adapter's origin filter.
        input = input.with_review_origin();
    }

    info!(platform = %source.platform, url = %source.url, "Triggering review scrape");

    let actor_id = source.platform.actor_id();
    let reviews: Vec<CanonicalReview> = match source.platform {
        Platform::Booking => client
            .scrape_reviews::<BookingReview>(actor_id, &input)
            .await?
            .into_iter()
            .filter_map(adapters::booking::normalize)
            .collect(),
        Platform::Expedia => client
            .scrape_reviews::<ExpediaReview>(actor_id, &input)
            .await?
            .into_iter()
            .filter_map(adapters::expedia::normalize)
            .collect(),
        Platform::TripAdvisor => client
            .scrape_reviews::<TripAdvisorReview>(actor_id, &input)
            .await?
            .into_iter()
            .filter_map(adapters::tripadvisor::normalize)
            .collect(),
        Platform::Google => client
            .scrape_reviews::<GoogleReview>(actor_id, &input)
            .await?
            .into_iter()
            .filter_map(adapters::google::normalize)
            .collect(),
    };

    if reviews.is_empty() {
        warn!(
            platform = %source.platform,
            "No reviews found; the URL or scraper may be misconfigured"
        );
    } else {
        info!(platform = %source.platform, count = reviews.len(), "Normalized reviews");
    }

    Ok(reviews)
}

/// Fetch all configured platforms sequentially, isolating failures.
pub async fn fetch_all(client: &ApifyClient, sources: &[PlatformSource]) -> FetchOutcome {
    let mut outcome = FetchOutcome::default();

    for source in sources {
        match fetch_platform(client, source).await {
            Ok(reviews) => outcome.collections.push(reviews),
            Err(error) => {
                error!(platform = %source.platform, %error, "Platform fetch failed");
                outcome.failures.push(PlatformFailure {
                    platform: source.platform,
                    error,
                });
            }
        }
    }

    outcome
}
