pub mod error;
pub mod types;

pub use error::{ApifyError, Result};
pub use types::{
    ApiResponse, BookingReview, ExpediaReview, GoogleReview, ReviewScraperInput, RunData,
    RunStatus, StartUrl, TripAdvisorReview,
};

use std::time::Duration;

use serde::de::DeserializeOwned;

const BASE_URL: &str = "https://api.apify.com/v2";

/// Poll interval for run status checks.
const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Actor ID for voyager/booking-reviews-scraper.
pub const BOOKING_REVIEWS_SCRAPER: &str = "voyager~booking-reviews-scraper";

/// Actor ID for tri_angle/expedia-hotels-com-reviews-scraper.
pub const EXPEDIA_REVIEWS_SCRAPER: &str = "tri_angle~expedia-hotels-com-reviews-scraper";

/// Actor ID for maxcopell/tripadvisor-reviews.
pub const TRIPADVISOR_REVIEWS_SCRAPER: &str = "maxcopell~tripadvisor-reviews";

/// Actor ID for compass/google-maps-reviews-scraper.
pub const GOOGLE_MAPS_REVIEWS_SCRAPER: &str = "compass~google-maps-reviews-scraper";

pub struct ApifyClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
    poll_interval: Duration,
}

impl ApifyClient {
    pub fn new(token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
            base_url: BASE_URL.to_string(),
            poll_interval: POLL_INTERVAL,
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Start an actor run. Returns immediately with run metadata.
    pub async fn start_run(&self, actor_id: &str, input: &ReviewScraperInput) -> Result<RunData> {
        let url = format!("{}/acts/{}/runs", self.base_url, actor_id);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(input)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApifyError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let api_resp: ApiResponse<RunData> = resp.json().await?;
        Ok(api_resp.data)
    }

    /// Fetch current run metadata without waiting.
    pub async fn run_status(&self, run_id: &str) -> Result<RunData> {
        let url = format!("{}/actor-runs/{}", self.base_url, run_id);
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApifyError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let api_resp: ApiResponse<RunData> = resp.json().await?;
        Ok(api_resp.data)
    }

    /// Poll at a fixed interval until the run reaches a terminal status.
    ///
    /// There is deliberately no backoff and no maximum wait: a run that never
    /// terminates keeps this polling forever. The caller can only abandon it
    /// by dropping the future; tests bound it with an external timeout.
    pub async fn wait_for_run(&self, run_id: &str) -> Result<RunData> {
        loop {
            let run = self.run_status(run_id).await?;
            if run.status.is_terminal() {
                if run.status == RunStatus::Succeeded {
                    return Ok(run);
                }
                return Err(ApifyError::RunFailed(run.status));
            }
            tracing::debug!(run_id, status = %run.status, "Run still in progress");
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Fetch dataset items from a completed run.
    pub async fn dataset_items<T: DeserializeOwned>(&self, dataset_id: &str) -> Result<Vec<T>> {
        let url = format!("{}/datasets/{}/items?format=json", self.base_url, dataset_id);
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApifyError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let items: Vec<T> = resp.json().await?;
        Ok(items)
    }

    /// Scrape reviews end-to-end: start run, poll, fetch results.
    pub async fn scrape_reviews<T: DeserializeOwned>(
        &self,
        actor_id: &str,
        input: &ReviewScraperInput,
    ) -> Result<Vec<T>> {
        tracing::info!(actor_id, "Starting review scrape");

        let run = self.start_run(actor_id, input).await?;
        tracing::info!(run_id = %run.id, "Apify run started, polling for completion");

        let completed = self.wait_for_run(&run.id).await?;
        tracing::info!(
            run_id = %completed.id,
            dataset_id = %completed.default_dataset_id,
            "Run completed, fetching results"
        );

        let reviews: Vec<T> = self.dataset_items(&completed.default_dataset_id).await?;
        tracing::info!(count = reviews.len(), "Fetched reviews");

        Ok(reviews)
    }
}
