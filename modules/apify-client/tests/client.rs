//! Integration tests for `ApifyClient` run lifecycle handling.
//!
//! Uses `wiremock` to stand up a local HTTP server per test so no real
//! network traffic is made. Covers the trigger/poll/fetch happy path, error
//! propagation for non-2xx responses, terminal failure statuses, and the
//! documented no-timeout polling behavior.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use apify_client::{ApifyClient, ApifyError, BookingReview, ReviewScraperInput, RunStatus};

fn test_client(server: &MockServer) -> ApifyClient {
    ApifyClient::new("test-token".to_string())
        .with_base_url(&server.uri())
        .with_poll_interval(Duration::from_millis(10))
}

fn run_json(id: &str, status: &str) -> serde_json::Value {
    json!({
        "data": {
            "id": id,
            "status": status,
            "defaultDatasetId": "ds-1",
            "startedAt": "2024-06-01T10:00:00.000Z",
            "finishedAt": null
        }
    })
}

// ---------------------------------------------------------------------------
// start_run
// ---------------------------------------------------------------------------

#[tokio::test]
async fn start_run_posts_input_and_returns_run_metadata() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/acts/voyager~booking-reviews-scraper/runs"))
        .and(body_partial_json(json!({
            "maxReviews": 1000,
            "timeRange": "2y",
            "sortBy": "review_score_and_price"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(run_json("run-1", "READY")))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let input = ReviewScraperInput::new("https://www.booking.com/hotel/x", "review_score_and_price");
    let run = client
        .start_run("voyager~booking-reviews-scraper", &input)
        .await
        .expect("start_run should succeed");

    assert_eq!(run.id, "run-1");
    assert_eq!(run.status, RunStatus::Pending, "READY maps to Pending");
}

#[tokio::test]
async fn start_run_surfaces_api_error_with_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/acts/voyager~booking-reviews-scraper/runs"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let input = ReviewScraperInput::new("https://www.booking.com/hotel/x", "review_score_and_price");
    let err = client
        .start_run("voyager~booking-reviews-scraper", &input)
        .await
        .expect_err("expected Err for 401");

    match err {
        ApifyError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "invalid token");
        }
        other => panic!("expected ApifyError::Api, got: {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// wait_for_run
// ---------------------------------------------------------------------------

#[tokio::test]
async fn wait_for_run_polls_until_succeeded() {
    let server = MockServer::start().await;

    // First two polls see a non-terminal status, third sees SUCCEEDED.
    Mock::given(method("GET"))
        .and(path("/actor-runs/run-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(run_json("run-1", "RUNNING")))
        .up_to_n_times(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/actor-runs/run-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(run_json("run-1", "SUCCEEDED")))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let run = client
        .wait_for_run("run-1")
        .await
        .expect("wait_for_run should succeed");

    assert_eq!(run.status, RunStatus::Succeeded);
    assert_eq!(run.default_dataset_id, "ds-1");
}

#[tokio::test]
async fn wait_for_run_returns_run_failed_for_aborted() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/actor-runs/run-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(run_json("run-2", "ABORTED")))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .wait_for_run("run-2")
        .await
        .expect_err("expected Err for aborted run");

    assert!(
        matches!(err, ApifyError::RunFailed(RunStatus::Aborted)),
        "expected RunFailed(Aborted), got: {err:?}"
    );
}

/// The poll loop has no internal timeout by design: a run that never reaches
/// a terminal status keeps being polled. This pins a run at RUNNING and
/// asserts the wait is still going after an external deadline — the absence
/// of a timeout is the documented behavior, not a bug.
#[tokio::test]
async fn wait_for_run_never_times_out_on_its_own() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/actor-runs/run-3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(run_json("run-3", "RUNNING")))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let outcome = tokio::time::timeout(Duration::from_millis(200), client.wait_for_run("run-3")).await;

    assert!(
        outcome.is_err(),
        "wait_for_run should still be polling when the external deadline fires"
    );
}

// ---------------------------------------------------------------------------
// dataset_items
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dataset_items_deserializes_typed_records() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/datasets/ds-1/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "rating": 8.0,
                "reviewTitle": "Great stay",
                "likedText": "Clean",
                "dislikedText": "",
                "reviewDate": "2024-06-01",
                "userName": "Alice",
                "propertyResponse": null
            }
        ])))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let items: Vec<BookingReview> = client
        .dataset_items("ds-1")
        .await
        .expect("dataset_items should succeed");

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].rating, Some(8.0));
    assert_eq!(items[0].user_name.as_deref(), Some("Alice"));
    assert!(items[0].property_response.is_none());
}

#[tokio::test]
async fn dataset_items_tolerates_extra_fields() {
    let server = MockServer::start().await;

    // Real datasets carry far more fields than the typed schema names.
    Mock::given(method("GET"))
        .and(path("/datasets/ds-2/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "rating": 6.0,
                "userName": "Bob",
                "hotelId": 12345,
                "checkInDate": "2024-05-01",
                "roomInfo": {"type": "double"}
            }
        ])))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let items: Vec<BookingReview> = client
        .dataset_items("ds-2")
        .await
        .expect("unknown fields should be ignored");

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].rating, Some(6.0));
}

// ---------------------------------------------------------------------------
// scrape_reviews end-to-end
// ---------------------------------------------------------------------------

#[tokio::test]
async fn scrape_reviews_runs_trigger_poll_fetch_in_sequence() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/acts/maxcopell~tripadvisor-reviews/runs"))
        .respond_with(ResponseTemplate::new(201).set_body_json(run_json("run-9", "READY")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/actor-runs/run-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(run_json("run-9", "SUCCEEDED")))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/datasets/ds-1/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"rating": 5.0, "title": "Lovely", "text": "Would return."}
        ])))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let input = ReviewScraperInput::new("https://www.tripadvisor.com/x", "Most recent");
    let reviews: Vec<apify_client::TripAdvisorReview> = client
        .scrape_reviews("maxcopell~tripadvisor-reviews", &input)
        .await
        .expect("end-to-end scrape should succeed");

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].rating, Some(5.0));
}
