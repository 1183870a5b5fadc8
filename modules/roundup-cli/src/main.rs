use std::fs::File;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{Duration, NaiveDate, Utc};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ai_client::OpenAi;
use apify_client::ApifyClient;
use roundup_core::summary::{generate_summary, generate_violation_report, DateRange, ANALYSIS_MODEL};
use roundup_core::{
    export, fetch_all, filter_by_date_range, merge_reviews, CanonicalReview, Config, Platform,
    PlatformSource,
};

/// Aggregate reviews for one establishment across Booking.com, Expedia,
/// TripAdvisor and Google Maps, merge them into one dataset, export it, and
/// optionally run LLM analysis over a date window.
#[derive(Parser, Debug)]
#[command(name = "roundup")]
struct Args {
    /// Establishment name, used in log output
    #[arg(long, default_value = "establishment")]
    name: String,

    /// Booking.com property URL
    #[arg(long, env = "BOOKING_URL")]
    booking_url: Option<String>,

    /// Expedia property URL
    #[arg(long, env = "EXPEDIA_URL")]
    expedia_url: Option<String>,

    /// TripAdvisor property URL
    #[arg(long, env = "TRIPADVISOR_URL")]
    tripadvisor_url: Option<String>,

    /// Google Maps place URL
    #[arg(long, env = "GOOGLE_MAPS_URL")]
    google_url: Option<String>,

    /// Start of the display window (YYYY-MM-DD); defaults to 30 days ago
    #[arg(long)]
    from: Option<NaiveDate>,

    /// End of the display window (YYYY-MM-DD); defaults to today
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Directory for CSV and per-platform JSON exports
    #[arg(long, default_value = "out")]
    output_dir: PathBuf,

    /// Generate a narrative summary of the filtered reviews
    #[arg(long)]
    summary: bool,

    /// Generate a policy-violation report over the filtered reviews
    #[arg(long)]
    violations: bool,
}

impl Args {
    fn sources(&self) -> Vec<PlatformSource> {
        let configured = [
            (Platform::Booking, &self.booking_url),
            (Platform::Expedia, &self.expedia_url),
            (Platform::TripAdvisor, &self.tripadvisor_url),
            (Platform::Google, &self.google_url),
        ];
        configured
            .into_iter()
            .filter_map(|(platform, url)| {
                url.as_ref()
                    .map(|u| PlatformSource::new(platform, u.clone()))
            })
            .collect()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let sources = args.sources();
    if sources.is_empty() {
        bail!("no platform URLs configured; pass at least one --*-url flag or env var");
    }

    let wants_analysis = args.summary || args.violations;
    let config = if wants_analysis {
        Config::from_env()
    } else {
        Config::scrape_from_env()
    };

    info!(establishment = %args.name, platforms = sources.len(), "Loading reviews");

    let client = ApifyClient::new(config.apify_token.clone());
    let outcome = fetch_all(&client, &sources).await;

    for failure in &outcome.failures {
        warn!(platform = %failure.platform, error = %failure.error, "Platform skipped");
    }
    if outcome.collections.iter().all(|c| c.is_empty()) {
        bail!("no reviews loaded from any platform");
    }

    let merged = merge_reviews(outcome.collections);
    info!(total = merged.len(), "Merged review dataset");

    let today = Utc::now().date_naive();
    let range = DateRange {
        start: args.from.unwrap_or(today - Duration::days(30)),
        end: args.to.unwrap_or(today),
    };
    let filtered = filter_by_date_range(&merged, range.start, range.end);
    info!(
        from = %range.start,
        to = %range.end,
        count = filtered.len(),
        "Filtered to display window"
    );

    log_platform_stats(&filtered);
    export_dataset(&args.output_dir, &filtered)?;

    if wants_analysis {
        let ai = OpenAi::new(config.openai_api_key.clone(), ANALYSIS_MODEL);

        if args.summary {
            let summary = generate_summary(&ai, &filtered, range)
                .await
                .context("summary generation failed")?;
            println!("\n=== Summary ===\n{summary}");
        }

        if args.violations {
            let report = generate_violation_report(&ai, &filtered, range)
                .await
                .context("violation report generation failed")?;
            println!("\n=== Review Violation Report ===\n{report}");
        }
    }

    Ok(())
}

fn log_platform_stats(reviews: &[CanonicalReview]) {
    for platform in Platform::ALL {
        let ratings: Vec<f64> = reviews
            .iter()
            .filter(|r| r.platform == platform)
            .filter_map(|r| r.star_rating)
            .collect();
        let count = reviews.iter().filter(|r| r.platform == platform).count();
        if count == 0 {
            continue;
        }
        let avg = ratings.iter().sum::<f64>() / ratings.len().max(1) as f64;
        info!(platform = %platform, count, avg_rating = format!("{avg:.1}"), "Platform stats");
    }
}

fn export_dataset(dir: &PathBuf, reviews: &[CanonicalReview]) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output dir {}", dir.display()))?;

    let csv_path = dir.join("reviews.csv");
    let file = File::create(&csv_path)
        .with_context(|| format!("failed to create {}", csv_path.display()))?;
    export::write_csv(file, reviews)?;
    info!(path = %csv_path.display(), rows = reviews.len(), "Wrote CSV export");

    export::write_platform_json(dir, reviews)?;
    Ok(())
}
