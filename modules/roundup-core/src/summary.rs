//! Prompt construction and LLM calls for the narrative summary and the
//! policy-violation report. The LLM boundary is free text in, free text out;
//! a failed call is surfaced to the caller and leaves the loaded review
//! dataset untouched.

use anyhow::{bail, Result};
use chrono::NaiveDate;

use ai_client::OpenAi;

use crate::types::CanonicalReview;

/// Model used for both analysis modes.
pub const ANALYSIS_MODEL: &str = "gpt-4";

/// Summary and report generation refuse windows longer than a year; the
/// prompt would otherwise outgrow the context budget.
const MAX_ANALYSIS_RANGE_DAYS: i64 = 365;

const SUMMARY_SYSTEM_PROMPT: &str =
    "You are a professional business analyst specializing in customer feedback analysis.";

const VIOLATION_SYSTEM_PROMPT: &str = "You are a professional review policy compliance analyst \
     specializing in identifying reviews that violate platform terms and conditions.";

/// Inclusive analysis window, chosen by the user at display time.
#[derive(Debug, Clone, Copy)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// Render each review as a labeled block the model can attribute quotes to.
pub fn format_review_block(reviews: &[CanonicalReview]) -> String {
    let mut blocks = Vec::new();
    for review in reviews {
        let date = review
            .review_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let rating = review
            .star_rating
            .map(|s| format!("{s:.1}"))
            .unwrap_or_else(|| "unrated".to_string());
        let replied = if review.replied { "Yes" } else { "No" };

        blocks.push(format!(
            "Date: {date}\nPlatform: {platform}\nRating: {rating} stars\nReview: {text}\nReplied: {replied}\n---\n",
            platform = review.platform,
            text = review.review_text,
        ));
    }
    blocks.join("\n")
}

/// Narrative-summary instruction mode.
pub fn build_summary_prompt(reviews: &[CanonicalReview], range: DateRange) -> String {
    format!(
        "Analyze these reviews from {start} to {end} and provide a structured summary with the following sections:

1. Overall Sentiment
2. Positive Highlights
3. Areas for Improvement
4. Actionable Suggestions
5. Unreplied Reviews (if any)

Reviews to analyze:
{reviews}

Please provide a professional, concise, and solution-oriented summary that helps managers take efficient actions based on customer feedback insights.",
        start = range.start,
        end = range.end,
        reviews = format_review_block(reviews),
    )
}

/// Policy-violation instruction mode. Only clear, evidence-backed violations
/// should be flagged; negative-but-legitimate reviews must pass.
pub fn build_violation_prompt(reviews: &[CanonicalReview], range: DateRange) -> String {
    format!(
        "Analyze these reviews from {start} to {end} and identify ONLY reviews that have clear, legitimate grounds for removal based on platform policies. For each flagged review, provide:

1. Review Details (date, platform, rating)
2. Specific Violation(s) Identified
3. Evidence from the review text
4. Draft message to the platform requesting removal

IMPORTANT: Only flag reviews that have CLEAR and UNDENIABLE violations. Do not include reviews that are simply negative or critical but legitimate. Focus strictly on identifying:

- Fake or fraudulent reviews (e.g., reviewer never stayed)
- Reviews from non-guests (e.g., competitors, non-customers)
- Offensive language or hate speech
- Personal attacks or threats
- Confidential information exposure
- Reviews for wrong business
- Reviews from canceled bookings/no-shows

Reviews to analyze:
{reviews}

Please provide a professional, evidence-based analysis that ONLY includes reviews with clear violations of platform policies. If no reviews meet these strict criteria, state that no reviews were found that could be legitimately challenged.",
        start = range.start,
        end = range.end,
        reviews = format_review_block(reviews),
    )
}

pub async fn generate_summary(
    ai: &OpenAi,
    reviews: &[CanonicalReview],
    range: DateRange,
) -> Result<String> {
    check_range(range)?;
    ai.chat_completion(SUMMARY_SYSTEM_PROMPT, build_summary_prompt(reviews, range))
        .await
}

pub async fn generate_violation_report(
    ai: &OpenAi,
    reviews: &[CanonicalReview],
    range: DateRange,
) -> Result<String> {
    check_range(range)?;
    ai.chat_completion(
        VIOLATION_SYSTEM_PROMPT,
        build_violation_prompt(reviews, range),
    )
    .await
}

fn check_range(range: DateRange) -> Result<()> {
    if range.days() > MAX_ANALYSIS_RANGE_DAYS {
        bail!(
            "analysis is limited to 1 year of reviews; requested window is {} days",
            range.days()
        );
    }
    Ok(())
}
