pub mod adapters;
pub mod config;
pub mod dates;
pub mod export;
pub mod fetch;
pub mod merge;
pub mod summary;
pub mod types;

pub use config::Config;
pub use fetch::{fetch_all, fetch_platform, FetchOutcome, PlatformFailure, PlatformSource};
pub use merge::{filter_by_date_range, merge_reviews};
pub use types::{CanonicalReview, Platform};
