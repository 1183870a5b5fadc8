use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Scraping
    pub apify_token: String,

    // AI
    pub openai_api_key: String,
}

impl Config {
    /// Load full configuration. Panics with a clear message if required vars
    /// are missing, so credential problems surface before any network call.
    pub fn from_env() -> Self {
        Self {
            apify_token: required_env("APIFY_API_TOKEN"),
            openai_api_key: required_env("OPENAI_API_KEY"),
        }
    }

    /// Load a minimal config for scrape-and-export runs (no AI key needed).
    pub fn scrape_from_env() -> Self {
        Self {
            apify_token: required_env("APIFY_API_TOKEN"),
            openai_api_key: String::new(),
        }
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}
