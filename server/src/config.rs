//! Environment-driven configuration.
//!
//! DESIGN
//! ======
//! All knobs come from the environment (`.env` is loaded in `main`). Missing
//! upstream credentials are not fatal at startup — the affected endpoint
//! reports the problem per request instead, so the health routes stay up.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_BLOG_SUBREDDIT: &str = "TheDaysGrimm";
const DEFAULT_BLOG_FLAIR: &str = "Blog";
const DEFAULT_BLOG_AUTHOR: &str = "thedaysgrimm";

/// Origins allowed by default when `CORS_ORIGINS` is not set: local dev
/// frontend plus the production site origins.
const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "https://thedaysgrimm.com",
    "https://www.thedaysgrimm.com",
];

/// Runtime configuration, read once in `main` and shared via `AppState`.
#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// YouTube Data API key; episodes endpoint fails per-request without it.
    pub youtube_api_key: Option<String>,
    /// Channel whose uploads become the episode list.
    pub youtube_channel_id: Option<String>,
    pub blog_subreddit: String,
    pub blog_flair: String,
    pub blog_author: String,
    /// CORS allow-list, one origin per entry.
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let cors_origins = std::env::var("CORS_ORIGINS")
            .ok()
            .map_or_else(default_cors_origins, |v| parse_origin_list(&v));

        Self {
            port,
            youtube_api_key: non_empty_var("YOUTUBE_API_KEY"),
            youtube_channel_id: non_empty_var("YOUTUBE_CHANNEL_ID"),
            blog_subreddit: std::env::var("BLOG_SUBREDDIT")
                .unwrap_or_else(|_| DEFAULT_BLOG_SUBREDDIT.to_owned()),
            blog_flair: std::env::var("BLOG_FLAIR").unwrap_or_else(|_| DEFAULT_BLOG_FLAIR.to_owned()),
            blog_author: std::env::var("BLOG_AUTHOR")
                .unwrap_or_else(|_| DEFAULT_BLOG_AUTHOR.to_owned()),
            cors_origins,
        }
    }

    /// True when the episodes endpoint has everything it needs to call the
    /// video platform.
    #[must_use]
    pub fn youtube_configured(&self) -> bool {
        self.youtube_api_key.is_some() && self.youtube_channel_id.is_some()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn default_cors_origins() -> Vec<String> {
    DEFAULT_CORS_ORIGINS.iter().map(|&s| s.to_owned()).collect()
}

/// Parse a comma-separated origin list, dropping empty entries.
fn parse_origin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
