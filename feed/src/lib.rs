//! Shared wire model for the podcast site API.
//!
//! This crate owns the JSON shapes exchanged between `server` and `client`:
//! episode records shaped from the video platform, blog posts shaped from
//! the social feed, and the health envelope. Field names are camelCase on
//! the wire to match the public API contract.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use serde::{Deserialize, Serialize};

/// One podcast episode as served by `GET /api/episodes`.
///
/// Upcoming entries (`is_upcoming`) are scheduled premieres/livestreams;
/// for those, `sort_timestamp` reflects the scheduled start rather than the
/// publish time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Video platform ID for the episode.
    pub id: String,
    /// Display episode number (e.g. `"Ep. 123"`), empty when the title
    /// carries no recognizable numbering.
    pub number: String,
    pub title: String,
    pub description: String,
    /// Human-readable publish (or scheduled) date, e.g. `"Jan 5, 2025"`.
    pub date: String,
    /// Formatted runtime, e.g. `"1:02:03"`; `"Upcoming"` for scheduled entries.
    pub duration: String,
    /// Best-available thumbnail URL; empty when the platform provides none.
    pub thumbnail: String,
    /// Formatted view count with thousands separators.
    pub view_count: String,
    /// True on the most recent published episode.
    #[serde(default)]
    pub featured: bool,
    pub youtube_url: String,
    #[serde(default)]
    pub spotify_url: Option<String>,
    #[serde(default)]
    pub apple_podcast_url: Option<String>,
    #[serde(default)]
    pub is_upcoming: bool,
    /// Milliseconds since the Unix epoch, used for recency ordering.
    #[serde(default)]
    pub sort_timestamp: i64,
}

/// One blog entry as served by `GET /api/blog/reddit`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedditBlogPost {
    pub id: String,
    pub title: String,
    /// Post body in the feed's markdown dialect; may be empty for link posts.
    pub selftext: String,
    pub url: String,
    /// Seconds since the Unix epoch.
    pub created_utc: i64,
    pub author: String,
    #[serde(default)]
    pub flair: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// Response envelope for the blog feed endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub posts: Vec<RedditBlogPost>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<BlogDebug>,
}

/// Diagnostic payload attached when the blog endpoint is called with `debug=1`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDebug {
    pub request: BlogDebugRequest,
    pub reddit_status: u16,
    /// Number of posts the upstream listing returned before filtering.
    pub total_children: usize,
    /// Number of posts surviving the flair/author filter.
    pub filtered_count: usize,
    /// First few upstream posts, for eyeballing filter behavior.
    pub sample: Vec<BlogDebugSample>,
}

/// Echo of the effective upstream request parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDebugRequest {
    pub subreddit: String,
    pub required_flair: String,
    pub allowed_author: String,
    pub limit: usize,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDebugSample {
    pub id: String,
    pub title: String,
    pub flair: Option<String>,
    pub author: String,
}

/// Liveness envelope for `GET /api/health` and `GET /api/episodes/health`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    /// RFC 3339 timestamp of the health check.
    pub timestamp: String,
}
