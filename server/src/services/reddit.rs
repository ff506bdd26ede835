//! Reddit blog feed proxy.
//!
//! DESIGN
//! ======
//! The show's blog lives as flaired posts in its subreddit. The gateway
//! pulls the subreddit's `new` listing once, filters to the required flair
//! and allowed author, and reshapes the survivors into blog posts. The
//! filter runs here rather than upstream because the listing API cannot
//! combine flair and author restrictions.

#[cfg(test)]
#[path = "reddit_test.rs"]
mod reddit_test;

use feed::{BlogDebug, BlogDebugRequest, BlogDebugSample, BlogResponse, RedditBlogPost};
use serde::Deserialize;

use crate::state::AppState;

/// Posts requested from the listing before filtering; filtering is lossy, so
/// this stays well above the response limit.
const UPSTREAM_FETCH_LIMIT: usize = 100;
const DEFAULT_LIMIT: usize = 6;
const MAX_LIMIT: usize = 25;
const DEBUG_SAMPLE_SIZE: usize = 5;

#[derive(Debug, thiserror::Error)]
pub enum RedditError {
    #[error("Reddit request failed: {0}")]
    Request(String),
    #[error("Reddit returned status {0}")]
    Status(u16),
    #[error("failed to parse Reddit listing: {0}")]
    Parse(String),
}

/// Effective request after query-parameter defaulting in the route layer.
#[derive(Debug)]
pub struct BlogRequest {
    pub limit: usize,
    pub flair: String,
    pub author: String,
    pub debug: bool,
}

/// Clamp a requested post count into `1..=25`, defaulting to 6.
#[must_use]
pub fn clamp_limit(requested: Option<usize>) -> usize {
    requested.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

/// Fetch the subreddit listing and shape it into the blog response.
/// Single attempt; upstream failure is terminal for this request.
pub async fn fetch_blog_posts(
    state: &AppState,
    request: &BlogRequest,
) -> Result<BlogResponse, RedditError> {
    let subreddit = &state.config.blog_subreddit;
    let url = listing_url(subreddit);

    let response =
        state.http.get(&url).send().await.map_err(|e| RedditError::Request(e.to_string()))?;
    let status = response.status();
    let text = response.text().await.map_err(|e| RedditError::Request(e.to_string()))?;
    if !status.is_success() {
        return Err(RedditError::Status(status.as_u16()));
    }

    let raw_posts = parse_listing(&text)?;
    let total_children = raw_posts.len();
    let posts = filter_posts(&raw_posts, &request.flair, &request.author, request.limit);

    let debug = request.debug.then(|| BlogDebug {
        request: BlogDebugRequest {
            subreddit: subreddit.clone(),
            required_flair: request.flair.clone(),
            allowed_author: request.author.clone(),
            limit: request.limit,
            url,
        },
        reddit_status: status.as_u16(),
        total_children,
        filtered_count: posts.len(),
        sample: raw_posts.iter().take(DEBUG_SAMPLE_SIZE).map(debug_sample).collect(),
    });

    Ok(BlogResponse { posts, error: None, message: None, debug })
}

fn listing_url(subreddit: &str) -> String {
    format!("https://www.reddit.com/r/{subreddit}/new.json?limit={UPSTREAM_FETCH_LIMIT}&raw_json=1")
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
struct ListingChild {
    data: RawPost,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPost {
    pub(crate) id: String,
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) selftext: String,
    #[serde(default)]
    pub(crate) url: String,
    #[serde(default)]
    pub(crate) permalink: String,
    #[serde(default)]
    pub(crate) created_utc: f64,
    #[serde(default)]
    pub(crate) author: String,
    #[serde(default)]
    pub(crate) link_flair_text: Option<String>,
    #[serde(default)]
    pub(crate) thumbnail: Option<String>,
}

// =============================================================================
// PARSING & FILTERING
// =============================================================================

pub(crate) fn parse_listing(json: &str) -> Result<Vec<RawPost>, RedditError> {
    let listing: Listing =
        serde_json::from_str(json).map_err(|e| RedditError::Parse(e.to_string()))?;
    Ok(listing.data.children.into_iter().map(|child| child.data).collect())
}

/// Keep posts matching the required flair (case-insensitive) and allowed
/// author, newest-first order preserved, truncated to `limit`.
pub(crate) fn filter_posts(
    raw: &[RawPost],
    required_flair: &str,
    allowed_author: &str,
    limit: usize,
) -> Vec<RedditBlogPost> {
    raw.iter()
        .filter(|post| {
            post.link_flair_text
                .as_deref()
                .is_some_and(|flair| flair.eq_ignore_ascii_case(required_flair))
                && post.author.eq_ignore_ascii_case(allowed_author)
        })
        .take(limit)
        .map(shape_post)
        .collect()
}

#[allow(clippy::cast_possible_truncation)]
fn shape_post(raw: &RawPost) -> RedditBlogPost {
    RedditBlogPost {
        id: raw.id.clone(),
        title: raw.title.clone(),
        selftext: raw.selftext.clone(),
        url: post_url(raw),
        created_utc: raw.created_utc as i64,
        author: raw.author.clone(),
        flair: raw.link_flair_text.clone(),
        thumbnail: normalize_thumbnail(raw.thumbnail.as_deref()),
    }
}

/// Self posts carry no outbound URL worth linking; fall back to the
/// permalink on reddit itself.
pub(crate) fn post_url(raw: &RawPost) -> String {
    if raw.url.starts_with("http") {
        raw.url.clone()
    } else {
        format!("https://www.reddit.com{}", raw.permalink)
    }
}

/// Reddit uses placeholder keywords (`self`, `default`, ...) instead of
/// omitting the thumbnail; only real URLs survive.
pub(crate) fn normalize_thumbnail(raw: Option<&str>) -> Option<String> {
    raw.filter(|t| t.starts_with("http")).map(str::to_owned)
}

fn debug_sample(raw: &RawPost) -> BlogDebugSample {
    BlogDebugSample {
        id: raw.id.clone(),
        title: raw.title.clone(),
        flair: raw.link_flair_text.clone(),
        author: raw.author.clone(),
    }
}
