//! REST API helpers for communicating with the episode/blog gateway.
//!
//! In the browser (csr): real HTTP calls via `gloo-net`. Without the
//! feature (native test builds): stubs returning errors, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! One fetch attempt per call; transport failures and non-2xx statuses
//! collapse into a single `FetchError` so sections degrade to their failed
//! state instead of crashing. No caching, no retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use feed::{BlogResponse, Episode, HealthStatus};

/// Uniform failure for a gateway call. Callers render a static message and
/// do not branch on the cause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchError(pub String);

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compile-time override of the gateway origin; empty means same-origin.
#[cfg(any(test, feature = "csr"))]
fn api_base() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or("")
}

#[cfg(any(test, feature = "csr"))]
fn episodes_endpoint() -> String {
    format!("{}/api/episodes", api_base())
}

#[cfg(any(test, feature = "csr"))]
fn episodes_health_endpoint() -> String {
    format!("{}/api/episodes/health", api_base())
}

/// Build the blog endpoint with only the parameters the caller overrides;
/// the gateway fills in configured defaults for the rest.
#[cfg(any(test, feature = "csr"))]
fn blog_endpoint(limit: usize, flair: Option<&str>, author: Option<&str>, debug: bool) -> String {
    let mut url = format!("{}/api/blog/reddit?limit={limit}", api_base());
    if let Some(flair) = flair {
        url.push_str("&flair=");
        url.push_str(flair);
    }
    if let Some(author) = author {
        url.push_str("&author=");
        url.push_str(author);
    }
    if debug {
        url.push_str("&debug=1");
    }
    url
}

#[cfg(feature = "csr")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError(e.to_string()))?;
    if !resp.ok() {
        return Err(FetchError(format!("request failed: {}", resp.status())));
    }
    resp.json::<T>().await.map_err(|e| FetchError(e.to_string()))
}

/// Fetch the shaped episode list from `GET /api/episodes`.
///
/// # Errors
///
/// Returns a `FetchError` on transport failure, non-2xx status, or a body
/// that does not decode as an episode array.
pub async fn fetch_episodes() -> Result<Vec<Episode>, FetchError> {
    #[cfg(feature = "csr")]
    {
        get_json(&episodes_endpoint()).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(FetchError("not available outside the browser".to_owned()))
    }
}

/// Fetch filtered blog posts from `GET /api/blog/reddit`.
///
/// # Errors
///
/// Returns a `FetchError` on transport failure, non-2xx status, or a body
/// that does not decode as a blog response.
pub async fn fetch_blog_posts(
    limit: usize,
    flair: Option<&str>,
    author: Option<&str>,
    debug: bool,
) -> Result<BlogResponse, FetchError> {
    #[cfg(feature = "csr")]
    {
        get_json(&blog_endpoint(limit, flair, author, debug)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (limit, flair, author, debug);
        Err(FetchError("not available outside the browser".to_owned()))
    }
}

/// Fetch the episode-service health report. Returns `None` outside the
/// browser or when the gateway is unreachable; health is advisory only.
pub async fn fetch_episodes_health() -> Option<HealthStatus> {
    #[cfg(feature = "csr")]
    {
        get_json(&episodes_health_endpoint()).await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
