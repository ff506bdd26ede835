//! Blog feed routes.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use axum::extract::{Query, State};
use axum::response::Json;
use feed::BlogResponse;
use serde::Deserialize;

use super::ApiError;
use crate::services::reddit;
use crate::state::AppState;

/// Query parameters accepted by `GET /api/blog/reddit`. All optional;
/// defaults come from configuration.
#[derive(Debug, Default, Deserialize)]
pub struct BlogParams {
    pub limit: Option<usize>,
    pub flair: Option<String>,
    pub author: Option<String>,
    pub debug: Option<String>,
}

/// `GET /api/blog/reddit?limit&flair&author&debug` — the subreddit's new
/// posts filtered down to the configured blog flair and author.
pub async fn reddit_posts(
    State(state): State<AppState>,
    Query(params): Query<BlogParams>,
) -> Result<Json<BlogResponse>, ApiError> {
    let request = reddit::BlogRequest {
        limit: reddit::clamp_limit(params.limit),
        flair: params.flair.unwrap_or_else(|| state.config.blog_flair.clone()),
        author: params.author.unwrap_or_else(|| state.config.blog_author.clone()),
        debug: is_truthy(params.debug.as_deref()),
    };
    let response = reddit::fetch_blog_posts(&state, &request).await?;
    tracing::info!(count = response.posts.len(), debug = request.debug, "blog posts served");
    Ok(Json(response))
}

/// `debug=1` and `debug=true` both enable the diagnostic envelope.
fn is_truthy(value: Option<&str>) -> bool {
    matches!(value, Some("1") | Some("true"))
}
