//! Episode listing routes.

#[cfg(test)]
#[path = "episodes_test.rs"]
mod episodes_test;

use axum::extract::State;
use axum::response::Json;
use feed::{Episode, HealthStatus};

use super::{ApiError, now_rfc3339};
use crate::services::youtube;
use crate::state::AppState;

/// `GET /api/episodes` — the channel's uploads shaped into episode records,
/// newest first, as a bare JSON array.
pub async fn list_episodes(State(state): State<AppState>) -> Result<Json<Vec<Episode>>, ApiError> {
    let episodes = youtube::fetch_episodes(&state).await?;
    tracing::info!(count = episodes.len(), "episodes served");
    Ok(Json(episodes))
}

/// `GET /api/episodes/health` — reports whether the video platform proxy is
/// ready to serve (credentials present), without calling upstream.
pub async fn episodes_health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(health_status(state.config.youtube_configured()))
}

fn health_status(configured: bool) -> HealthStatus {
    let (status, message) = if configured {
        ("OK", "Episodes API is running")
    } else {
        ("DEGRADED", "Episodes API is missing YouTube credentials")
    };
    HealthStatus {
        status: status.to_owned(),
        message: message.to_owned(),
        timestamp: now_rfc3339(),
    }
}
