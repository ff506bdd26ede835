//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the public API surface of the gateway: health probes,
//! the episodes proxy, and the blog proxy. The frontend is hosted separately,
//! so cross-origin access is limited to an explicit origin allow-list.


pub mod blog;
pub mod episodes;

use std::any::Any;

use axum::Router;
use axum::http::{HeaderValue, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use feed::HealthStatus;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::AppState;

/// API router with CORS, request tracing, and panic containment.
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/api/health", get(health))
        .route("/api/episodes", get(episodes::list_episodes))
        .route("/api/episodes/health", get(episodes::episodes_health))
        .route("/api/blog/reddit", get(blog::reddit_posts))
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}

/// Allow-listed origins with credentials; methods and headers match what the
/// browser frontend sends.
fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::CACHE_CONTROL])
        .allow_credentials(true)
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "OK".to_owned(),
        message: "The Days Grimm backend API is running".to_owned(),
        timestamp: now_rfc3339(),
    })
}

async fn not_found(uri: Uri) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(error_body("Endpoint not found", &format!("The endpoint {uri} does not exist"))),
    )
}

/// Last line of defense: a panicking handler becomes a 500 instead of a
/// dropped connection.
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| err.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unhandled panic".to_owned());
    tracing::error!(%detail, "handler panicked");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(error_body("Something went wrong!", &detail)))
        .into_response()
}

pub(crate) fn error_body(error: &str, message: &str) -> serde_json::Value {
    serde_json::json!({ "error": error, "message": message })
}

pub(crate) fn now_rfc3339() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default()
}

/// Uniform JSON error response for route handlers.
///
/// Service-layer errors carry their own messages; the route layer only
/// decides the status code and envelope (all upstream failures surface as
/// 500 per the API contract).
pub(crate) struct ApiError {
    status: StatusCode,
    error: &'static str,
    message: String,
}

impl ApiError {
    pub(crate) fn internal(message: String) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, error: "Something went wrong!", message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(error_body(self.error, &self.message))).into_response()
    }
}

impl From<crate::services::youtube::YoutubeError> for ApiError {
    fn from(e: crate::services::youtube::YoutubeError) -> Self {
        Self::internal(e.to_string())
    }
}

impl From<crate::services::reddit::RedditError> for ApiError {
    fn from(e: crate::services::reddit::RedditError) -> Self {
        Self::internal(e.to_string())
    }
}
