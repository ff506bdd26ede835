//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The gateway is stateless beyond its configuration and a shared outbound
//! HTTP client; there is no persistence layer.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;

const REQUEST_TIMEOUT_SECS: u64 = 20;
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Identifies the gateway to upstreams; the social feed rejects anonymous
/// user agents.
const USER_AGENT: &str = concat!("daysgrimm-gateway/", env!("CARGO_PKG_VERSION"));

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    /// Outbound client reused across all proxy requests.
    pub http: reqwest::Client,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http, config: Arc::new(config) })
    }
}
