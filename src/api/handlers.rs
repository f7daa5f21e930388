//! HTTP API handlers.

use std::sync::Arc;

use axum::{extract::State, http::header, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use utoipa::ToSchema;

use crate::config::Config;

/// Fixed greeting returned by the root endpoint.
pub const ROOT_MESSAGE: &str = "Side-by-Side Deployment Demo API";

/// Status reported by the health endpoint.
pub const HEALTHY: &str = "healthy";

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Deployment identity, resolved at startup.
    pub config: Arc<Config>,
    /// Prometheus handle used to render `/metrics`.
    pub metrics: PrometheusHandle,
}

impl AppState {
    /// Create new app state.
    pub fn new(config: Config, metrics: PrometheusHandle) -> Self {
        Self {
            config: Arc::new(config),
            metrics,
        }
    }
}

/// Root response.
#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    /// Fixed greeting.
    pub message: String,
    /// Branch this instance was built from.
    pub branch: String,
    /// Deployed version.
    pub version: String,
    /// Current UTC time.
    pub timestamp: DateTime<Utc>,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Status: "healthy".
    pub status: String,
    /// Branch this instance was built from.
    pub branch: String,
    /// Deployed version.
    pub version: String,
}

/// Deployment info response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InfoResponse {
    /// Branch this instance was built from.
    pub branch: String,
    /// Deployed version.
    pub version: String,
    /// Hosting environment name.
    pub environment: String,
    /// Host name of the machine serving the request.
    pub machine_name: String,
    /// Current UTC time.
    pub timestamp: DateTime<Utc>,
}

/// Short host name of the current machine, lossily converted to UTF-8.
pub fn machine_name() -> String {
    short_host_name(&gethostname::gethostname().to_string_lossy())
}

/// Host name up to the first `'.'`.
pub fn short_host_name(host: &str) -> String {
    host.split('.').next().unwrap_or_default().to_string()
}

/// Root handler - greeting plus deployment identity.
#[utoipa::path(
    get,
    path = "/",
    operation_id = "GetRoot",
    responses(
        (status = 200, description = "Greeting with branch and version", body = RootResponse)
    ),
    tag = "Deployment"
)]
pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: ROOT_MESSAGE.to_string(),
        branch: state.config.branch_name.clone(),
        version: state.config.version.clone(),
        timestamp: Utc::now(),
    })
}

/// Health check handler - always returns 200.
#[utoipa::path(
    get,
    path = "/health",
    operation_id = "HealthCheck",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Observability"
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTHY.to_string(),
        branch: state.config.branch_name.clone(),
        version: state.config.version.clone(),
    })
}

/// Info handler - deployment identity, environment and host.
#[utoipa::path(
    get,
    path = "/api/info",
    operation_id = "GetInfo",
    responses(
        (status = 200, description = "Deployment details", body = InfoResponse)
    ),
    tag = "Deployment"
)]
pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        branch: state.config.branch_name.clone(),
        version: state.config.version.clone(),
        environment: state.config.app_environment.clone(),
        machine_name: machine_name(),
        timestamp: Utc::now(),
    })
}

/// Metrics handler - Prometheus text exposition.
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
