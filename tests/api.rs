//! Integration tests driving the full router in-process.

use std::sync::OnceLock;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use branch_api::api::{create_router, AppState};
use branch_api::config::Config;
use branch_api::metrics;
use http_body_util::BodyExt;
use metrics_exporter_prometheus::PrometheusHandle;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tower::ServiceExt;

/// The global recorder can only be installed once per process.
fn metrics_handle() -> PrometheusHandle {
    static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
    HANDLE
        .get_or_init(|| metrics::install_recorder().expect("install recorder"))
        .clone()
}

fn config_from(pairs: &[(&str, &str)]) -> Config {
    let vars = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string()));
    Config::from_vars(vars).expect("config loads")
}

fn app(config: Config) -> Router {
    create_router(AppState::new(config, metrics_handle()))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

async fn get_json(app: Router, uri: &str) -> Value {
    let (status, body) = get(app, uri).await;
    assert_eq!(status, StatusCode::OK, "GET {uri}");
    serde_json::from_slice(&body).expect("json body")
}

#[tokio::test]
async fn root_reports_unknown_branch_when_unset() {
    let body = get_json(app(config_from(&[])), "/").await;

    assert_eq!(body["message"], "Side-by-Side Deployment Demo API");
    assert_eq!(body["branch"], "unknown");
    assert_eq!(body["version"], "1.0.0");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn health_is_always_healthy() {
    let body = get_json(app(config_from(&[("BRANCH_NAME", "feature-x")])), "/health").await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["branch"], "feature-x");
    assert_eq!(body["version"], "1.0.0");
}

#[tokio::test]
async fn info_reflects_machine_hostname() {
    let body = get_json(app(config_from(&[])), "/api/info").await;

    let host = gethostname::gethostname().to_string_lossy().into_owned();
    let expected = host.split('.').next().unwrap_or_default();
    assert_eq!(body["machineName"], expected);
    assert!(!body["machineName"].as_str().unwrap().contains('.'));
    assert_eq!(body["environment"], "Production");
}

#[tokio::test]
async fn empty_branch_is_served_as_set() {
    let body = get_json(app(config_from(&[("BRANCH_NAME", "")])), "/health").await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["branch"], "");
}

#[tokio::test]
async fn info_reports_configured_environment() {
    let body = get_json(app(config_from(&[("APP_ENVIRONMENT", "Staging")])), "/api/info").await;

    assert_eq!(body["environment"], "Staging");
}

#[tokio::test]
async fn version_override_is_reflected_everywhere() {
    let config = config_from(&[("VERSION", "2.3.4")]);

    for uri in ["/", "/health", "/api/info"] {
        let body = get_json(app(config.clone()), uri).await;
        assert_eq!(body["version"], "2.3.4", "GET {uri}");
    }
}

#[tokio::test]
async fn timestamps_are_rfc3339() {
    let body = get_json(app(config_from(&[])), "/api/info").await;

    let raw = body["timestamp"].as_str().expect("timestamp string");
    assert!(chrono::DateTime::parse_from_rfc3339(raw).is_ok(), "{raw}");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, _) = get(app(config_from(&[])), "/api/missing").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn openapi_document_lists_routes() {
    let doc = get_json(app(config_from(&[])), "/swagger/v1/swagger.json").await;

    let paths = doc["paths"].as_object().expect("paths object");
    assert!(paths.contains_key("/"));
    assert!(paths.contains_key("/health"));
    assert!(paths.contains_key("/api/info"));
    assert_eq!(doc["paths"]["/api/info"]["get"]["operationId"], "GetInfo");
}

#[tokio::test]
async fn metrics_count_served_requests() {
    let config = config_from(&[]);

    get_json(app(config.clone()), "/health").await;
    let (status, body) = get(app(config), "/metrics").await;

    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(body).unwrap();
    assert!(text.contains("http_requests_total"), "{text}");
    assert!(text.contains("path=\"/health\""), "{text}");
}
