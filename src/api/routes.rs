//! HTTP API route definitions.

use axum::{middleware, routing::get, Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::docs::{ApiDoc, OPENAPI_PATH, SWAGGER_UI_PATH};
use super::handlers::{health, info, metrics, root, AppState};
use crate::metrics::metrics_middleware;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        // Deployment endpoints
        .route("/", get(root))
        .route("/api/info", get(info))
        // Health endpoint
        .route("/health", get(health))
        // Metrics endpoint
        .route("/metrics", get(metrics));

    if state.config.swagger_enabled {
        router =
            router.merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_PATH, ApiDoc::openapi()));
    } else {
        router = router.route(OPENAPI_PATH, get(|| async { Json(ApiDoc::openapi()) }));
    }

    router
        .route_layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
