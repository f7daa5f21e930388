//! OpenAPI document for the public routes.

use utoipa::OpenApi;

use super::handlers;

/// Path the OpenAPI JSON is served from.
pub const OPENAPI_PATH: &str = "/swagger/v1/swagger.json";

/// Path the Swagger UI is mounted at.
pub const SWAGGER_UI_PATH: &str = "/swagger";

#[derive(OpenApi)]
#[openapi(
    info(title = "Branch API", description = "Side-by-side deployment demo API"),
    paths(handlers::root, handlers::health, handlers::info),
    components(schemas(
        handlers::RootResponse,
        handlers::HealthResponse,
        handlers::InfoResponse,
    )),
    tags(
        (name = "Deployment", description = "Deployment identity of this instance"),
        (name = "Observability", description = "Service health"),
    )
)]
pub struct ApiDoc;
