// OpenAPI specification generation
//
// Served by the API at /api-doc/openapi.json with Swagger UI at /swagger-ui,
// and printed by the export-openapi binary for static docs.

use crate::api;
use crate::api::events::CreateEventRequest;
use crate::api::ErrorResponse;
use crate::models::Event;
use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Path the OpenAPI document is served under.
pub const OPENAPI_PATH: &str = "/api-doc/openapi.json";

/// Path Swagger UI is mounted under.
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

/// OpenAPI documentation for the event API
#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health,
        api::events::create_event,
        api::events::list_events,
    ),
    components(schemas(Event, CreateEventRequest, ErrorResponse)),
    tags(
        (name = "health", description = "Liveness endpoint"),
        (name = "events", description = "Event creation and listing")
    ),
    info(
        title = "Campusboard Events API",
        version = "0.1.0",
        description = "Create and list campus events",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Generate the OpenAPI spec as a pretty-printed JSON string
    pub fn to_json() -> Result<String, serde_json::Error> {
        Self::openapi().to_pretty_json()
    }
}

/// Swagger UI, which also serves the document at [`OPENAPI_PATH`]
pub fn routes() -> Router {
    Router::new().merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_PATH, ApiDoc::openapi()))
}
