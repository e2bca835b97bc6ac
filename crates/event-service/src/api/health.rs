// Liveness check

use axum::{routing::get, Router};

/// Token returned by `/health` while the process is serving.
pub const HEALTH_TOKEN: &str = "ok";

pub fn routes() -> Router {
    Router::new().route("/health", get(health))
}

/// GET /health - Liveness check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = String, content_type = "text/plain")
    ),
    tag = "health"
)]
pub async fn health() -> &'static str {
    HEALTH_TOKEN
}
