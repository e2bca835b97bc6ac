// Campusboard Event Service
// Decision: Library holds routes and state so tests and binaries share one router

// API routes and request types
pub mod api;

// Server configuration
pub mod config;

// Event identifier strategies
pub mod ids;

// Domain types
pub mod models;

// OpenAPI spec generation
pub mod openapi;

// Services layer
pub mod services;
pub use services::EventService;

// Storage layer
pub mod storage;

use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the full application router.
///
/// Cross-origin requests are allowed from any origin.
pub fn build_router(event_service: Arc<EventService>) -> Router {
    let events_state = api::events::AppState::new(event_service);

    Router::new()
        .merge(api::health::routes())
        .merge(api::events::routes(events_state))
        .merge(openapi::routes())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
