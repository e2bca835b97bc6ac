// Event HTTP routes
// Events are created via POST and listed in creation order; there is no
// update, delete or lookup by ID.

use super::common::ErrorResponse;
use super::validation::validate_create_event;
use crate::models::Event;
use crate::services::EventService;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use utoipa::ToSchema;

/// Request to create an event. Required fields are checked by the handler
/// so a missing field yields a 400 instead of a deserialization error.
/// Values of any JSON type are accepted and stored as sent.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    /// Required.
    #[schema(example = "Spring Hackathon")]
    pub title: Option<Value>,
    /// Optional description.
    pub description: Option<Value>,
    /// Required.
    #[schema(example = "2025-04-12")]
    pub date: Option<Value>,
    /// Optional venue.
    pub venue: Option<Value>,
    /// Any JSON value.
    pub price: Option<Value>,
    /// Required.
    #[schema(example = "organizer@example.edu")]
    pub organizer_email: Option<Value>,
}

// ============================================
// App State and Routes
// ============================================

/// App state for events routes
#[derive(Clone)]
pub struct AppState {
    pub event_service: Arc<EventService>,
}

impl AppState {
    pub fn new(event_service: Arc<EventService>) -> Self {
        Self { event_service }
    }
}

/// Create event routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .with_state(state)
}

// ============================================
// HTTP Handlers
// ============================================

/// POST /events - Create an event
#[utoipa::path(
    post,
    path = "/events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created", body = Event),
        (status = 400, description = "Missing required fields or malformed body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Event>), (StatusCode, Json<ErrorResponse>)> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Rejected malformed event body");
        ErrorResponse::new(rejection.body_text()).into_response(StatusCode::BAD_REQUEST)
    })?;

    let new_event = validate_create_event(req)?;

    let event = state.event_service.create(new_event).await.map_err(|e| {
        tracing::error!("Failed to create event: {}", e);
        ErrorResponse::internal()
    })?;

    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /events - List all events in creation order
#[utoipa::path(
    get,
    path = "/events",
    responses(
        (status = 200, description = "All events, oldest first", body = Vec<Event>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<Event>>, (StatusCode, Json<ErrorResponse>)> {
    let events = state.event_service.list().await.map_err(|e| {
        tracing::error!("Failed to list events: {}", e);
        ErrorResponse::internal()
    })?;

    Ok(Json(events))
}
