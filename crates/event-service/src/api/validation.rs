// Input validation for the event API
//
// Presence checks only: title, date and organizerEmail must be present, not
// null and not an empty string. Types and formats (date, email) are not checked.

use super::common::ErrorResponse;
use super::events::CreateEventRequest;
use crate::models::NewEvent;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

/// Message returned to clients when a required field is absent.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

/// A required field was absent, null or empty.
#[derive(Debug, PartialEq, Eq)]
pub struct ValidationError;

impl From<ValidationError> for (StatusCode, Json<ErrorResponse>) {
    fn from(_: ValidationError) -> Self {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(MISSING_FIELDS_MESSAGE)),
        )
    }
}

fn present(value: Option<Value>) -> Option<Value> {
    value.filter(|v| !v.is_null() && v.as_str() != Some(""))
}

/// Check required fields and turn the request into a [`NewEvent`].
pub fn validate_create_event(req: CreateEventRequest) -> Result<NewEvent, ValidationError> {
    let title = present(req.title);
    let date = present(req.date);
    let organizer_email = present(req.organizer_email);

    match (title, date, organizer_email) {
        (Some(title), Some(date), Some(organizer_email)) => Ok(NewEvent {
            title,
            description: req.description,
            date,
            venue: req.venue,
            price: req.price,
            organizer_email,
        }),
        (title, date, organizer_email) => {
            tracing::warn!(
                has_title = title.is_some(),
                has_date = date.is_some(),
                has_organizer_email = organizer_email.is_some(),
                "Rejected event with missing required fields"
            );
            Err(ValidationError)
        }
    }
}
