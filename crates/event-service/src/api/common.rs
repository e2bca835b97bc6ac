// Shared API response types
// Decision: Every client-visible error is a JSON object with a single "error" string

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message sent for storage or other server-side failures.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Error body for 400 and 500 responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable reason, e.g. `Missing required fields`.
    #[schema(example = "Missing required fields")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// 500 with a fixed message; details stay in the server log
    pub fn internal() -> (StatusCode, Json<Self>) {
        Self::new(INTERNAL_ERROR_MESSAGE).into_response(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn into_response(self, status: StatusCode) -> (StatusCode, Json<Self>) {
        (status, Json(self))
    }
}
