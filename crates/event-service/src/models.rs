// Domain types for the event API
// Decision: Wire format uses camelCase to match existing frontend clients
// Decision: Absent optional fields are omitted from JSON rather than sent as null
// Decision: Field values are stored as the JSON the client sent; only presence is checked

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// A listed event. Created once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier assigned at creation.
    #[schema(example = "01932c4e-8f5a-7b3c-9d2e-4f6a8b0c1d2e")]
    pub id: String,
    /// Event title.
    #[schema(example = "Spring Hackathon")]
    pub title: Value,
    /// Longer description of the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    /// Event date. Free-form; not parsed or validated.
    #[schema(example = "2025-04-12")]
    pub date: Value,
    /// Where the event takes place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<Value>,
    /// Ticket price. Any JSON value is accepted as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    /// Contact address of the organizer. Not validated.
    #[schema(example = "organizer@example.edu")]
    pub organizer_email: Value,
}

/// Validated input for a new event, before an ID is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub title: Value,
    pub description: Option<Value>,
    pub date: Value,
    pub venue: Option<Value>,
    pub price: Option<Value>,
    pub organizer_email: Value,
}

impl NewEvent {
    /// Attach an identifier, producing the stored event.
    pub fn into_event(self, id: String) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            date: self.date,
            venue: self.venue,
            price: self.price,
            organizer_email: self.organizer_email,
        }
    }
}
