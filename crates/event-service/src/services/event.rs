// Event service for business logic
//
// Owns the event store and the ID generator. Input is already validated
// by the API layer; this service assigns the identifier and appends.

use crate::ids::{IdGenerator, UuidV7Ids};
use crate::models::{Event, NewEvent};
use crate::storage::{EventStore, InMemoryEventStore};
use anyhow::Result;
use std::sync::Arc;

pub struct EventService {
    store: Arc<dyn EventStore>,
    ids: Arc<dyn IdGenerator>,
}

impl EventService {
    pub fn new(store: Arc<dyn EventStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }

    /// In-memory store with UUID v7 identifiers.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryEventStore::new()), Arc::new(UuidV7Ids))
    }

    pub async fn create(&self, input: NewEvent) -> Result<Event> {
        let event = input.into_event(self.ids.next_id());
        let event = self.store.append(event).await?;
        tracing::info!(event_id = %event.id, title = %event.title, "Event created");
        Ok(event)
    }

    pub async fn list(&self) -> Result<Vec<Event>> {
        self.store.list().await
    }
}
