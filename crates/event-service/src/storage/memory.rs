// In-memory event storage
// Decision: Use parking_lot for thread-safe access
// Decision: Readers get a cloned snapshot, never a reference into the live list

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;

use super::EventStore;
use crate::models::Event;

/// In-memory event store.
/// All data is stored in memory and lost on restart
#[derive(Default)]
pub struct InMemoryEventStore {
    events: RwLock<Vec<Event>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn append(&self, event: Event) -> Result<Event> {
        self.events.write().push(event.clone());
        Ok(event)
    }

    async fn list(&self) -> Result<Vec<Event>> {
        Ok(self.events.read().clone())
    }
}
