// Storage layer for the event API
// Decision: Route and service code depend on the EventStore trait only,
// so a persistent backend can replace the in-memory one without touching them
//
// - InMemoryEventStore: process-lifetime list, lost on restart

pub mod memory;

pub use memory::InMemoryEventStore;

use crate::models::Event;
use anyhow::Result;
use async_trait::async_trait;

/// Append-only, insertion-ordered event storage.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Append an event at the end of the list and return it.
    async fn append(&self, event: Event) -> Result<Event>;

    /// All events in insertion order.
    async fn list(&self) -> Result<Vec<Event>>;
}
