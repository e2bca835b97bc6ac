// Event identifier generation
// Decision: UUID v7 by default (time-ordered like a timestamp, but collision-free)
// Decision: Generator is injected so tests can use deterministic IDs

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of unique event identifiers.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// UUID v7 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV7Ids;

impl IdGenerator for UuidV7Ids {
    fn next_id(&self) -> String {
        Uuid::now_v7().to_string()
    }
}

/// Monotonic counter identifiers starting at 1.
#[derive(Debug, Default)]
pub struct SequentialIds {
    last: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        (self.last.fetch_add(1, Ordering::Relaxed) + 1).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_ids_are_unique_in_tight_loop() {
        let ids = UuidV7Ids;
        let generated: HashSet<String> = (0..1000).map(|_| ids.next_id()).collect();
        assert_eq!(generated.len(), 1000);
    }

    #[test]
    fn test_uuid_ids_parse_as_v7() {
        let id = UuidV7Ids.next_id();
        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 7);
    }

    #[test]
    fn test_sequential_ids_count_up() {
        let ids = SequentialIds::new();
        assert_eq!(ids.next_id(), "1");
        assert_eq!(ids.next_id(), "2");
        assert_eq!(ids.next_id(), "3");
    }
}
