//! Event Store - bounded in-memory history of received webhooks
//!
//! The store keeps the most recent events in insertion order, newest first,
//! capped at a fixed capacity. There is no eviction policy beyond dropping
//! the oldest events once capacity is exceeded, and no persistence: the
//! history lives for the process lifetime and resets on restart.

use std::collections::VecDeque;

use parking_lot::RwLock;

use crate::types::WebhookEvent;

/// Maximum number of events retained by default
pub const DEFAULT_CAPACITY: usize = 50;

/// Bounded, ordered history of received webhook events.
///
/// Thread-safe: `append` takes the write lock for the whole read-modify-write,
/// so concurrent appends cannot lose updates or exceed capacity, and
/// `read_all` observes a consistent snapshot. Intended to be constructed once
/// and shared as `Arc<EventStore>` between the ingest and query handlers.
pub struct EventStore {
    capacity: usize,
    events: RwLock<VecDeque<WebhookEvent>>,
}

impl EventStore {
    /// Create a store with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a store with a custom capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            events: RwLock::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Insert an event at the front (most-recent-first), dropping the oldest
    /// events beyond capacity. Always succeeds.
    pub fn append(&self, event: WebhookEvent) {
        let mut events = self.events.write();
        events.push_front(event);
        events.truncate(self.capacity);
    }

    /// Snapshot of the current contents, most-recent-first
    pub fn read_all(&self) -> Vec<WebhookEvent> {
        self.events.read().iter().cloned().collect()
    }

    /// Number of events currently held
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    /// Whether the store holds no events
    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    /// Configured maximum capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}
