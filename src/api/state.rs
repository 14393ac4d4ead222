//! Shared application state

use std::sync::Arc;

use crate::store::EventStore;

/// State shared by the ingest and query handlers.
///
/// The event store is constructed once at startup and injected here, so
/// both endpoints observe the same single-instance, process-lifetime history.
pub struct AppState {
    /// The bounded event history
    pub store: Arc<EventStore>,
}

impl AppState {
    /// Create state around an existing store
    pub fn new(store: Arc<EventStore>) -> Self {
        Self { store }
    }
}
