//! Webhook Inbox
//!
//! A minimal webhook receiver and viewer: accepts any inbound HTTP request,
//! keeps a bounded in-memory history of what arrived, and serves that history
//! to a polling frontend. Nothing is persisted; the history lives for the
//! process lifetime and resets on restart.
//!
//! # Modules
//!
//! - `types`: Core data structures (WebhookEvent, EventBody)
//! - `store`: Bounded, thread-safe in-memory event history
//! - `api`: Axum router, ingest/query handlers, embedded viewer page
//! - `config`: Bind address configuration
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use webhook_inbox::api::http::create_router;
//! use webhook_inbox::api::state::AppState;
//! use webhook_inbox::store::EventStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(EventStore::new());
//!     let state = Arc::new(AppState::new(store));
//!     let app = create_router(state);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod api;
pub mod config;
pub mod store;
pub mod types;

// Re-export commonly used items at crate root
pub use config::ServerConfig;
pub use store::{EventStore, DEFAULT_CAPACITY};
pub use types::{EventBody, WebhookEvent};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
