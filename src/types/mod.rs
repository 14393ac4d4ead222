//! Core data structures for the webhook inbox

pub mod event;

pub use event::{EventBody, WebhookEvent};
