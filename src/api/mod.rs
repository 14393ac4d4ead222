//! API module for the HTTP surface
//!
//! Provides the axum router, shared handler state, the webhook ingest and
//! query handlers, and the embedded polling viewer page.

pub mod http;
pub mod state;
pub mod viewer;
pub mod webhook;
