//! Embedded polling viewer page
//!
//! A single static HTML page that polls `GET /api/webhook` on a fixed
//! interval and renders the stored events. On a failed fetch it shows a
//! generic failure message and recovers on the next poll tick.

use axum::response::Html;

static VIEWER_HTML: &str = include_str!("viewer.html");

/// GET / - Serve the viewer page
pub async fn viewer_page() -> Html<&'static str> {
    Html(VIEWER_HTML)
}
