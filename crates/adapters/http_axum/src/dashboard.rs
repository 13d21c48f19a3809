//! The embedded dashboard page.
//!
//! The device serves its own UI: a single static HTML page that polls
//! `GET /status` every two seconds and posts to `/toggle-light`. The page
//! is compiled into the binary; nothing is rendered server-side.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// `GET /` — the dashboard page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
