//! # smartroom-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the two-endpoint status API the dashboard consumes
//!   (`GET /status`, `POST /toggle-light`)
//! - Serve the embedded dashboard page itself (`GET /`)
//! - Map HTTP requests into status-store calls (driving adapter)
//!
//! ## Dependency rule
//! Depends on `smartroom-app` (for the [`StatusStore`] port) and
//! `smartroom-domain` (for the wire type). Never leaks axum types into the
//! domain. Handlers only ever see the [`StatusStore`] side of the store —
//! sensor writes are not reachable from this crate.
//!
//! [`StatusStore`]: smartroom_app::ports::StatusStore

pub mod api;
pub mod dashboard;
pub mod router;
pub mod state;
