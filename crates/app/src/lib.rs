//! # smartroom-app
//!
//! Application layer — the status store and its **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the two sides of the status store as port traits:
//!   - [`StatusStore`](ports::StatusStore) — snapshot + toggle, the only
//!     view the HTTP adapter gets
//!   - [`SensorSink`](ports::SensorSink) — sensor and mode writes, handed
//!     to sensor collaborators only
//! - Provide the in-process [`InMemoryStatusStore`](store::InMemoryStatusStore)
//!   that implements both, with locked-snapshot semantics
//!
//! ## Dependency rule
//! Depends on `smartroom-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod store;
