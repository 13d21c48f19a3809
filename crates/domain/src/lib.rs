//! # smartroom-domain
//!
//! Pure domain model for the smartroom device.
//!
//! ## Responsibilities
//! - Define [`DeviceStatus`](status::DeviceStatus) — the five status fields
//!   the device reports to its dashboard
//! - Define [`RoomMode`](mode::RoomMode) — the operating-mode enum
//! - Define [`SensorField`](sensor::SensorField) — the fields sensor
//!   collaborators are allowed to write
//! - Contain the status mutation logic (flag toggling, sensor writes)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod mode;
pub mod sensor;
pub mod status;
