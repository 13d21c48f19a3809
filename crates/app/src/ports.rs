//! Port definitions — traits that adapters consume.
//!
//! Ports are the boundaries between the application core and the outside
//! world. The status store is deliberately split by caller: the HTTP
//! adapter is only ever given a [`StatusStore`], so no request handler can
//! write a sensor field.

use smartroom_domain::mode::RoomMode;
use smartroom_domain::sensor::SensorField;
use smartroom_domain::status::DeviceStatus;

/// Read/control view of the device status, consumed by driving adapters
/// (the HTTP layer).
///
/// All operations are synchronous, infallible, and complete in constant
/// time; there is no IO behind them.
pub trait StatusStore: Send + Sync {
    /// Return a consistent copy of all status fields.
    ///
    /// The copy is taken under a single critical section: a snapshot never
    /// mixes pre- and post-update values of a concurrent write.
    fn snapshot(&self) -> DeviceStatus;

    /// Flip the light-monitoring flag and return the new value.
    ///
    /// Concurrent calls serialize; every call flips exactly once.
    fn toggle_light_monitoring(&self) -> bool;
}

/// Write view for sensor collaborators (presence, security, access
/// control, mode selection). Never handed to the HTTP layer.
pub trait SensorSink: Send + Sync {
    /// Record a sensor reading.
    fn set_sensor(&self, field: SensorField, value: bool);

    /// Record an operating-mode change.
    fn set_room_mode(&self, mode: RoomMode);
}
