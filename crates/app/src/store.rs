//! In-memory status store — the single source of truth for device status.

use std::sync::{Mutex, MutexGuard, PoisonError};

use smartroom_domain::mode::RoomMode;
use smartroom_domain::sensor::SensorField;
use smartroom_domain::status::DeviceStatus;

use crate::ports::{SensorSink, StatusStore};

/// In-memory [`StatusStore`] / [`SensorSink`] backed by a [`Mutex`].
///
/// The critical section only ever copies or flips a handful of plain
/// fields; no blocking work happens while the lock is held.
pub struct InMemoryStatusStore {
    status: Mutex<DeviceStatus>,
}

impl InMemoryStatusStore {
    /// Create a store starting from the given status.
    #[must_use]
    pub fn new(initial: DeviceStatus) -> Self {
        Self {
            status: Mutex::new(initial),
        }
    }

    fn lock(&self) -> MutexGuard<'_, DeviceStatus> {
        // The guarded value is plain data mutated in single assignments;
        // a panic in another thread cannot leave it half-written.
        self.status.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryStatusStore {
    fn default() -> Self {
        Self::new(DeviceStatus::default())
    }
}

impl StatusStore for InMemoryStatusStore {
    fn snapshot(&self) -> DeviceStatus {
        self.lock().clone()
    }

    fn toggle_light_monitoring(&self) -> bool {
        self.lock().toggle_monitor_light()
    }
}

impl SensorSink for InMemoryStatusStore {
    fn set_sensor(&self, field: SensorField, value: bool) {
        self.lock().apply_sensor(field, value);
    }

    fn set_room_mode(&self, mode: RoomMode) {
        self.lock().room_mode = mode;
    }
}
